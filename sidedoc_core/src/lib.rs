//! `sidedoc_core` is the rendering engine behind the `sidedoc` literate
//! documentation tool. It takes one annotated shell script and produces a
//! two-column HTML document: prose from the script's comments on the left,
//! the source itself on the right.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Annotated source file
//!   → Classifier (labels each line documentation or code)
//!   → Assembler (groups runs into index-paired blocks, defers header code)
//!   → Collaborators (prose renderer + highlighter, divider markers embedded)
//!   → Splitter (cuts rendered streams back into per-block fragments)
//!   → Recombiner (pairs fragments, decides presentation order, emits rows)
//!   → Page template (wraps the rows in the two-column document shell)
//! ```
//!
//! ## Key Types
//!
//! - [`Pipeline`] — the whole transformation, one collaborator per role.
//! - [`Block`] — a maximal run of same-tagged lines with its pair index.
//! - [`ProseRenderer`] / [`CodeHighlighter`] / [`PageTemplate`] — the
//!   collaborator seams; concrete tools swap without touching the
//!   pipeline.
//! - [`SidedocError`] — the error taxonomy: environment errors surface
//!   before processing, integrity errors abort mid-pipeline, advisories
//!   ride along in [`RenderedDocument::warnings`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sidedoc_core::Pipeline;
//!
//! let pipeline = Pipeline::with_defaults("sh");
//! let rendered = pipeline
//! 	.render("#!/bin/sh\n# Say hi\necho hi\n", "hello.sh")
//! 	.unwrap();
//! assert!(rendered.html.contains("Say hi"));
//! ```

pub use blocks::*;
pub use classifier::*;
pub use engine::*;
pub use error::*;
pub use recombine::*;
pub use render::*;
pub use split::*;
pub use template::*;

mod blocks;
mod classifier;
pub mod divider;
mod engine;
mod error;
mod recombine;
mod render;
mod split;
mod template;
