//! Pipeline orchestration. One invocation renders one source file,
//! stage by stage, strictly forward: classify, assemble, render the two
//! streams, split, recombine, template. No stage re-enters an earlier
//! one, and nothing survives the run except the returned document.

use std::path::Path;
use std::path::PathBuf;

use crate::SidedocError;
use crate::SidedocResult;
use crate::blocks::assemble;
use crate::blocks::code_stream;
use crate::blocks::doc_stream;
use crate::blocks::pair_count;
use crate::classifier::classify_source;
use crate::recombine::recombine;
use crate::render::CodeHighlighter;
use crate::render::MarkdownProse;
use crate::render::ProseRenderer;
use crate::render::SpanHighlighter;
use crate::render::StreamInput;
use crate::split::split_fragments;
use crate::template::LayoutTemplate;
use crate::template::PageTemplate;

/// Advisory diagnostics gathered while rendering. Never fatal, never part
/// of the document; the caller decides where they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderWarning {
	/// The first line of the source is not an interpreter directive.
	MissingShebang,
}

impl RenderWarning {
	pub fn message(&self) -> String {
		match self {
			Self::MissingShebang => "no shebang line at the top of the source".to_string(),
		}
	}
}

/// The finished document plus the advisory warnings gathered while
/// producing it.
#[derive(Debug)]
pub struct RenderedDocument {
	pub html: String,
	pub warnings: Vec<RenderWarning>,
}

/// The full transformation pipeline, holding one collaborator per role.
pub struct Pipeline {
	prose: Box<dyn ProseRenderer>,
	highlighter: Box<dyn CodeHighlighter>,
	template: Box<dyn PageTemplate>,
	language: String,
}

impl Pipeline {
	pub fn new(
		prose: Box<dyn ProseRenderer>,
		highlighter: Box<dyn CodeHighlighter>,
		template: Box<dyn PageTemplate>,
		language: impl Into<String>,
	) -> Self {
		Self {
			prose,
			highlighter,
			template,
			language: language.into(),
		}
	}

	/// A pipeline over the in-process collaborators, which are always
	/// available.
	pub fn with_defaults(language: impl Into<String>) -> Self {
		Self::new(
			Box::new(MarkdownProse),
			Box::new(SpanHighlighter),
			Box::new(LayoutTemplate),
			language,
		)
	}

	/// Render one source file into a complete HTML document.
	///
	/// Environment checks run first: both rendering collaborators are
	/// probed and the per-run working directory is created before any
	/// line is classified. The working directory holds the classified
	/// stream artifacts and is removed on every exit path, including
	/// error returns.
	pub fn render(&self, source: &str, title: &str) -> SidedocResult<RenderedDocument> {
		self.prose.probe()?;
		self.highlighter.probe()?;

		let workdir = tempfile::tempdir().map_err(|e| SidedocError::Workdir {
			reason: e.to_string(),
		})?;

		let mut warnings = Vec::new();
		if !source
			.lines()
			.next()
			.is_some_and(|line| line.starts_with("#!"))
		{
			warnings.push(RenderWarning::MissingShebang);
		}

		let blocks = assemble(classify_source(source));
		let pairs = pair_count(&blocks);

		let docs_text = doc_stream(&blocks);
		let code_text = code_stream(&blocks);
		let docs_path = write_stream(workdir.path(), "docs", &docs_text)?;
		let code_path = write_stream(workdir.path(), "code", &code_text)?;

		let docs_html = self.prose.render(&StreamInput {
			text: &docs_text,
			path: &docs_path,
		})?;
		let code_html = self.highlighter.highlight(
			&StreamInput {
				text: &code_text,
				path: &code_path,
			},
			&self.language,
		)?;

		let doc_fragments =
			split_fragments(&docs_html, self.prose.divider_pattern(), "documentation", pairs)?;
		let code_fragments =
			split_fragments(&code_html, self.highlighter.divider_pattern(), "code", pairs)?;

		let document = recombine(title, doc_fragments, code_fragments)?;
		let html = self.template.render_page(&document.title, &document.body_rows())?;

		Ok(RenderedDocument { html, warnings })
	}
}

fn write_stream(dir: &Path, name: &str, text: &str) -> SidedocResult<PathBuf> {
	let path = dir.join(name);
	std::fs::write(&path, text)?;
	Ok(path)
}
