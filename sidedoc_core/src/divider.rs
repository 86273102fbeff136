//! The divider markers that keep the two rendered streams synchronized with
//! the source blocks. Both literals are defined here and nowhere else; the
//! stream builders insert them, the collaborators carry them through, and
//! the splitter cuts on them.

/// Marker inserted between documentation blocks before prose rendering.
/// A fifth-level heading renders distinctively while staying legal
/// markdown, so it survives any compliant renderer recognizably.
pub const DOC_DIVIDER: &str = "##### DIVIDER";

/// Marker inserted between code blocks before highlighting. Written as a
/// whole-line comment so a highlighter treats it as inert source text.
/// The classifier guarantees no code block can ever contain this exact
/// line: `# DIVIDER` would have been classified as documentation.
pub const CODE_DIVIDER: &str = "# DIVIDER";

/// The form [`DOC_DIVIDER`] takes after markdown rendering.
pub const DOC_DIVIDER_RENDERED: &str = "<h5>DIVIDER</h5>";
