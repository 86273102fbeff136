//! Line classification. Every physical line of the source is either
//! documentation or code, decided by a single textual rule on the comment
//! lead-in.

/// The kind of content a line (or a block of lines) carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// Prose documentation written behind the comment lead-in.
	Doc,
	/// Everything else, including the shebang and `#`-prefixed machine
	/// lines with no space after the lead-in.
	Code,
}

/// One physical input line: a 1-based ordinal and the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	pub number: usize,
	pub text: String,
}

/// A [`Line`] with its classification attached. Documentation lines also
/// carry the text with the comment lead-in stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledLine {
	pub line: Line,
	pub tag: Tag,
	pub stripped: Option<String>,
}

impl LabeledLine {
	/// The text this line contributes to its tag's pre-render stream:
	/// the stripped prose for documentation, the raw text for code.
	pub fn stream_text(&self) -> &str {
		match self.tag {
			Tag::Doc => self.stripped.as_deref().unwrap_or(""),
			Tag::Code => &self.line.text,
		}
	}
}

/// Classify one raw line.
///
/// A line is documentation if and only if the comment lead-in is followed
/// by a single space or by end-of-line: `# like this`, or a bare `#`. A
/// lead-in followed by anything else (`#!/bin/sh`, `#no`, `##`) is code.
/// This is what lets a script keep machine-readable comment-prefixed
/// metadata, such as a usage banner, in the code column while ordinary
/// prose goes to the documentation column.
pub fn classify_line(text: &str) -> (Tag, Option<String>) {
	if text == "#" {
		return (Tag::Doc, Some(String::new()));
	}

	if let Some(rest) = text.strip_prefix("# ") {
		return (Tag::Doc, Some(rest.to_string()));
	}

	(Tag::Code, None)
}

/// Classify every line of a source file, preserving 1-based ordinals.
pub fn classify_source(source: &str) -> Vec<LabeledLine> {
	source
		.lines()
		.enumerate()
		.map(|(index, text)| {
			let (tag, stripped) = classify_line(text);
			LabeledLine {
				line: Line {
					number: index + 1,
					text: text.to_string(),
				},
				tag,
				stripped,
			}
		})
		.collect()
}
