//! Recombination. The two independently rendered fragment lists are
//! paired back up by index and turned into the row stream the page
//! template embeds in its two-column table.

use crate::SidedocError;
use crate::SidedocResult;

/// Which kind of section leads the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationOrder {
	/// The file opened with a comment: no header code, prose leads.
	DocFirst,
	/// The file opened with code (typically an interpreter directive),
	/// which the assembler already paired with the first doc block.
	CodeFirst,
}

/// One doc/code fragment pair, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub index: usize,
	pub docs: String,
	pub code: String,
}

/// The finished, ordered document handed to the page template.
#[derive(Debug)]
pub struct Document {
	pub title: String,
	pub order: PresentationOrder,
	pub sections: Vec<Section>,
}

/// Pair the aligned fragment lists into an ordered document.
///
/// The lists must be the same length; a mismatch here means an earlier
/// integrity check was bypassed, and is just as fatal. The presentation
/// order falls out of a single test: a blank code fragment at index 0
/// means the file had no header code.
pub fn recombine(
	title: &str,
	doc_fragments: Vec<String>,
	code_fragments: Vec<String>,
) -> SidedocResult<Document> {
	if doc_fragments.len() != code_fragments.len() {
		return Err(SidedocError::FragmentCountMismatch {
			stream: "code",
			expected: doc_fragments.len(),
			found: code_fragments.len(),
		});
	}

	let order = if code_fragments
		.first()
		.is_none_or(|fragment| fragment.trim().is_empty())
	{
		PresentationOrder::DocFirst
	} else {
		PresentationOrder::CodeFirst
	};

	let sections = doc_fragments
		.into_iter()
		.zip(code_fragments)
		.enumerate()
		.map(|(index, (docs, code))| Section { index, docs, code })
		.collect();

	Ok(Document {
		title: title.to_string(),
		order,
		sections,
	})
}

impl Document {
	/// The table-row markup for the page template: one row per section,
	/// a documentation cell beside a code cell.
	///
	/// A blank leading code fragment keeps its index slot but contributes
	/// no cell content; blank fragments elsewhere still render their
	/// wrapper so the row grid stays regular.
	pub fn body_rows(&self) -> String {
		let mut rows = String::new();

		for section in &self.sections {
			let suppress_code =
				section.index == 0 && self.order == PresentationOrder::DocFirst;

			rows.push_str("<tr><td class=\"docs\">");
			rows.push_str(&section.docs);
			rows.push_str("</td><td class=\"code\">");
			if !suppress_code {
				rows.push_str("<div class=\"highlight\"><pre>");
				rows.push_str(&section.code);
				rows.push_str("</pre></div>");
			}
			rows.push_str("</td></tr>\n");
		}

		rows
	}
}
