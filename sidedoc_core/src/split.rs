//! Section splitting. A rendered stream is cut back into per-block
//! fragments at the divider markers the collaborator carried through.
//! Rendering may reflow whitespace, so the cut happens on the declared
//! marker form, never on blank lines.

use regex::Regex;

use crate::SidedocError;
use crate::SidedocResult;

/// Cut one rendered stream at its divider markers into exactly
/// `expected` fragments, stripping the marker text and edge newlines
/// from each fragment.
///
/// Any other count means the renderer desynchronized from the source
/// blocks (a marker was altered, swallowed, or forged) and the document
/// cannot be safely assembled. That is a fatal integrity error, never a
/// condition to proceed past.
pub fn split_fragments(
	stream: &str,
	divider: &Regex,
	stream_name: &'static str,
	expected: usize,
) -> SidedocResult<Vec<String>> {
	let fragments: Vec<String> = divider
		.split(stream)
		.map(|fragment| fragment.trim_matches(['\n', '\r']).to_string())
		.collect();

	if fragments.len() != expected {
		return Err(SidedocError::FragmentCountMismatch {
			stream: stream_name,
			expected,
			found: fragments.len(),
		});
	}

	Ok(fragments)
}
