//! Block assembly. Consecutive same-tagged lines are grouped into blocks
//! that share a pair index with their opposite-tagged counterpart, and the
//! code that precedes a file's first comment is deferred so the opening
//! prose leads the rendered document.

use crate::classifier::LabeledLine;
use crate::classifier::Tag;
use crate::divider::CODE_DIVIDER;
use crate::divider::DOC_DIVIDER;

/// A maximal run of same-tagged lines, carrying the 0-based index of the
/// doc/code pair it belongs to. Placeholder blocks synthesized for files
/// that lack one side entirely have an empty line list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	pub index: usize,
	pub tag: Tag,
	pub lines: Vec<LabeledLine>,
}

impl Block {
	/// The text this block contributes to its tag's pre-render stream.
	pub fn text(&self) -> String {
		self
			.lines
			.iter()
			.map(LabeledLine::stream_text)
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Returns true for synthesized placeholder blocks.
	pub fn is_blank(&self) -> bool {
		self.lines.is_empty()
	}
}

/// States of the assembler. The header flip is a one-time special case, so
/// it gets an explicit state instead of a flag: the machine collects the
/// candidate header until the file's first tag boundary, then runs the
/// regular alternation for the rest of the stream.
enum AssemblerState {
	/// No boundary seen yet; accumulated code is the candidate header.
	CollectingHeader,
	/// Past the first boundary; every doc-to-code crossing emits a pair.
	SteadyState,
}

/// Streaming assembler over the labeled line stream of one file.
///
/// Two accumulators collect the current documentation run and the current
/// code run. A code run completed by an incoming doc line becomes the
/// pending code block; a doc run completed by an incoming code line is
/// emitted immediately, paired with whatever code is pending. The first
/// boundary is special: the completed code run is the file's header, which
/// stays pending so it pairs with the first doc block instead of preceding
/// it.
pub struct BlockAssembler {
	state: AssemblerState,
	doc_acc: Vec<LabeledLine>,
	code_acc: Vec<LabeledLine>,
	pending_code: Option<Vec<LabeledLine>>,
	blocks: Vec<Block>,
	next_index: usize,
}

impl Default for BlockAssembler {
	fn default() -> Self {
		Self {
			state: AssemblerState::CollectingHeader,
			doc_acc: Vec::new(),
			code_acc: Vec::new(),
			pending_code: None,
			blocks: Vec::new(),
			next_index: 0,
		}
	}
}

impl BlockAssembler {
	/// Feed the next line into the machine.
	pub fn push(&mut self, line: LabeledLine) {
		match line.tag {
			Tag::Doc => {
				if !self.code_acc.is_empty() {
					// A code run just completed.
					let code = std::mem::take(&mut self.code_acc);
					match self.state {
						AssemblerState::CollectingHeader => {
							// First boundary: the completed run is the file's
							// header. Defer it instead of emitting so the
							// first doc block leads the document.
							self.state = AssemblerState::SteadyState;
							self.pending_code = Some(code);
						}
						AssemblerState::SteadyState => {
							self.pending_code = Some(code);
						}
					}
				}
				self.doc_acc.push(line);
			}
			Tag::Code => {
				if !self.doc_acc.is_empty() {
					// A doc run just completed: emit it with its code.
					let code = match self.state {
						AssemblerState::CollectingHeader => {
							// First boundary in a file that opens with
							// documentation: there is no header to defer.
							self.state = AssemblerState::SteadyState;
							Vec::new()
						}
						AssemblerState::SteadyState => {
							self.pending_code.take().unwrap_or_default()
						}
					};
					let doc = std::mem::take(&mut self.doc_acc);
					self.emit_pair(doc, code);
				}
				self.code_acc.push(line);
			}
		}
	}

	/// Flush the remaining accumulators and return the assembled blocks.
	/// Every file yields at least one pair: missing sides are synthesized
	/// as blank placeholder blocks.
	pub fn finish(mut self) -> Vec<Block> {
		let doc = std::mem::take(&mut self.doc_acc);
		let code = self
			.pending_code
			.take()
			.unwrap_or_else(|| std::mem::take(&mut self.code_acc));

		if !doc.is_empty() || !code.is_empty() || self.blocks.is_empty() {
			self.emit_pair(doc, code);
		}

		self.blocks
	}

	fn emit_pair(&mut self, doc: Vec<LabeledLine>, code: Vec<LabeledLine>) {
		let index = self.next_index;
		self.next_index += 1;
		self.blocks.push(Block {
			index,
			tag: Tag::Doc,
			lines: doc,
		});
		self.blocks.push(Block {
			index,
			tag: Tag::Code,
			lines: code,
		});
	}
}

/// Assemble a labeled line stream into its ordered block list.
pub fn assemble(lines: impl IntoIterator<Item = LabeledLine>) -> Vec<Block> {
	let mut assembler = BlockAssembler::default();
	for line in lines {
		assembler.push(line);
	}
	assembler.finish()
}

/// Number of doc/code pairs in an assembled block list.
pub fn pair_count(blocks: &[Block]) -> usize {
	blocks.len() / 2
}

/// The concatenated documentation text with a divider marker at every
/// block boundary, ready for the prose renderer.
pub fn doc_stream(blocks: &[Block]) -> String {
	let texts: Vec<String> = blocks
		.iter()
		.filter(|block| block.tag == Tag::Doc)
		.map(Block::text)
		.collect();

	let separator = format!("\n\n{DOC_DIVIDER}\n\n");
	let mut stream = texts.join(separator.as_str());
	stream.push('\n');
	stream
}

/// The concatenated code text with a divider marker at every block
/// boundary, ready for the highlighter.
pub fn code_stream(blocks: &[Block]) -> String {
	let texts: Vec<String> = blocks
		.iter()
		.filter(|block| block.tag == Tag::Code)
		.map(Block::text)
		.collect();

	let separator = format!("\n{CODE_DIVIDER}\n");
	let mut stream = texts.join(separator.as_str());
	stream.push('\n');
	stream
}
