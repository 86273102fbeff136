//! The rendering collaborators. Each role is a narrow trait over "a
//! text-to-text transform with a declared contract": it renders one
//! pre-built stream, preserves the divider markers in a form it declares
//! up front, and can be probed for availability before any processing
//! begins. Concrete tools swap without touching the pipeline.

use std::path::Path;
use std::process::Command;
use std::process::Stdio;
use std::sync::LazyLock;

use regex::Regex;

use crate::SidedocError;
use crate::SidedocResult;
use crate::divider::CODE_DIVIDER;
use crate::divider::DOC_DIVIDER_RENDERED;

/// A classified stream handed to a collaborator: the in-memory text plus
/// the artifact file it was written to inside the run's working
/// directory. In-process collaborators read the text; external commands
/// consume the artifact on stdin.
pub struct StreamInput<'a> {
	pub text: &'a str,
	pub path: &'a Path,
}

/// Renders the concatenated documentation stream to HTML.
pub trait ProseRenderer {
	/// Collaborator name used in diagnostics.
	fn name(&self) -> &str;

	/// The form the divider marker takes in this renderer's output.
	fn divider_pattern(&self) -> &Regex;

	/// Verify the collaborator can run. Called before any processing.
	fn probe(&self) -> SidedocResult<()>;

	fn render(&self, input: &StreamInput<'_>) -> SidedocResult<String>;
}

/// Wraps each line of the concatenated code stream in highlighting
/// markup, preserving line order and divider markers.
pub trait CodeHighlighter {
	/// Collaborator name used in diagnostics.
	fn name(&self) -> &str;

	/// The form the divider marker takes in this highlighter's output.
	fn divider_pattern(&self) -> &Regex;

	/// Verify the collaborator can run. Called before any processing.
	fn probe(&self) -> SidedocResult<()>;

	fn highlight(&self, input: &StreamInput<'_>, language: &str) -> SidedocResult<String>;
}

static DOC_DIVIDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!("(?m)^{}$", regex::escape(DOC_DIVIDER_RENDERED)))
		.expect("doc divider pattern compiles")
});

static SPAN_DIVIDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(
		"(?m)^<span class=\"line\">{}</span>$",
		regex::escape(CODE_DIVIDER)
	))
	.expect("span divider pattern compiles")
});

/// External highlighters wrap the divider comment in their own markup. A
/// boundary line is the literal marker surrounded by nothing but the
/// highlighter's tags: a code line that merely contains the marker text
/// somewhere inside it must not cut the stream.
static COMMAND_CODE_DIVIDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(
		"(?m)^(?:<[^>]+>)*{}(?:</[^>]+>)*$",
		regex::escape(CODE_DIVIDER)
	))
	.expect("command divider pattern compiles")
});

/// In-process prose renderer over the `markdown` crate. The divider
/// heading renders as a plain `<h5>` element; raw HTML in the prose is
/// escaped by the renderer, so nothing else in the output can collide
/// with it.
pub struct MarkdownProse;

impl ProseRenderer for MarkdownProse {
	fn name(&self) -> &str {
		"markdown"
	}

	fn divider_pattern(&self) -> &Regex {
		&DOC_DIVIDER_PATTERN
	}

	fn probe(&self) -> SidedocResult<()> {
		Ok(())
	}

	fn render(&self, input: &StreamInput<'_>) -> SidedocResult<String> {
		Ok(markdown::to_html(input.text))
	}
}

/// In-process fallback highlighter: HTML-escapes each code line and wraps
/// it in a line span. No lexical coloring, but the output shape matches
/// what a real highlighter produces and the divider form is exact.
pub struct SpanHighlighter;

impl CodeHighlighter for SpanHighlighter {
	fn name(&self) -> &str {
		"span-highlighter"
	}

	fn divider_pattern(&self) -> &Regex {
		&SPAN_DIVIDER_PATTERN
	}

	fn probe(&self) -> SidedocResult<()> {
		Ok(())
	}

	fn highlight(&self, input: &StreamInput<'_>, _language: &str) -> SidedocResult<String> {
		let mut out = String::with_capacity(input.text.len() * 2);

		for line in input.text.lines() {
			// Blank lines stay bare so a blank block renders as an empty
			// fragment, which is what the recombiner's ordering test reads.
			if !line.is_empty() {
				out.push_str("<span class=\"line\">");
				out.push_str(&html_escape::encode_text(line));
				out.push_str("</span>");
			}
			out.push('\n');
		}

		Ok(out)
	}
}

/// External prose renderer invoked as a synchronous child process. The
/// command must be markdown-compatible: the divider heading has to come
/// back as the same `<h5>` element the in-process renderer produces.
pub struct CommandProse {
	command: String,
}

impl CommandProse {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
		}
	}
}

impl ProseRenderer for CommandProse {
	fn name(&self) -> &str {
		"markdown-command"
	}

	fn divider_pattern(&self) -> &Regex {
		&DOC_DIVIDER_PATTERN
	}

	fn probe(&self) -> SidedocResult<()> {
		probe_command(self.name(), &self.command)
	}

	fn render(&self, input: &StreamInput<'_>) -> SidedocResult<String> {
		run_filter(self.name(), &self.command, input)
	}
}

/// External highlighter invoked as a synchronous child process. A
/// `{language}` placeholder in the command is substituted with the
/// language identifier before invocation.
pub struct CommandHighlighter {
	command: String,
}

impl CommandHighlighter {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
		}
	}
}

impl CodeHighlighter for CommandHighlighter {
	fn name(&self) -> &str {
		"highlight-command"
	}

	fn divider_pattern(&self) -> &Regex {
		&COMMAND_CODE_DIVIDER_PATTERN
	}

	fn probe(&self) -> SidedocResult<()> {
		probe_command(self.name(), &self.command)
	}

	fn highlight(&self, input: &StreamInput<'_>, language: &str) -> SidedocResult<String> {
		let command = self.command.replace("{language}", language);
		let html = run_filter(self.name(), &command, input)?;
		Ok(strip_highlight_shell(&html).to_string())
	}
}

/// Pygments-style highlighters wrap their whole output in a single
/// `<div class="highlight"><pre>` shell. That wrapper is a renderer
/// artifact on the stream's edges, not part of any fragment: the
/// recombiner re-wraps every code cell itself.
fn strip_highlight_shell(html: &str) -> &str {
	let html = html.trim();
	let html = html
		.strip_prefix("<div class=\"highlight\"><pre>")
		.unwrap_or(html);
	let html = html.strip_suffix("</pre></div>").unwrap_or(html);
	html
}

/// Check that the program a command line starts with exists, without
/// running the command itself.
fn probe_command(name: &str, command: &str) -> SidedocResult<()> {
	let Some(program) = command.split_whitespace().next() else {
		return Err(SidedocError::CollaboratorUnavailable {
			name: name.to_string(),
			program: command.to_string(),
		});
	};

	let status = if cfg!(windows) {
		Command::new("where")
			.arg(program)
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.status()
	} else {
		Command::new("sh")
			.arg("-c")
			.arg(format!("command -v {program}"))
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.status()
	};

	match status {
		Ok(status) if status.success() => Ok(()),
		_ => Err(SidedocError::CollaboratorUnavailable {
			name: name.to_string(),
			program: program.to_string(),
		}),
	}
}

/// Run one external collaborator: the stream artifact on stdin, one HTML
/// stream on stdout. Output is consumed only after the child exits.
/// Non-zero exit, or no output for a non-empty stream, is fatal.
fn run_filter(name: &str, command: &str, input: &StreamInput<'_>) -> SidedocResult<String> {
	let artifact = std::fs::File::open(input.path)?;

	let output = if cfg!(windows) {
		Command::new("cmd")
			.arg("/C")
			.arg(command)
			.stdin(Stdio::from(artifact))
			.output()?
	} else {
		Command::new("sh")
			.arg("-c")
			.arg(command)
			.stdin(Stdio::from(artifact))
			.output()?
	};

	if !output.status.success() {
		let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
		let reason = if stderr.is_empty() {
			format!(
				"command exited with status {}",
				output
					.status
					.code()
					.map_or_else(|| "unknown".to_string(), |code| code.to_string())
			)
		} else {
			stderr
		};

		return Err(SidedocError::CollaboratorFailed {
			name: name.to_string(),
			reason,
		});
	}

	let html = String::from_utf8_lossy(&output.stdout).to_string();
	if html.trim().is_empty() && !input.text.trim().is_empty() {
		return Err(SidedocError::CollaboratorFailed {
			name: name.to_string(),
			reason: "command produced no output".to_string(),
		});
	}

	Ok(html)
}
