use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Render annotated shell scripts as two-column literate documents.",
	long_about = "sidedoc renders an annotated shell script as a two-column HTML document: \
	              prose from the script's comments on the left, the highlighted source on the \
	              right.\n\nA line is documentation when its `#` is followed by a space or \
	              nothing at all; everything else — the shebang included — stays code. Code \
	              that precedes the first comment is shown beside it rather than above it, so \
	              the opening prose always leads the page.\n\nThe finished document is written \
	              to standard output."
)]
pub struct SidedocCli {
	/// Source file to render. Pass `-` or nothing to read standard input.
	pub source: Option<PathBuf>,

	/// Title for the rendered document. Defaults to the source path, or
	/// `stdin` when reading standard input.
	#[arg(long, short)]
	pub title: Option<String>,

	/// Language identifier handed to the code highlighter.
	#[arg(long, short, default_value = "sh")]
	pub language: String,

	/// Render documentation through an external command instead of the
	/// built-in renderer. The command reads the documentation stream on
	/// stdin and must write markdown-compatible HTML to stdout.
	#[arg(long, value_name = "CMD")]
	pub markdown_command: Option<String>,

	/// Highlight code through an external command instead of the built-in
	/// line spans. The command reads the code stream on stdin and writes
	/// HTML to stdout; a `{language}` placeholder is substituted before
	/// invocation (e.g. `pygmentize -f html -l {language}`).
	#[arg(long, value_name = "CMD")]
	pub highlight_command: Option<String>,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
