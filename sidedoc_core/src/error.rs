use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SidedocError {
	#[error(transparent)]
	#[diagnostic(code(sidedoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to create a working directory for this run: {reason}")]
	#[diagnostic(
		code(sidedoc::workdir),
		help("point TMPDIR at a writable location and re-run")
	)]
	Workdir { reason: String },

	#[error("required collaborator `{name}` is unavailable: `{program}` was not found")]
	#[diagnostic(
		code(sidedoc::collaborator_unavailable),
		help("install the tool or point --markdown-command/--highlight-command at one that exists")
	)]
	CollaboratorUnavailable { name: String, program: String },

	#[error("collaborator `{name}` failed: {reason}")]
	#[diagnostic(code(sidedoc::collaborator_failed))]
	CollaboratorFailed { name: String, reason: String },

	#[error("rendered {stream} stream split into {found} fragment(s), expected {expected}")]
	#[diagnostic(
		code(sidedoc::fragment_count_mismatch),
		help(
			"the renderer no longer lines up with the source blocks; divider markers must survive \
			 rendering verbatim, once per block boundary"
		)
	)]
	FragmentCountMismatch {
		stream: &'static str,
		expected: usize,
		found: usize,
	},

	#[error("page template rendering failed: {0}")]
	#[diagnostic(code(sidedoc::template_render))]
	TemplateRender(String),
}

pub type SidedocResult<T> = Result<T, SidedocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
