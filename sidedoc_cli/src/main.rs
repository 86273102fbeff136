use std::io::Read;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use sidedoc_cli::SidedocCli;
use sidedoc_core::CodeHighlighter;
use sidedoc_core::CommandHighlighter;
use sidedoc_core::CommandProse;
use sidedoc_core::LayoutTemplate;
use sidedoc_core::MarkdownProse;
use sidedoc_core::Pipeline;
use sidedoc_core::ProseRenderer;
use sidedoc_core::SpanHighlighter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = SidedocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics with help text and
		// error codes where possible.
		match e.downcast::<sidedoc_core::SidedocError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run(args: &SidedocCli) -> Result<(), Box<dyn std::error::Error>> {
	let (source, default_title) = read_source(args)?;
	let title = args.title.clone().unwrap_or(default_title);

	let rendered = build_pipeline(args).render(&source, &title)?;

	for warning in &rendered.warnings {
		eprintln!(
			"{} {}: {}",
			colored!("warning:", yellow),
			title,
			warning.message()
		);
	}

	print!("{}", rendered.html);
	Ok(())
}

/// Read the source text and derive the default title from where it came
/// from.
fn read_source(args: &SidedocCli) -> Result<(String, String), Box<dyn std::error::Error>> {
	match &args.source {
		Some(path) if path.as_os_str() != "-" => {
			let source = std::fs::read_to_string(path)?;
			Ok((source, path.display().to_string()))
		}
		_ => {
			let mut source = String::new();
			std::io::stdin().read_to_string(&mut source)?;
			Ok((source, "stdin".to_string()))
		}
	}
}

fn build_pipeline(args: &SidedocCli) -> Pipeline {
	let prose: Box<dyn ProseRenderer> = match &args.markdown_command {
		Some(command) => Box::new(CommandProse::new(command)),
		None => Box::new(MarkdownProse),
	};

	let highlighter: Box<dyn CodeHighlighter> = match &args.highlight_command {
		Some(command) => Box::new(CommandHighlighter::new(command)),
		None => Box::new(SpanHighlighter),
	};

	Pipeline::new(
		prose,
		highlighter,
		Box::new(LayoutTemplate),
		args.language.clone(),
	)
}
