//! The page template collaborator: wraps the finished row stream in a
//! complete two-column HTML document.

use crate::SidedocError;
use crate::SidedocResult;

/// Produces the final HTML page from a title and the ordered row stream.
pub trait PageTemplate {
	fn render_page(&self, title: &str, rows: &str) -> SidedocResult<String>;
}

const LAYOUT: &str = include_str!("layout.html");

/// The embedded layout rendered through minijinja. The title is escaped
/// by the template engine; the row stream is already HTML and passes
/// through raw.
pub struct LayoutTemplate;

impl PageTemplate for LayoutTemplate {
	fn render_page(&self, title: &str, rows: &str) -> SidedocResult<String> {
		let mut env = minijinja::Environment::new();
		env.add_template("layout.html", LAYOUT)
			.map_err(|e| SidedocError::TemplateRender(e.to_string()))?;

		let template = env
			.get_template("layout.html")
			.map_err(|e| SidedocError::TemplateRender(e.to_string()))?;

		template
			.render(minijinja::context! { title => title, body => rows })
			.map_err(|e| SidedocError::TemplateRender(e.to_string()))
	}
}
