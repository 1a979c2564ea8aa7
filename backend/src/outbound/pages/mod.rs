//! HTML page rendering adapters.

mod template_pages;

pub use template_pages::{BUS_ROWS_PLACEHOLDER, TemplatePages};
