//! `PageRenderer` backed by static HTML templates.
//!
//! Templates are compiled into the binary by default. When a template
//! directory is configured they are read through a `cap_std` directory handle
//! on every render instead, so edits show up without a rebuild.

use std::fmt::Write as _;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::Bus;
use crate::domain::ports::{Page, PageRenderError, PageRenderer};

/// Placeholder in `admin.html` replaced by one table row per bus.
pub const BUS_ROWS_PLACEHOLDER: &str = "{{bus_rows}}";

const EMBEDDED: &[(&str, &str)] = &[
    ("index.html", include_str!("../../../templates/index.html")),
    ("signup.html", include_str!("../../../templates/signup.html")),
    ("login.html", include_str!("../../../templates/login.html")),
    ("admin.html", include_str!("../../../templates/admin.html")),
    ("student.html", include_str!("../../../templates/student.html")),
    ("payment.html", include_str!("../../../templates/payment.html")),
];

#[derive(Debug)]
enum TemplateSource {
    Embedded,
    Directory(Dir),
}

/// Renders pages from embedded or on-disk templates.
#[derive(Debug)]
pub struct TemplatePages {
    source: TemplateSource,
}

impl TemplatePages {
    /// Use the templates compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            source: TemplateSource::Embedded,
        }
    }

    /// Read templates from `path` at render time.
    ///
    /// # Errors
    ///
    /// Returns [`PageRenderError::Missing`] if the directory cannot be opened.
    pub fn from_dir(path: &Path) -> Result<Self, PageRenderError> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| PageRenderError::missing(path.display().to_string(), err.to_string()))?;
        Ok(Self {
            source: TemplateSource::Directory(dir),
        })
    }

    fn load(&self, name: &'static str) -> Result<String, PageRenderError> {
        match &self.source {
            TemplateSource::Embedded => EMBEDDED
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, body)| (*body).to_owned())
                .ok_or_else(|| PageRenderError::missing(name, "not embedded")),
            TemplateSource::Directory(dir) => dir
                .read_to_string(name)
                .map_err(|err| PageRenderError::missing(name, err.to_string())),
        }
    }
}

impl PageRenderer for TemplatePages {
    fn render(&self, page: &Page) -> Result<String, PageRenderError> {
        let name = page.template_name();
        let template = self.load(name)?;
        match page {
            Page::Admin { buses } => {
                if !template.contains(BUS_ROWS_PLACEHOLDER) {
                    return Err(PageRenderError::render(
                        name,
                        format!("missing {BUS_ROWS_PLACEHOLDER} placeholder"),
                    ));
                }
                Ok(template.replace(BUS_ROWS_PLACEHOLDER, &bus_rows(buses)))
            }
            _ => Ok(template),
        }
    }
}

fn bus_rows(buses: &[Bus]) -> String {
    let mut rows = String::new();
    for bus in buses {
        // Writing to a String cannot fail.
        let _ = writeln!(
            rows,
            concat!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                "<td>{}</td><td>{}</td><td>{}</td></tr>",
            ),
            bus.id,
            escape_html(&bus.description),
            bus.capacity,
            bus.seats_remaining,
            bus.day,
            escape_html(&bus.time),
            escape_html(&bus.route),
        );
    }
    rows
}

/// Escape text for use inside an HTML element.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
