//! Port for producing the server-rendered HTML pages.

use crate::domain::Bus;

use super::define_port_error;

define_port_error! {
    /// Failures raised while rendering a page.
    pub enum PageRenderError {
        /// The template for the page could not be loaded.
        Missing { template: String, message: String } =>
            "template {template} unavailable: {message}",
        /// The template was loaded but could not be filled in.
        Render { template: String, message: String } =>
            "template {template} failed to render: {message}",
    }
}

/// Pages served by the HTML routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Signup,
    Login,
    /// Admin dashboard listing every bus.
    Admin { buses: Vec<Bus> },
    Student,
    Payment,
}

impl Page {
    /// File name of the template backing this page.
    #[must_use]
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Signup => "signup.html",
            Self::Login => "login.html",
            Self::Admin { .. } => "admin.html",
            Self::Student => "student.html",
            Self::Payment => "payment.html",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PageRenderer: Send + Sync {
    /// Render `page` to an HTML document.
    fn render(&self, page: &Page) -> Result<String, PageRenderError>;
}
