//! Server-rendered HTML pages.
//!
//! ```text
//! GET /, /home   landing page
//! GET /signup    signup form
//! GET /login     login form
//! GET /student   booking page
//! GET /payment   payment page
//! ```

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use crate::domain::Error;
use crate::domain::ports::Page;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Render `page` through the configured renderer as a `200 text/html` response.
pub(crate) fn render_page(state: &HttpState, page: &Page) -> ApiResult<HttpResponse> {
    let html = state
        .pages
        .render(page)
        .map_err(|err| Error::internal(format!("page rendering failed: {err}")))?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

/// `303 See Other` pointing at `location`.
pub(crate) fn see_other(location: &'static str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub async fn index(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(&state, &Page::Index)
}

pub async fn signup_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(&state, &Page::Signup)
}

pub async fn login_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(&state, &Page::Login)
}

pub async fn student_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(&state, &Page::Student)
}

pub async fn payment_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(&state, &Page::Payment)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::PageRenderError;
    use crate::inbound::http::test_utils::MockPorts;

    #[rstest]
    #[actix_web::test]
    async fn renders_page_as_html() {
        let mut ports = MockPorts::default();
        ports
            .pages
            .expect_render()
            .with(eq(Page::Login))
            .times(1)
            .return_once(|_| Ok("<h1>Log in</h1>".to_owned()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ports.into_state()))
                .route("/login", web::get().to(login_page)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(test::read_body(res).await, "<h1>Log in</h1>");
    }

    #[rstest]
    #[actix_web::test]
    async fn render_failure_is_internal_error() {
        let mut ports = MockPorts::default();
        ports
            .pages
            .expect_render()
            .return_once(|_| Err(PageRenderError::missing("index.html", "gone")));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ports.into_state()))
                .route("/", web::get().to(index)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[rstest]
    #[actix_web::test]
    async fn see_other_sets_location() {
        let res = see_other("/login");
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/login")
        );
    }
}
