//! Route table for the booking site.
//!
//! Each path is a resource so that an unregistered method answers
//! `405 Method Not Allowed` rather than falling through to a 404.

use actix_web::web;

use crate::domain::Error;
use crate::inbound::http::accounts::{login, signup};
use crate::inbound::http::admin::{INVALID_FORM_MESSAGE, add_bus, admin_page};
use crate::inbound::http::booking::{book_seat, buses_for_route, complete_payment};
use crate::inbound::http::pages::{index, login_page, payment_page, signup_page, student_page};

/// Form extractor settings shared by every route.
///
/// Undecodable bodies become the same `400 Invalid form data` envelope the
/// handlers produce.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "form body rejected");
        Error::invalid_request(INVALID_FORM_MESSAGE).into()
    })
}

/// Register every page, form and JSON route.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use bus_booking::inbound::http::routes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/home").route(web::get().to(index)))
        .service(
            web::resource("/signup")
                .route(web::get().to(signup_page))
                .route(web::post().to(signup)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(login_page))
                .route(web::post().to(login)),
        )
        .service(web::resource("/admin").route(web::get().to(admin_page)))
        .service(web::resource("/admin/add-bus").route(web::post().to(add_bus)))
        .service(web::resource("/student").route(web::get().to(student_page)))
        .service(web::resource("/payment").route(web::get().to(payment_page)))
        .service(web::resource("/student/book-seat").route(web::post().to(book_seat)))
        .service(
            web::resource("/student/get-buses-for-route").route(web::post().to(buses_for_route)),
        )
        .service(
            web::resource("/student/complete-payment").route(web::post().to(complete_payment)),
        );
}
