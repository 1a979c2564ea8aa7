//! End-to-end booking flows over the in-memory adapters.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::Value;

use bus_booking::Trace;
use bus_booking::domain::ports::AcknowledgingPaymentGateway;
use bus_booking::inbound::http::routes::configure;
use bus_booking::inbound::http::state::{HttpState, HttpStateAdapters};
use bus_booking::outbound::memory::{InMemoryBusRepository, InMemoryStudentRepository};
use bus_booking::outbound::pages::TemplatePages;
use bus_booking::outbound::security::Argon2CredentialHasher;

struct Site {
    state: web::Data<HttpState>,
    buses: Arc<InMemoryBusRepository>,
    key: Key,
}

#[fixture]
fn site() -> Site {
    let buses = Arc::new(InMemoryBusRepository::new());
    let state = HttpState::from_adapters(HttpStateAdapters {
        buses: Arc::clone(&buses),
        students: Arc::new(InMemoryStudentRepository::new()),
        hasher: Arc::new(Argon2CredentialHasher::new()),
        pages: Arc::new(TemplatePages::embedded()),
        payments: Arc::new(AcknowledgingPaymentGateway),
        clock: Arc::new(DefaultClock),
    });
    Site {
        state: web::Data::new(state),
        buses,
        key: Key::generate(),
    }
}

fn app(
    site: &Site,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(site.state.clone())
        .wrap(
            SessionMiddleware::builder(CookieSessionStore::default(), site.key.clone())
                .cookie_name("session".to_owned())
                .cookie_secure(false)
                .build(),
        )
        .wrap(Trace)
        .configure(configure)
}

fn location(res: &ServiceResponse) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

fn add_bus_form(seats: &str, route: &str) -> [(&'static str, String); 5] {
    [
        ("busDescription", "Morning express".to_owned()),
        ("seats", seats.to_owned()),
        ("day", "Monday".to_owned()),
        ("time", "08:00".to_owned()),
        ("route", route.to_owned()),
    ]
}

#[rstest]
#[actix_web::test]
async fn student_signs_up_logs_in_and_fills_a_bus(site: Site) {
    let app = test::init_service(app(&site)).await;

    let signup = test::TestRequest::post()
        .uri("/signup")
        .set_form([
            ("admissionNumber", "12-345"),
            ("password", "hunter2"),
            ("favoriteWord", "blue"),
        ])
        .to_request();
    let res = test::call_service(&app, signup).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));

    let login = test::TestRequest::post()
        .uri("/login")
        .set_form([("admissionNumber", "12-345"), ("password", "hunter2")])
        .to_request();
    let res = test::call_service(&app, login).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/student"));
    let cookie = session_cookie(&res).expect("login sets the session cookie");

    let add = test::TestRequest::post()
        .uri("/admin/add-bus")
        .set_form(add_bus_form("30", "Campus-Town"))
        .to_request();
    let res = test::call_service(&app, add).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/admin"));

    for expected_remaining in (0..30).rev() {
        let book = test::TestRequest::post()
            .uri("/student/book-seat")
            .cookie(cookie.clone())
            .set_form([("busID", "1")])
            .to_request();
        let res = test::call_service(&app, book).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["remaining_seats"], expected_remaining);
        assert_eq!(body["seat_number"], expected_remaining + 1);
        assert_eq!(body["enable_payment_btn"], true);
    }

    let book = test::TestRequest::post()
        .uri("/student/book-seat")
        .cookie(cookie.clone())
        .set_form([("busID", "1")])
        .to_request();
    let res = test::call_service(&app, book).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "seats_unavailable");

    let ledger = site.buses.bookings().expect("ledger readable");
    assert_eq!(ledger.len(), 30);
    assert!(ledger.iter().all(|booking| {
        booking.student.as_ref().map(ToString::to_string) == Some("12-345".to_owned())
    }));

    let pay = test::TestRequest::post()
        .uri("/student/complete-payment")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, pay).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Payment completed successfully");
}

#[rstest]
#[actix_web::test]
async fn duplicate_signup_and_bad_password_are_rejected(site: Site) {
    let app = test::init_service(app(&site)).await;
    let form = [
        ("admissionNumber", "12-345"),
        ("password", "hunter2"),
        ("favoriteWord", "blue"),
    ];

    let first = test::call_service(
        &app,
        test::TestRequest::post().uri("/signup").set_form(form).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    let second = test::call_service(
        &app,
        test::TestRequest::post().uri("/signup").set_form(form).to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let login = test::TestRequest::post()
        .uri("/login")
        .set_form([("admissionNumber", "12-345"), ("password", "wrong")])
        .to_request();
    let res = test::call_service(&app, login).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&res).is_none());
}

#[rstest]
#[actix_web::test]
async fn blank_login_fields_get_the_wrong_password_response(site: Site) {
    let app = test::init_service(app(&site)).await;
    let signup = test::TestRequest::post()
        .uri("/signup")
        .set_form([("admissionNumber", "12-345"), ("password", "hunter2")])
        .to_request();
    assert_eq!(
        test::call_service(&app, signup).await.status(),
        StatusCode::SEE_OTHER
    );

    let mut bodies = Vec::new();
    for (number, password) in [("12-345", "wrong"), ("12-345", ""), ("", "hunter2"), ("", "")] {
        let login = test::TestRequest::post()
            .uri("/login")
            .set_form([("admissionNumber", number), ("password", password)])
            .to_request();
        let res = test::call_service(&app, login).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{number:?}/{password:?}");
        assert!(session_cookie(&res).is_none());
        let body: Value = test::read_body_json(res).await;
        bodies.push((body["code"].clone(), body["message"].clone()));
    }

    let wrong_password = bodies.first().cloned().expect("wrong-password response");
    assert_eq!(wrong_password.0, "unauthorized");
    assert!(bodies.iter().all(|body| *body == wrong_password));
}

#[rstest]
#[actix_web::test]
async fn free_text_schedule_fields_are_stored_as_entered(site: Site) {
    let app = test::init_service(app(&site)).await;
    let description = "Evening shuttle via the north gate, library and sports complex ".repeat(5);
    let form = [
        ("busDescription", description.clone()),
        ("seats", "40".to_owned()),
        ("day", "Wednesday".to_owned()),
        ("time", "8:00 am".to_owned()),
        ("route", "Campus-Town".to_owned()),
    ];

    let res = test::call_service(
        &app,
        test::TestRequest::post().uri("/admin/add-bus").set_form(form).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let lookup = test::TestRequest::post()
        .uri("/student/get-buses-for-route")
        .set_form([("route", "Campus-Town")])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, lookup).await;
    let bus = body.as_array().and_then(|buses| buses.first()).expect("one bus");
    assert_eq!(bus["time"], "8:00 am");
    assert_eq!(bus["description"], Value::from(description));
}

#[rstest]
#[actix_web::test]
async fn admin_schedule_feeds_route_lookup(site: Site) {
    let app = test::init_service(app(&site)).await;
    for route in ["Campus-Town", "Campus-Airport"] {
        let form = add_bus_form("12", route);
        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/admin/add-bus").set_form(form).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    let admin =
        test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(admin.status(), StatusCode::OK);
    let html = test::read_body(admin).await;
    let html = std::str::from_utf8(&html).expect("utf8 page");
    assert!(html.contains("Campus-Airport"));
    assert!(!html.contains("{{bus_rows}}"));

    let lookup = test::TestRequest::post()
        .uri("/student/get-buses-for-route")
        .set_form([("route", "Campus-Airport")])
        .to_request();
    let res = test::call_service(&app, lookup).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let buses = body.as_array().expect("array of buses");
    assert_eq!(buses.len(), 1);
    assert_eq!(buses.first().map(|bus| &bus["id"]), Some(&Value::from(2)));
    assert_eq!(
        buses.first().map(|bus| &bus["totalSeats"]),
        Some(&Value::from(12))
    );
}

#[rstest]
#[case("0")]
#[case("abc")]
#[actix_web::test]
async fn invalid_bus_form_stores_nothing(site: Site, #[case] seats: &str) {
    let app = test::init_service(app(&site)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/add-bus")
            .set_form(add_bus_form(seats, "Campus-Town"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid form data");
}

#[rstest]
#[actix_web::test]
async fn anonymous_booking_is_recorded_without_a_student(site: Site) {
    let app = test::init_service(app(&site)).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/add-bus")
            .set_form(add_bus_form("1", "Campus-Town"))
            .to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/student/book-seat")
            .set_form([("busID", "1")])
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let ledger = site.buses.bookings().expect("ledger readable");
    assert_eq!(ledger.len(), 1);
    assert!(ledger.first().is_some_and(|booking| booking.student.is_none()));
}

#[rstest]
#[case("/student/book-seat")]
#[case("/admin/add-bus")]
#[actix_web::test]
async fn get_on_post_only_routes_is_method_not_allowed(site: Site, #[case] path: &str) {
    let app = test::init_service(app(&site)).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
