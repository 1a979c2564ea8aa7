//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only persist or read the logged-in
//! student's admission number.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AdmissionNumber, Error};

pub(crate) const ADMISSION_NUMBER_KEY: &str = "admission_number";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated student in the session cookie.
    pub fn persist_student(&self, admission_number: &AdmissionNumber) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(ADMISSION_NUMBER_KEY, admission_number.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The logged-in student, if any.
    ///
    /// A cookie holding a malformed admission number is treated as anonymous.
    pub fn student(&self) -> Result<Option<AdmissionNumber>, Error> {
        let raw = self
            .0
            .get::<String>(ADMISSION_NUMBER_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match AdmissionNumber::new(raw) {
            Ok(number) => Ok(Some(number)),
            Err(error) => {
                warn!("invalid admission number in session cookie: {error}");
                Ok(None)
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use actix_session::Session;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .route(
                "/set",
                web::get().to(|session: SessionContext| async move {
                    let number = AdmissionNumber::new("12-345").expect("fixture number");
                    session.persist_student(&number)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/set-invalid",
                web::get().to(|session: Session| async move {
                    session
                        .insert(ADMISSION_NUMBER_KEY, "12A345")
                        .expect("set invalid number");
                    HttpResponse::Ok()
                }),
            )
            .route(
                "/whoami",
                web::get().to(|session: SessionContext| async move {
                    let who = session
                        .student()?
                        .map_or_else(|| "anonymous".to_owned(), |number| number.to_string());
                    Ok::<_, Error>(HttpResponse::Ok().body(who))
                }),
            )
    }

    #[actix_web::test]
    async fn round_trips_admission_number() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res);

        let get_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/whoami").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        assert_eq!(test::read_body(get_res).await, "12-345");
    }

    #[actix_web::test]
    async fn missing_student_is_anonymous() {
        let app = test::init_service(session_test_app()).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "anonymous");
    }

    #[actix_web::test]
    async fn tampered_admission_number_is_anonymous() {
        let app = test::init_service(session_test_app()).await;

        let set_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-invalid").to_request(),
        )
        .await;
        let cookie = session_cookie(&set_res);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/whoami").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "anonymous");
    }
}
