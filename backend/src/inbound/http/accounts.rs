//! Student signup and login form handlers.
//!
//! ```text
//! POST /signup admissionNumber=12-345&password=...&favoriteWord=blue
//! POST /login  admissionNumber=12-345&password=...
//! ```

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use zeroize::Zeroize;

use crate::domain::{
    AdmissionNumberError, CredentialsValidationError, Error, LoginCredentials, SignupDetails,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pages::see_other;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Urlencoded signup form.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub admission_number: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub favorite_word: String,
}

/// Urlencoded login form.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub admission_number: String,
    #[serde(default)]
    pub password: String,
}

fn map_credentials_error(err: CredentialsValidationError) -> Error {
    let (message, code) = match err {
        CredentialsValidationError::AdmissionNumber(AdmissionNumberError::InvalidFormat) => {
            ("Invalid admission number format".to_owned(), "invalid_format")
        }
        CredentialsValidationError::AdmissionNumber(AdmissionNumberError::TooLong { max }) => (
            format!("Admission number must be at most {max} characters"),
            "too_long",
        ),
        CredentialsValidationError::EmptyPassword => {
            return Error::invalid_request("Password is required")
                .with_details(json!({ "field": "password", "code": "empty_password" }));
        }
    };
    Error::invalid_request(message)
        .with_details(json!({ "field": "admissionNumber", "code": code }))
}

/// Register a student and send them to the login form.
pub async fn signup(
    state: web::Data<HttpState>,
    form: web::Form<SignupForm>,
) -> ApiResult<HttpResponse> {
    let mut form = form.into_inner();
    let details =
        SignupDetails::try_from_parts(&form.admission_number, &form.password, &form.favorite_word);
    form.password.zeroize();
    let details = details.map_err(map_credentials_error)?;
    state.signup.register(&details).await?;
    Ok(see_other("/login"))
}

/// Authenticate a student, start their session and send them to booking.
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let mut form = form.into_inner();
    let credentials = LoginCredentials::new(&form.admission_number, &form.password);
    form.password.zeroize();
    let student = state.login.authenticate(&credentials).await?;
    session.persist_student(&student)?;
    Ok(see_other("/student"))
}
