//! Admin schedule handlers.
//!
//! ```text
//! GET  /admin          list every bus
//! POST /admin/add-bus  busDescription=...&seats=30&day=Monday&time=08:00&route=...
//! ```

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::Page;
use crate::domain::{Error, NewBus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pages::{render_page, see_other};
use crate::inbound::http::state::HttpState;

/// Message returned for any rejected form submission.
pub const INVALID_FORM_MESSAGE: &str = "Invalid form data";

/// Urlencoded add-bus form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBusForm {
    #[serde(default)]
    pub bus_description: String,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub route: String,
}

/// Admin dashboard listing every bus.
pub async fn admin_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let buses = state.schedule_query.list_buses().await?;
    render_page(&state, &Page::Admin { buses })
}

/// Validate the form, add the bus and return to the dashboard.
pub async fn add_bus(
    state: web::Data<HttpState>,
    form: web::Form<AddBusForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let bus = NewBus::try_from_parts(
        &form.bus_description,
        &form.seats,
        &form.day,
        &form.time,
        &form.route,
    )
    .map_err(|err| {
        debug!(error = %err, seats = %form.seats, day = %form.day, "add-bus form rejected");
        Error::invalid_request(INVALID_FORM_MESSAGE)
    })?;
    state.schedule.add_bus(&bus).await?;
    Ok(see_other("/admin"))
}
