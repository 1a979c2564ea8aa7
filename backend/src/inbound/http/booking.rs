//! Student booking endpoints answering JSON.
//!
//! ```text
//! POST /student/book-seat            busID=1
//! POST /student/get-buses-for-route  route=Campus-Town
//! POST /student/complete-payment
//! ```
//!
//! Requests are urlencoded forms posted by the booking page.

use actix_web::web;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Bus, BusId, Error, SeatRequest, SeatReservation};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Message returned with every successful booking.
pub const SEAT_BOOKED_MESSAGE: &str = "Seat booked successfully";

/// Book-seat form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct BookSeatForm {
    /// Identifier of the bus to book.
    #[serde(rename = "busID", default)]
    #[schema(example = "1")]
    pub bus_id: String,
}

/// Successful booking acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookSeatResponse {
    #[schema(example = "Seat booked successfully")]
    pub message: String,
    #[schema(example = 29)]
    pub remaining_seats: i32,
    /// Seat index just consumed, counted down from capacity.
    #[schema(example = 30)]
    pub seat_number: i32,
    pub enable_payment_btn: bool,
}

impl From<SeatReservation> for BookSeatResponse {
    fn from(reservation: SeatReservation) -> Self {
        Self {
            message: SEAT_BOOKED_MESSAGE.to_owned(),
            remaining_seats: reservation.seats_remaining(),
            seat_number: reservation.seat_number(),
            enable_payment_btn: true,
        }
    }
}

/// Route lookup form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RouteForm {
    #[serde(default)]
    #[schema(example = "Campus-Town")]
    pub route: String,
}

/// Bus as listed to students.
///
/// `seats` repeats the remaining count for older clients; `totalSeats` is
/// the capacity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusView {
    pub id: i32,
    pub description: String,
    pub seats: i32,
    #[schema(example = "Monday")]
    pub day: String,
    #[schema(example = "08:00")]
    pub time: String,
    pub route: String,
    pub total_seats: i32,
    pub seats_remaining: i32,
}

impl From<Bus> for BusView {
    fn from(bus: Bus) -> Self {
        Self {
            id: bus.id.get(),
            description: bus.description,
            seats: bus.seats_remaining,
            day: bus.day.to_string(),
            time: bus.time,
            route: bus.route,
            total_seats: bus.capacity,
            seats_remaining: bus.seats_remaining,
        }
    }
}

/// Payment acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = "Payment completed successfully")]
    pub message: String,
}

fn parse_bus_id(raw: &str) -> Result<BusId, Error> {
    raw.parse::<BusId>().map_err(|_| {
        Error::invalid_request("Invalid bus ID")
            .with_details(json!({ "field": "busID", "code": "invalid_bus_id" }))
    })
}

/// Take one seat on a bus, attributing it to the logged-in student if any.
#[utoipa::path(
    post,
    path = "/student/book-seat",
    request_body(content = BookSeatForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Seat booked", body = BookSeatResponse),
        (status = 400, description = "Invalid bus or no seats left", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["student"],
    operation_id = "bookSeat"
)]
pub async fn book_seat(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<BookSeatForm>,
) -> ApiResult<web::Json<BookSeatResponse>> {
    let bus_id = parse_bus_id(&form.bus_id)?;
    let request = match session.student()? {
        Some(student) => SeatRequest::for_student(bus_id, student),
        None => SeatRequest::anonymous(bus_id),
    };
    let reservation = state.seat_booking.book_seat(&request).await?;
    Ok(web::Json(BookSeatResponse::from(reservation)))
}

/// Buses serving exactly the given route.
#[utoipa::path(
    post,
    path = "/student/get-buses-for-route",
    request_body(content = RouteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Buses on the route", body = [BusView]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["student"],
    operation_id = "getBusesForRoute"
)]
pub async fn buses_for_route(
    state: web::Data<HttpState>,
    form: web::Form<RouteForm>,
) -> ApiResult<web::Json<Vec<BusView>>> {
    let buses = state.timetable.buses_for_route(&form.route).await?;
    Ok(web::Json(buses.into_iter().map(BusView::from).collect()))
}

/// Acknowledge payment for the booking.
#[utoipa::path(
    post,
    path = "/student/complete-payment",
    responses(
        (status = 200, description = "Payment acknowledged", body = PaymentResponse)
    ),
    tags = ["student"],
    operation_id = "completePayment"
)]
pub async fn complete_payment(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PaymentResponse>> {
    let payer = session.student()?;
    let receipt = state.payments.complete_payment(payer.as_ref()).await?;
    Ok(web::Json(PaymentResponse {
        message: receipt.message,
    }))
}
