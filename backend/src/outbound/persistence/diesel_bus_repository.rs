//! PostgreSQL-backed `BusRepository` implementation using Diesel ORM.
//!
//! Seat reservation is one conditional `UPDATE ... WHERE seats_remaining > 0
//! RETURNING seats_remaining` plus the ledger insert, both inside a single
//! transaction. Concurrent bookings therefore serialise on the row lock and
//! can never take the counter below zero.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{BusRepository, BusRepositoryError};
use crate::domain::{Booking, Bus, BusId, NewBus, SeatClaim, SeatReservation};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BusRow, NewBookingRow, NewBusRow};
use super::pool::{DbPool, PoolError};
use super::schema::{bookings, buses};

/// Diesel-backed implementation of the bus catalogue.
#[derive(Clone)]
pub struct DieselBusRepository {
    pool: DbPool,
}

impl DieselBusRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Result of the reservation transaction before it is mapped to the port.
enum ReserveOutcome {
    Reserved(SeatReservation),
    Exhausted,
    Missing,
}

fn map_pool(error: PoolError) -> BusRepositoryError {
    map_pool_error(error, BusRepositoryError::connection)
}

fn map_diesel(error: &DieselError, operation: &'static str) -> BusRepositoryError {
    map_diesel_error(
        error,
        operation,
        BusRepositoryError::query,
        BusRepositoryError::connection,
    )
}

fn to_domain(row: BusRow) -> Result<Bus, BusRepositoryError> {
    Bus::try_from(row).map_err(|err| BusRepositoryError::query(err.to_string()))
}

fn to_domain_all(rows: Vec<BusRow>) -> Result<Vec<Bus>, BusRepositoryError> {
    rows.into_iter().map(to_domain).collect()
}

#[async_trait]
impl BusRepository for DieselBusRepository {
    async fn create(&self, bus: &NewBus) -> Result<Bus, BusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row = NewBusRow {
            description: bus.description.as_str(),
            seats: bus.capacity,
            seats_remaining: bus.capacity,
            day: bus.day.as_str(),
            time: bus.time.as_str(),
            route: bus.route.as_str(),
        };
        let created: BusRow = diesel::insert_into(buses::table)
            .values(&row)
            .returning(BusRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel(&err, "create bus"))?;
        to_domain(created)
    }

    async fn list_all(&self) -> Result<Vec<Bus>, BusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<BusRow> = buses::table
            .order(buses::id.asc())
            .select(BusRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel(&err, "list buses"))?;
        to_domain_all(rows)
    }

    async fn list_by_route(&self, route: &str) -> Result<Vec<Bus>, BusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<BusRow> = buses::table
            .filter(buses::route.eq(route))
            .order(buses::id.asc())
            .select(BusRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel(&err, "list buses for route"))?;
        to_domain_all(rows)
    }

    async fn find_by_id(&self, id: BusId) -> Result<Option<Bus>, BusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<BusRow> = buses::table
            .find(id.get())
            .select(BusRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel(&err, "find bus"))?;
        row.map(to_domain).transpose()
    }

    async fn reserve_seat(
        &self,
        claim: &SeatClaim,
    ) -> Result<SeatReservation, BusRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let bus_id = claim.bus_id.get();

        let outcome = conn
            .transaction::<_, DieselError, _>(|conn| {
                async move {
                    let remaining: Option<i32> = diesel::update(
                        buses::table
                            .filter(buses::id.eq(bus_id))
                            .filter(buses::seats_remaining.gt(0)),
                    )
                    .set(buses::seats_remaining.eq(buses::seats_remaining - 1))
                    .returning(buses::seats_remaining)
                    .get_result(conn)
                    .await
                    .optional()?;

                    let Some(remaining) = remaining else {
                        let exists: bool = diesel::select(diesel::dsl::exists(
                            buses::table.filter(buses::id.eq(bus_id)),
                        ))
                        .get_result(conn)
                        .await?;
                        return Ok(if exists {
                            ReserveOutcome::Exhausted
                        } else {
                            ReserveOutcome::Missing
                        });
                    };

                    let reservation = SeatReservation::after_booking(claim.bus_id, remaining);
                    let booking = Booking::from_claim(claim, reservation);
                    diesel::insert_into(bookings::table)
                        .values(&NewBookingRow {
                            bus_id,
                            admission_number: booking.student.as_ref().map(AsRef::as_ref),
                            seat_number: booking.seat_number,
                            booked_at: booking.booked_at,
                        })
                        .execute(conn)
                        .await?;

                    Ok(ReserveOutcome::Reserved(reservation))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel(&err, "reserve seat"))?;

        match outcome {
            ReserveOutcome::Reserved(reservation) => Ok(reservation),
            ReserveOutcome::Exhausted => {
                debug!(bus_id, "seat reservation refused: bus full");
                Err(BusRepositoryError::seats_unavailable(bus_id))
            }
            ReserveOutcome::Missing => Err(BusRepositoryError::not_found(bus_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping; query behaviour is exercised
    //! against the in-memory adapter, which implements the same contract.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool(PoolError::checkout("connection refused"));
        assert!(matches!(err, BusRepositoryError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let err = map_diesel(&DieselError::NotFound, "find bus");
        assert!(matches!(err, BusRepositoryError::Query { .. }));
        assert!(err.to_string().contains("find bus"));
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_errors() {
        let row = BusRow {
            id: 1,
            description: String::new(),
            seats: 10,
            seats_remaining: 10,
            day: "Someday".to_owned(),
            time: String::new(),
            route: String::new(),
        };
        assert!(matches!(
            to_domain(row),
            Err(BusRepositoryError::Query { .. })
        ));
    }
}
