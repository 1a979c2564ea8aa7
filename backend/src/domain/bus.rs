//! Bus schedule entities and the admin form rules that create them.
//!
//! A bus carries its fixed `capacity` and a separately tracked
//! `seats_remaining`; only seat booking ever lowers the latter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Store-assigned bus identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(i32);

impl BusId {
    /// Wrap a raw identifier, rejecting values the store never assigns.
    ///
    /// # Examples
    /// ```
    /// use bus_booking::domain::BusId;
    ///
    /// assert_eq!(BusId::new(7).map(BusId::get), Ok(7));
    /// assert!(BusId::new(0).is_err());
    /// ```
    pub fn new(raw: i32) -> Result<Self, BusValidationError> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(BusValidationError::InvalidBusId)
        }
    }

    /// Raw integer value.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for BusId {
    type Err = BusValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i32>()
            .map_err(|_| BusValidationError::InvalidBusId)?;
        Self::new(raw)
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Day of the week a bus runs on.
///
/// Parsing is exact: only the capitalised English names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday in calendar order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Canonical name as stored and displayed.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = BusValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or(BusValidationError::UnknownWeekday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for bus form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusValidationError {
    #[error("seats must be a whole number greater than zero")]
    InvalidSeatCount,
    #[error("day must be a weekday name such as Monday")]
    UnknownWeekday,
    #[error("bus id must be a positive whole number")]
    InvalidBusId,
}

/// Parse the admin seat count: an integer above zero that fits the store.
///
/// An optional leading `+` is accepted; surrounding whitespace is not.
pub fn parse_seat_count(text: &str) -> Result<i32, BusValidationError> {
    match text.parse::<i32>() {
        Ok(seats) if seats > 0 => Ok(seats),
        _ => Err(BusValidationError::InvalidSeatCount),
    }
}

/// A validated bus ready to be stored.
///
/// ## Invariants
/// - `capacity` is greater than zero.
/// - `day` is one of the seven weekday names.
/// - `description`, `time` and `route` are kept verbatim, empty included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBus {
    pub description: String,
    pub capacity: i32,
    pub day: Weekday,
    pub time: String,
    pub route: String,
}

impl NewBus {
    /// Validate raw form values.
    ///
    /// # Examples
    /// ```
    /// use bus_booking::domain::{BusValidationError, NewBus};
    ///
    /// let bus = NewBus::try_from_parts("Express", "30", "Monday", "08:00", "Campus-Town")
    ///     .unwrap();
    /// assert_eq!(bus.capacity, 30);
    ///
    /// let err = NewBus::try_from_parts("Express", "30", "Funday", "08:00", "Campus-Town")
    ///     .unwrap_err();
    /// assert_eq!(err, BusValidationError::UnknownWeekday);
    /// ```
    pub fn try_from_parts(
        description: &str,
        seats: &str,
        day: &str,
        time: &str,
        route: &str,
    ) -> Result<Self, BusValidationError> {
        let capacity = parse_seat_count(seats)?;
        let day = day.parse::<Weekday>()?;
        Ok(Self {
            description: description.to_owned(),
            capacity,
            day,
            time: time.to_owned(),
            route: route.to_owned(),
        })
    }
}

/// Pass/fail check over the raw admin form values.
#[must_use]
pub fn validate_bus_form(
    description: &str,
    seats: &str,
    day: &str,
    time: &str,
    route: &str,
) -> bool {
    NewBus::try_from_parts(description, seats, day, time, route).is_ok()
}

/// A stored bus schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub id: BusId,
    pub description: String,
    pub capacity: i32,
    pub seats_remaining: i32,
    pub day: Weekday,
    pub time: String,
    pub route: String,
}

impl Bus {
    /// Materialise a freshly created bus with every seat free.
    #[must_use]
    pub fn from_new(id: BusId, bus: NewBus) -> Self {
        let NewBus {
            description,
            capacity,
            day,
            time,
            route,
        } = bus;
        Self {
            id,
            description,
            capacity,
            seats_remaining: capacity,
            day,
            time,
            route,
        }
    }

    /// Whether at least one seat can still be booked.
    #[must_use]
    pub fn has_free_seat(&self) -> bool {
        self.seats_remaining > 0
    }
}
