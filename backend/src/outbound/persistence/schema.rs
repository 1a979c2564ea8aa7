//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly.

diesel::table! {
    /// Bus schedules with their fixed capacity and live seat counter.
    buses (id) {
        id -> Int4,
        description -> Text,
        /// Capacity fixed at creation.
        seats -> Int4,
        /// Free seats; `0 <= seats_remaining <= seats`.
        seats_remaining -> Int4,
        #[max_length = 20]
        day -> Varchar,
        /// Free text such as `08:00` or `8:00 am`.
        time -> Text,
        route -> Text,
    }
}

diesel::table! {
    /// Registered students keyed by admission number.
    students (admission_number) {
        #[max_length = 20]
        admission_number -> Varchar,
        /// PHC-encoded Argon2id hash.
        #[max_length = 255]
        password -> Varchar,
        favorite_word -> Text,
    }
}

diesel::table! {
    /// Ledger of seat bookings.
    bookings (id) {
        id -> Int8,
        bus_id -> Int4,
        #[max_length = 20]
        admission_number -> Nullable<Varchar>,
        seat_number -> Int4,
        booked_at -> Timestamptz,
    }
}

diesel::joinable!(bookings -> buses (bus_id));

diesel::allow_tables_to_appear_in_same_query!(buses, students, bookings);
