//! Booking Records

use jiff::{Timestamp, civil::Date};

use crate::{domain::books::records::BookId, ids::TypedId};

/// Booking Id
pub type BookingId = TypedId<BookingRecord>;

/// Marker for ids referencing the host application's `users` table. User
/// management lives outside this crate; only the foreign key crosses over.
#[derive(Debug, Clone)]
pub struct UserRef;

/// User Id
pub type UserId = TypedId<UserRef>;

/// Booking Record
///
/// A booking holds a book for a calendar date range. The schema does not
/// relate `start` and `end` or prevent overlapping ranges for the same book;
/// any such rules belong to layers above this one.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    /// Identity key assigned by the database.
    pub id: BookingId,

    /// The booked book.
    pub book_id: BookId,

    /// First day of the booking.
    pub start: Date,

    /// Last day of the booking.
    pub end: Date,

    /// Held-not-yet-checked-in rather than an active occupancy.
    pub is_reservation: bool,

    /// Whether the booking has been paid.
    pub is_paid: bool,

    /// Free-form notes, when present.
    pub notes: Option<String>,

    /// Users attached to the booking via the join table.
    pub users: Vec<BookingUserRecord>,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,

    /// Soft-delete timestamp when cancelled.
    pub deleted_at: Option<Timestamp>,
}

/// Booking User Id
pub type BookingUserId = TypedId<BookingUserRecord>;

/// Booking User Record
///
/// Join entity linking a booking to a user. Hard-deleted when the link is
/// removed.
#[derive(Debug, Clone)]
pub struct BookingUserRecord {
    /// Identity key assigned by the database.
    pub id: BookingUserId,

    /// The linked booking.
    pub booking_id: BookingId,

    /// The linked user.
    pub user_id: UserId,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
