//! Booking Data

use jiff::civil::Date;

use crate::domain::{books::records::BookId, bookings::records::UserId};

/// New Booking Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    /// Book to hold; must reference an existing book.
    pub book_id: BookId,

    /// First day of the booking.
    pub start: Date,

    /// Last day of the booking.
    pub end: Date,

    /// Whether this is a reservation rather than an active occupancy.
    pub is_reservation: bool,

    /// Optional free-form notes.
    pub notes: Option<String>,

    /// Users to attach; each must reference an existing user.
    pub users: Vec<UserId>,
}
