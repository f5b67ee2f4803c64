//! Library Domain Concerns

pub mod book_types;
pub mod bookings;
pub mod books;
pub mod discounts;
pub mod rates;
