//! Bookings Repositories

mod booking_users;
mod bookings;

pub(crate) use booking_users::PgBookingUsersRepository;
pub(crate) use bookings::PgBookingsRepository;
