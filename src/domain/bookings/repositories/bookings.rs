//! Bookings Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    books::records::BookId,
    bookings::{
        data::NewBooking,
        records::{BookingId, BookingRecord},
    },
};

const CREATE_BOOKING_SQL: &str = include_str!("../sql/create_booking.sql");
const GET_BOOKING_SQL: &str = include_str!("../sql/get_booking.sql");
const LIST_BOOKINGS_FOR_BOOK_SQL: &str = include_str!("../sql/list_bookings_for_book.sql");
const MARK_BOOKING_PAID_SQL: &str = include_str!("../sql/mark_booking_paid.sql");
const DELETE_BOOKING_SQL: &str = include_str!("../sql/delete_booking.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the booking row alone; user links are the
    /// [`PgBookingUsersRepository`]'s concern.
    ///
    /// [`PgBookingUsersRepository`]: super::PgBookingUsersRepository
    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: &NewBooking,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(booking.book_id.into_i64())
            .bind(SqlxDate::from(booking.start))
            .bind(SqlxDate::from(booking.end))
            .bind(booking.is_reservation)
            .bind(booking.notes.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingId,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(GET_BOOKING_SQL)
            .bind(booking.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_bookings_for_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookId,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_FOR_BOOK_SQL)
            .bind(book.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn mark_booking_paid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_BOOKING_PAID_SQL)
            .bind(booking.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Soft delete. Returns the number of rows marked.
    pub(crate) async fn delete_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOKING_SQL)
            .bind(booking.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BookingId::from_i64(row.try_get("id")?),
            book_id: BookId::from_i64(row.try_get("book_id")?),
            start: row.try_get::<SqlxDate, _>("start")?.to_jiff(),
            end: row.try_get::<SqlxDate, _>("end")?.to_jiff(),
            is_reservation: row.try_get("is_reservation")?,
            is_paid: row.try_get("is_paid")?,
            notes: row.try_get("notes")?,
            users: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
