//! Booking Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::bookings::records::{BookingId, BookingUserId, BookingUserRecord, UserId};

const CREATE_BOOKING_USER_SQL: &str = include_str!("../sql/create_booking_user.sql");
const LIST_BOOKING_USERS_SQL: &str = include_str!("../sql/list_booking_users.sql");
const DELETE_BOOKING_USER_SQL: &str = include_str!("../sql/delete_booking_user.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingUsersRepository;

impl PgBookingUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_booking_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingId,
        user: UserId,
    ) -> Result<BookingUserRecord, sqlx::Error> {
        query_as::<Postgres, BookingUserRecord>(CREATE_BOOKING_USER_SQL)
            .bind(booking.into_i64())
            .bind(user.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_booking_users(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingId,
    ) -> Result<Vec<BookingUserRecord>, sqlx::Error> {
        query_as::<Postgres, BookingUserRecord>(LIST_BOOKING_USERS_SQL)
            .bind(booking.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    /// Hard delete of the join row. Returns the number of rows removed.
    pub(crate) async fn delete_booking_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingId,
        user: UserId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOKING_USER_SQL)
            .bind(booking.into_i64())
            .bind(user.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BookingUserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BookingUserId::from_i64(row.try_get("id")?),
            booking_id: BookingId::from_i64(row.try_get("booking_id")?),
            user_id: UserId::from_i64(row.try_get("user_id")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
