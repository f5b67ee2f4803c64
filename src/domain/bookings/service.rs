//! Bookings service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        books::records::BookId,
        bookings::{
            data::NewBooking,
            errors::BookingsServiceError,
            records::{BookingId, BookingRecord, BookingUserRecord, UserId},
            repositories::{PgBookingUsersRepository, PgBookingsRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    bookings: PgBookingsRepository,
    booking_users: PgBookingUsersRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            bookings: PgBookingsRepository::new(),
            booking_users: PgBookingUsersRepository::new(),
        }
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    #[tracing::instrument(
        name = "bookings.service.create_booking",
        skip(self, booking),
        fields(
            book_id = tracing::field::Empty,
            booking_id = tracing::field::Empty,
            user_count = tracing::field::Empty
        ),
        err
    )]
    async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let span = Span::current();

        span.record("book_id", tracing::field::display(booking.book_id));
        span.record("user_count", tracing::field::display(booking.users.len()));

        let mut created = self.bookings.create_booking(&mut tx, &booking).await?;

        span.record("booking_id", tracing::field::display(created.id));

        for user in &booking.users {
            let link = self
                .booking_users
                .create_booking_user(&mut tx, created.id, *user)
                .await?;

            created.users.push(link);
        }

        tx.commit().await?;

        info!(booking_id = %created.id, "created booking");

        Ok(created)
    }

    async fn get_booking(&self, id: BookingId) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut booking = self.bookings.get_booking(&mut tx, id).await?;

        let users = self.booking_users.list_booking_users(&mut tx, id).await?;

        tx.commit().await?;

        booking.users.extend(users);

        Ok(booking)
    }

    async fn list_bookings_for_book(
        &self,
        book: BookId,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self.bookings.list_bookings_for_book(&mut tx, book).await?;

        tx.commit().await?;

        Ok(bookings)
    }

    async fn add_user(
        &self,
        booking: BookingId,
        user: UserId,
    ) -> Result<BookingUserRecord, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        // Reject links to cancelled bookings; the FK alone would accept them.
        self.bookings.get_booking(&mut tx, booking).await?;

        let link = self
            .booking_users
            .create_booking_user(&mut tx, booking, user)
            .await?;

        tx.commit().await?;

        Ok(link)
    }

    async fn remove_user(
        &self,
        booking: BookingId,
        user: UserId,
    ) -> Result<(), BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .booking_users
            .delete_booking_user(&mut tx, booking, user)
            .await?;

        if rows_affected == 0 {
            return Err(BookingsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn mark_paid(&self, id: BookingId) -> Result<(), BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.bookings.mark_booking_paid(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(BookingsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn cancel_booking(&self, id: BookingId) -> Result<(), BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.bookings.delete_booking(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(BookingsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Booking persistence operations.
pub trait BookingsService: Send + Sync {
    /// Creates a booking and its user links in one transaction. An unknown
    /// book or user fails the whole operation.
    async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Retrieve a single booking with its linked users. Cancelled bookings
    /// are not returned.
    async fn get_booking(&self, id: BookingId) -> Result<BookingRecord, BookingsServiceError>;

    /// Bookings held against a book, earliest start date first. User links
    /// are not populated.
    async fn list_bookings_for_book(
        &self,
        book: BookId,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// Attach a user to an existing booking.
    async fn add_user(
        &self,
        booking: BookingId,
        user: UserId,
    ) -> Result<BookingUserRecord, BookingsServiceError>;

    /// Detach a user from a booking. The join row is hard-deleted.
    async fn remove_user(
        &self,
        booking: BookingId,
        user: UserId,
    ) -> Result<(), BookingsServiceError>;

    /// Record payment against a booking.
    async fn mark_paid(&self, id: BookingId) -> Result<(), BookingsServiceError>;

    /// Cancels a booking via soft delete, preserving its history and user
    /// links.
    async fn cancel_booking(&self, id: BookingId) -> Result<(), BookingsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers};

    use super::*;

    #[tokio::test]
    async fn create_booking_returns_persisted_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 1).await?;

        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 5),
                is_reservation: true,
                notes: Some("window seat".to_string()),
                users: vec![ctx.user_id],
            })
            .await?;

        assert_eq!(booking.book_id, book.id);
        assert_eq!(booking.start, date(2026, 9, 1));
        assert_eq!(booking.end, date(2026, 9, 5));
        assert!(booking.is_reservation);
        assert!(!booking.is_paid);
        assert_eq!(booking.notes.as_deref(), Some("window seat"));
        assert_eq!(booking.users.len(), 1);
        assert_eq!(booking.users[0].user_id, ctx.user_id);

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_unknown_book_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: BookId::from_i64(9_999),
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: Vec::new(),
            })
            .await;

        assert!(
            matches!(result, Err(BookingsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_booking_unknown_user_rolls_back_the_booking() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 2).await?;

        let result = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: vec![UserId::from_i64(9_999)],
            })
            .await;

        assert!(
            matches!(result, Err(BookingsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        // The booking row must not survive the failed link insert.
        let bookings = ctx.bookings.list_bookings_for_book(book.id).await?;
        assert!(bookings.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn inverted_date_range_is_accepted_by_the_schema() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 3).await?;

        // No constraint relates start and end; the row persists as given.
        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 5),
                end: date(2026, 9, 1),
                is_reservation: false,
                notes: None,
                users: Vec::new(),
            })
            .await?;

        assert!(booking.start > booking.end);

        Ok(())
    }

    #[tokio::test]
    async fn overlapping_bookings_for_one_book_are_accepted() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 4).await?;

        for _ in 0..2 {
            ctx.bookings
                .create_booking(NewBooking {
                    book_id: book.id,
                    start: date(2026, 9, 1),
                    end: date(2026, 9, 7),
                    is_reservation: false,
                    notes: None,
                    users: Vec::new(),
                })
                .await?;
        }

        let bookings = ctx.bookings.list_bookings_for_book(book.id).await?;
        assert_eq!(bookings.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn get_booking_includes_linked_users() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 5).await?;
        let other_user = ctx.create_user("Second Reader", "second@example.com").await;

        let created = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: vec![ctx.user_id, other_user],
            })
            .await?;

        let fetched = ctx.bookings.get_booking(created.id).await?;

        let user_ids: Vec<_> = fetched.users.iter().map(|u| u.user_id).collect();
        assert_eq!(user_ids, vec![ctx.user_id, other_user]);

        Ok(())
    }

    #[tokio::test]
    async fn add_and_remove_user_round_trips() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 6).await?;

        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: Vec::new(),
            })
            .await?;

        let link = ctx.bookings.add_user(booking.id, ctx.user_id).await?;

        assert_eq!(link.booking_id, booking.id);
        assert_eq!(link.user_id, ctx.user_id);

        ctx.bookings.remove_user(booking.id, ctx.user_id).await?;

        let fetched = ctx.bookings.get_booking(booking.id).await?;
        assert!(fetched.users.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn remove_user_without_link_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 7).await?;

        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: Vec::new(),
            })
            .await?;

        let result = ctx.bookings.remove_user(booking.id, ctx.user_id).await;

        assert!(
            matches!(result, Err(BookingsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn mark_paid_flips_the_flag() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 8).await?;

        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: Vec::new(),
            })
            .await?;

        ctx.bookings.mark_paid(booking.id).await?;

        let fetched = ctx.bookings.get_booking(booking.id).await?;
        assert!(fetched.is_paid);

        Ok(())
    }

    #[tokio::test]
    async fn cancel_booking_hides_it_but_keeps_the_row() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 9).await?;

        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: vec![ctx.user_id],
            })
            .await?;

        ctx.bookings.cancel_booking(booking.id).await?;

        let result = ctx.bookings.get_booking(booking.id).await;

        assert!(
            matches!(result, Err(BookingsServiceError::NotFound)),
            "expected NotFound after cancel, got {result:?}"
        );

        // Cancelled booking and its user links stay in storage.
        let remaining: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(booking.id.into_i64())
        .fetch_one(ctx.db.pool())
        .await?;
        assert_eq!(remaining, 1);

        let links: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings_users WHERE booking_id = $1")
                .bind(booking.id.into_i64())
                .fetch_one(ctx.db.pool())
                .await?;
        assert_eq!(links, 1);

        Ok(())
    }

    #[tokio::test]
    async fn add_user_to_cancelled_booking_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let book = helpers::create_book(&ctx, 10).await?;

        let booking = ctx
            .bookings
            .create_booking(NewBooking {
                book_id: book.id,
                start: date(2026, 9, 1),
                end: date(2026, 9, 2),
                is_reservation: false,
                notes: None,
                users: Vec::new(),
            })
            .await?;

        ctx.bookings.cancel_booking(booking.id).await?;

        let result = ctx.bookings.add_user(booking.id, ctx.user_id).await;

        assert!(
            matches!(result, Err(BookingsServiceError::NotFound)),
            "expected NotFound for cancelled booking, got {result:?}"
        );

        Ok(())
    }
}
