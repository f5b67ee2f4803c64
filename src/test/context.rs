//! Test context for service-level integration tests.

use sqlx::query_scalar;

use crate::{
    database::Db,
    domain::{
        book_types::PgBookTypesService,
        bookings::{PgBookingsService, records::UserId},
        books::PgBooksService,
        discounts::PgDiscountsService,
        rates::PgRatesService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub user_id: UserId,
    pub book_types: PgBookTypesService,
    pub books: PgBooksService,
    pub discounts: PgDiscountsService,
    pub rates: PgRatesService,
    pub bookings: PgBookingsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;

        let db = Db::new(test_db.pool().clone());

        // Seed one user so booking link tests have a row to point at. The
        // users table is a stand-in owned by the host application.
        let user_id = insert_user(&test_db, "Test Reader", "reader@example.com").await;

        Self {
            book_types: PgBookTypesService::new(db.clone()),
            books: PgBooksService::new(db.clone()),
            discounts: PgDiscountsService::new(db.clone()),
            rates: PgRatesService::new(db.clone()),
            bookings: PgBookingsService::new(db),
            user_id,
            db: test_db,
        }
    }

    /// Create an additional user for multi-user booking tests.
    pub async fn create_user(&self, name: &str, email: &str) -> UserId {
        insert_user(&self.db, name, email).await
    }
}

async fn insert_user(db: &TestDb, name: &str, email: &str) -> UserId {
    let id: i64 = query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(db.pool())
        .await
        .expect("Failed to seed test user");

    UserId::from_i64(id)
}
