//! Books Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    book_types::records::BookTypeId,
    books::{
        data::NewBook,
        records::{BookId, BookRecord},
    },
};

const CREATE_BOOK_SQL: &str = include_str!("sql/create_book.sql");
const GET_BOOK_SQL: &str = include_str!("sql/get_book.sql");
const GET_BOOK_BY_NUMBER_SQL: &str = include_str!("sql/get_book_by_number.sql");
const LIST_BOOKS_SQL: &str = include_str!("sql/list_books.sql");
const DELETE_BOOK_SQL: &str = include_str!("sql/delete_book.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBooksRepository;

impl PgBooksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: NewBook,
    ) -> Result<BookRecord, sqlx::Error> {
        query_as::<Postgres, BookRecord>(CREATE_BOOK_SQL)
            .bind(book.number)
            .bind(book.book_type_id.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookId,
    ) -> Result<BookRecord, sqlx::Error> {
        query_as::<Postgres, BookRecord>(GET_BOOK_SQL)
            .bind(book.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_book_by_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        number: i32,
    ) -> Result<BookRecord, sqlx::Error> {
        query_as::<Postgres, BookRecord>(GET_BOOK_BY_NUMBER_SQL)
            .bind(number)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BookRecord>, sqlx::Error> {
        query_as::<Postgres, BookRecord>(LIST_BOOKS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOK_SQL)
            .bind(book.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BookRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BookId::from_i64(row.try_get("id")?),
            number: row.try_get("number")?,
            book_type_id: BookTypeId::from_i64(row.try_get("book_type_id")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
