//! Book Types Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::book_types::{
    data::{BookTypeUpdate, NewBookType},
    records::{BookTypeId, BookTypeRecord},
};

const CREATE_BOOK_TYPE_SQL: &str = include_str!("sql/create_book_type.sql");
const GET_BOOK_TYPE_SQL: &str = include_str!("sql/get_book_type.sql");
const LIST_BOOK_TYPES_SQL: &str = include_str!("sql/list_book_types.sql");
const UPDATE_BOOK_TYPE_SQL: &str = include_str!("sql/update_book_type.sql");
const DELETE_BOOK_TYPE_SQL: &str = include_str!("sql/delete_book_type.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookTypesRepository;

impl PgBookTypesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_book_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_type: NewBookType,
    ) -> Result<BookTypeRecord, sqlx::Error> {
        query_as::<Postgres, BookTypeRecord>(CREATE_BOOK_TYPE_SQL)
            .bind(book_type.name)
            .bind(book_type.description)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_book_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_type: BookTypeId,
    ) -> Result<BookTypeRecord, sqlx::Error> {
        query_as::<Postgres, BookTypeRecord>(GET_BOOK_TYPE_SQL)
            .bind(book_type.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_book_types(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BookTypeRecord>, sqlx::Error> {
        query_as::<Postgres, BookTypeRecord>(LIST_BOOK_TYPES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_book_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_type: BookTypeId,
        update: BookTypeUpdate,
    ) -> Result<BookTypeRecord, sqlx::Error> {
        query_as::<Postgres, BookTypeRecord>(UPDATE_BOOK_TYPE_SQL)
            .bind(book_type.into_i64())
            .bind(update.name)
            .bind(update.description)
            .fetch_one(&mut **tx)
            .await
    }

    /// Soft delete. Returns the number of rows marked, zero when the book
    /// type is absent or already deleted.
    pub(crate) async fn delete_book_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_type: BookTypeId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOK_TYPE_SQL)
            .bind(book_type.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BookTypeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BookTypeId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
