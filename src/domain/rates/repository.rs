//! Rates Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    book_types::records::BookTypeId,
    rates::{
        data::NewRate,
        records::{RateId, RateRecord},
    },
};

const CREATE_RATE_SQL: &str = include_str!("sql/create_rate.sql");
const LIST_RATES_FOR_BOOK_TYPE_SQL: &str = include_str!("sql/list_rates_for_book_type.sql");
const DELETE_RATE_SQL: &str = include_str!("sql/delete_rate.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRatesRepository;

impl PgRatesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_rate(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rate: NewRate,
    ) -> Result<RateRecord, sqlx::Error> {
        let value = i32::try_from(rate.value).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, RateRecord>(CREATE_RATE_SQL)
            .bind(value)
            .bind(rate.book_type_id.into_i64())
            .bind(rate.is_weekend)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_rates_for_book_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book_type: BookTypeId,
    ) -> Result<Vec<RateRecord>, sqlx::Error> {
        query_as::<Postgres, RateRecord>(LIST_RATES_FOR_BOOK_TYPE_SQL)
            .bind(book_type.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_rate(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rate: RateId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_RATE_SQL)
            .bind(rate.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for RateRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let value_i32: i32 = row.try_get("value")?;

        let value = u32::try_from(value_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "value".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: RateId::from_i64(row.try_get("id")?),
            value,
            book_type_id: BookTypeId::from_i64(row.try_get("book_type_id")?),
            is_weekend: row.try_get("is_weekend")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
