//! Discounts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::discounts::{
    data::NewDiscount,
    records::{DiscountId, DiscountRecord},
};

const CREATE_DISCOUNT_SQL: &str = include_str!("sql/create_discount.sql");
const GET_DISCOUNT_SQL: &str = include_str!("sql/get_discount.sql");
const FIND_DISCOUNTS_BY_CODE_SQL: &str = include_str!("sql/find_discounts_by_code.sql");
const DELETE_DISCOUNT_SQL: &str = include_str!("sql/delete_discount.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDiscountsRepository;

impl PgDiscountsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, sqlx::Error> {
        let amount = try_into_cents(discount.discount)?;

        query_as::<Postgres, DiscountRecord>(CREATE_DISCOUNT_SQL)
            .bind(discount.name)
            .bind(discount.code)
            .bind(amount)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountId,
    ) -> Result<DiscountRecord, sqlx::Error> {
        query_as::<Postgres, DiscountRecord>(GET_DISCOUNT_SQL)
            .bind(discount.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// All non-deleted discounts carrying `code`, newest first. Codes are not
    /// unique, so this may return more than one row.
    pub(crate) async fn find_discounts_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Vec<DiscountRecord>, sqlx::Error> {
        query_as::<Postgres, DiscountRecord>(FIND_DISCOUNTS_BY_CODE_SQL)
            .bind(code)
            .fetch_all(&mut **tx)
            .await
    }

    /// Soft delete. Returns the number of rows marked.
    pub(crate) async fn delete_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_DISCOUNT_SQL)
            .bind(discount.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for DiscountRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: DiscountId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            code: row.try_get("code")?,
            discount: try_get_cents(row, "discount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

/// Monetary columns are `INTEGER` cents; surface them unsigned.
fn try_get_cents(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let cents_i32: i32 = row.try_get(col)?;

    u32::try_from(cents_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_into_cents(cents: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(cents).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
