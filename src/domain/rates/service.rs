//! Rates service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        book_types::records::BookTypeId,
        rates::{
            data::NewRate,
            errors::RatesServiceError,
            records::{RateId, RateRecord},
            repository::PgRatesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgRatesService {
    db: Db,
    repository: PgRatesRepository,
}

impl PgRatesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRatesRepository::new(),
        }
    }
}

#[async_trait]
impl RatesService for PgRatesService {
    async fn set_rate(&self, rate: NewRate) -> Result<RateRecord, RatesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_rate(&mut tx, rate).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_rates_for_book_type(
        &self,
        book_type: BookTypeId,
    ) -> Result<Vec<RateRecord>, RatesServiceError> {
        let mut tx = self.db.begin().await?;

        let rates = self
            .repository
            .list_rates_for_book_type(&mut tx, book_type)
            .await?;

        tx.commit().await?;

        Ok(rates)
    }

    async fn delete_rate(&self, id: RateId) -> Result<(), RatesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_rate(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(RatesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Rate persistence operations.
pub trait RatesService: Send + Sync {
    /// Creates the weekday or weekend rate for a book type. Each book type
    /// holds at most one of each; a second insert for the same slot fails.
    async fn set_rate(&self, rate: NewRate) -> Result<RateRecord, RatesServiceError>;

    /// Rates configured for a book type, weekday first.
    async fn list_rates_for_book_type(
        &self,
        book_type: BookTypeId,
    ) -> Result<Vec<RateRecord>, RatesServiceError>;

    /// Hard-deletes a rate, freeing its slot.
    async fn delete_rate(&self, id: RateId) -> Result<(), RatesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers};

    use super::*;

    #[tokio::test]
    async fn set_rate_returns_persisted_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let book_type = helpers::create_book_type(&ctx, "Paperback").await?;

        let rate = ctx
            .rates
            .set_rate(NewRate {
                value: 15_00,
                book_type_id: book_type.id,
                is_weekend: false,
            })
            .await?;

        assert_eq!(rate.value, 15_00);
        assert_eq!(rate.book_type_id, book_type.id);
        assert!(!rate.is_weekend);

        Ok(())
    }

    #[tokio::test]
    async fn set_rate_unknown_book_type_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .rates
            .set_rate(NewRate {
                value: 10_00,
                book_type_id: BookTypeId::from_i64(9_999),
                is_weekend: false,
            })
            .await;

        assert!(
            matches!(result, Err(RatesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn second_weekday_rate_for_same_type_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let book_type = helpers::create_book_type(&ctx, "Paperback").await?;

        ctx.rates
            .set_rate(NewRate {
                value: 10_00,
                book_type_id: book_type.id,
                is_weekend: false,
            })
            .await?;

        let result = ctx
            .rates
            .set_rate(NewRate {
                value: 12_00,
                book_type_id: book_type.id,
                is_weekend: false,
            })
            .await;

        assert!(
            matches!(result, Err(RatesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn weekday_and_weekend_rates_coexist() -> TestResult {
        let ctx = TestContext::new().await;
        let book_type = helpers::create_book_type(&ctx, "Paperback").await?;

        ctx.rates
            .set_rate(NewRate {
                value: 10_00,
                book_type_id: book_type.id,
                is_weekend: false,
            })
            .await?;

        ctx.rates
            .set_rate(NewRate {
                value: 14_00,
                book_type_id: book_type.id,
                is_weekend: true,
            })
            .await?;

        let rates = ctx.rates.list_rates_for_book_type(book_type.id).await?;

        assert_eq!(rates.len(), 2);
        assert!(!rates[0].is_weekend);
        assert!(rates[1].is_weekend);

        Ok(())
    }

    #[tokio::test]
    async fn same_slot_on_different_types_is_allowed() -> TestResult {
        let ctx = TestContext::new().await;
        let type_a = helpers::create_book_type(&ctx, "Type A").await?;
        let type_b = helpers::create_book_type(&ctx, "Type B").await?;

        for book_type_id in [type_a.id, type_b.id] {
            ctx.rates
                .set_rate(NewRate {
                    value: 10_00,
                    book_type_id,
                    is_weekend: false,
                })
                .await?;
        }

        Ok(())
    }

    #[tokio::test]
    async fn delete_rate_frees_the_slot() -> TestResult {
        let ctx = TestContext::new().await;
        let book_type = helpers::create_book_type(&ctx, "Paperback").await?;

        let rate = ctx
            .rates
            .set_rate(NewRate {
                value: 10_00,
                book_type_id: book_type.id,
                is_weekend: false,
            })
            .await?;

        ctx.rates.delete_rate(rate.id).await?;

        // The weekday slot is free again.
        ctx.rates
            .set_rate(NewRate {
                value: 11_00,
                book_type_id: book_type.id,
                is_weekend: false,
            })
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn delete_rate_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.rates.delete_rate(RateId::from_i64(9_999)).await;

        assert!(
            matches!(result, Err(RatesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
