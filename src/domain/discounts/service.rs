//! Discounts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::discounts::{
        data::NewDiscount,
        errors::DiscountsServiceError,
        records::{DiscountId, DiscountRecord},
        repository::PgDiscountsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgDiscountsService {
    db: Db,
    repository: PgDiscountsRepository,
}

impl PgDiscountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDiscountsRepository::new(),
        }
    }
}

#[async_trait]
impl DiscountsService for PgDiscountsService {
    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_discount(&mut tx, discount).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_discount(&self, id: DiscountId) -> Result<DiscountRecord, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let discount = self.repository.get_discount(&mut tx, id).await?;

        tx.commit().await?;

        Ok(discount)
    }

    async fn find_discounts_by_code(
        &self,
        code: &str,
    ) -> Result<Vec<DiscountRecord>, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let discounts = self.repository.find_discounts_by_code(&mut tx, code).await?;

        tx.commit().await?;

        Ok(discounts)
    }

    async fn delete_discount(&self, id: DiscountId) -> Result<(), DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_discount(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(DiscountsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Discount persistence operations.
pub trait DiscountsService: Send + Sync {
    /// Creates a new discount.
    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, DiscountsServiceError>;

    /// Retrieve a single discount. Soft-deleted rows are not returned.
    async fn get_discount(&self, id: DiscountId) -> Result<DiscountRecord, DiscountsServiceError>;

    /// All non-deleted discounts for a checkout code, newest first. Codes
    /// carry no uniqueness constraint, so callers must handle several rows.
    async fn find_discounts_by_code(
        &self,
        code: &str,
    ) -> Result<Vec<DiscountRecord>, DiscountsServiceError>;

    /// Soft-deletes a discount, preserving redemption history.
    async fn delete_discount(&self, id: DiscountId) -> Result<(), DiscountsServiceError>;
}
