//! Book types service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::book_types::{
        data::{BookTypeUpdate, NewBookType},
        errors::BookTypesServiceError,
        records::{BookTypeId, BookTypeRecord},
        repository::PgBookTypesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookTypesService {
    db: Db,
    repository: PgBookTypesRepository,
}

impl PgBookTypesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBookTypesRepository::new(),
        }
    }
}

#[async_trait]
impl BookTypesService for PgBookTypesService {
    async fn create_book_type(
        &self,
        book_type: NewBookType,
    ) -> Result<BookTypeRecord, BookTypesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_book_type(&mut tx, book_type).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_book_type(
        &self,
        id: BookTypeId,
    ) -> Result<BookTypeRecord, BookTypesServiceError> {
        let mut tx = self.db.begin().await?;

        let book_type = self.repository.get_book_type(&mut tx, id).await?;

        tx.commit().await?;

        Ok(book_type)
    }

    async fn list_book_types(&self) -> Result<Vec<BookTypeRecord>, BookTypesServiceError> {
        let mut tx = self.db.begin().await?;

        let book_types = self.repository.list_book_types(&mut tx).await?;

        tx.commit().await?;

        Ok(book_types)
    }

    async fn update_book_type(
        &self,
        id: BookTypeId,
        update: BookTypeUpdate,
    ) -> Result<BookTypeRecord, BookTypesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_book_type(&mut tx, id, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_book_type(&self, id: BookTypeId) -> Result<(), BookTypesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_book_type(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(BookTypesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Book type persistence operations.
pub trait BookTypesService: Send + Sync {
    /// Creates a new book type.
    async fn create_book_type(
        &self,
        book_type: NewBookType,
    ) -> Result<BookTypeRecord, BookTypesServiceError>;

    /// Retrieve a single book type. Soft-deleted rows are not returned.
    async fn get_book_type(&self, id: BookTypeId)
    -> Result<BookTypeRecord, BookTypesServiceError>;

    /// List all book types that have not been soft-deleted.
    async fn list_book_types(&self) -> Result<Vec<BookTypeRecord>, BookTypesServiceError>;

    /// Replaces a book type's name and description.
    async fn update_book_type(
        &self,
        id: BookTypeId,
        update: BookTypeUpdate,
    ) -> Result<BookTypeRecord, BookTypesServiceError>;

    /// Soft-deletes a book type. The row stays in storage so existing books
    /// keep a valid reference.
    async fn delete_book_type(&self, id: BookTypeId) -> Result<(), BookTypesServiceError>;
}
