//! Books service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::books::{
        data::NewBook,
        errors::BooksServiceError,
        records::{BookId, BookRecord},
        repository::PgBooksRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBooksService {
    db: Db,
    repository: PgBooksRepository,
}

impl PgBooksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBooksRepository::new(),
        }
    }
}

#[async_trait]
impl BooksService for PgBooksService {
    async fn create_book(&self, book: NewBook) -> Result<BookRecord, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_book(&mut tx, book).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_book(&self, id: BookId) -> Result<BookRecord, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let book = self.repository.get_book(&mut tx, id).await?;

        tx.commit().await?;

        Ok(book)
    }

    async fn get_book_by_number(&self, number: i32) -> Result<BookRecord, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let book = self.repository.get_book_by_number(&mut tx, number).await?;

        tx.commit().await?;

        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<BookRecord>, BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let books = self.repository.list_books(&mut tx).await?;

        tx.commit().await?;

        Ok(books)
    }

    async fn delete_book(&self, id: BookId) -> Result<(), BooksServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_book(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(BooksServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
/// Book persistence operations.
pub trait BooksService: Send + Sync {
    /// Creates a new book. The book type must already exist.
    async fn create_book(&self, book: NewBook) -> Result<BookRecord, BooksServiceError>;

    /// Retrieve a single book by id.
    async fn get_book(&self, id: BookId) -> Result<BookRecord, BooksServiceError>;

    /// Retrieve a single book by its library-wide number.
    async fn get_book_by_number(&self, number: i32) -> Result<BookRecord, BooksServiceError>;

    /// List all books ordered by number.
    async fn list_books(&self) -> Result<Vec<BookRecord>, BooksServiceError>;

    /// Hard-deletes a book.
    async fn delete_book(&self, id: BookId) -> Result<(), BooksServiceError>;
}
