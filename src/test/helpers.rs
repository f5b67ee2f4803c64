//! Test Helpers

use std::error::Error;

use crate::{
    domain::{
        book_types::{BookTypesService, BookTypesServiceError, data::NewBookType,
            records::BookTypeRecord},
        books::{BooksService, data::NewBook, records::BookRecord},
    },
    test::TestContext,
};

pub(crate) async fn create_book_type(
    ctx: &TestContext,
    name: &str,
) -> Result<BookTypeRecord, BookTypesServiceError> {
    ctx.book_types
        .create_book_type(NewBookType {
            name: name.to_string(),
            description: format!("{name} description"),
        })
        .await
}

/// Create a book (and a backing book type) with the given number.
pub(crate) async fn create_book(
    ctx: &TestContext,
    number: i32,
) -> Result<BookRecord, Box<dyn Error + Send + Sync>> {
    let book_type = create_book_type(ctx, &format!("Type for book {number}")).await?;

    let book = ctx
        .books
        .create_book(NewBook {
            number,
            book_type_id: book_type.id,
        })
        .await?;

    Ok(book)
}
