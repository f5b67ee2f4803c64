//! Book Records

use jiff::Timestamp;

use crate::{domain::book_types::records::BookTypeId, ids::TypedId};

/// Book Id
pub type BookId = TypedId<BookRecord>;

/// Book Record
///
/// Books are physical inventory and are hard-deleted; there is no
/// `deleted_at` column.
#[derive(Debug, Clone)]
pub struct BookRecord {
    /// Identity key assigned by the database.
    pub id: BookId,

    /// The book number in the library, unique across all books.
    pub number: i32,

    /// The book's type.
    pub book_type_id: BookTypeId,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
