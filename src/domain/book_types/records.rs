//! Book Type Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Book Type Id
pub type BookTypeId = TypedId<BookTypeRecord>;

/// Book Type Record
#[derive(Debug, Clone)]
pub struct BookTypeRecord {
    /// Identity key assigned by the database.
    pub id: BookTypeId,

    /// The name of the book type, e.g. "Hardcover Folio".
    pub name: String,

    /// Full text description of the book type.
    pub description: String,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,

    /// Soft-delete timestamp when deleted.
    pub deleted_at: Option<Timestamp>,
}
