//! Book Data

use crate::domain::book_types::records::BookTypeId;

/// New Book Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    /// Library-wide unique book number.
    pub number: i32,

    /// Type the book belongs to; must reference an existing book type.
    pub book_type_id: BookTypeId,
}
