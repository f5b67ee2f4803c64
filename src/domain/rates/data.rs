//! Rate Data

use crate::domain::book_types::records::BookTypeId;

/// New Rate Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRate {
    /// Price in whole cents.
    pub value: u32,

    /// Book type the rate belongs to; must reference an existing book type.
    pub book_type_id: BookTypeId,

    /// Whether this is the weekend rate.
    pub is_weekend: bool,
}
