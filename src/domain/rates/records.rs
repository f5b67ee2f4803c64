//! Rate Records

use jiff::Timestamp;

use crate::{domain::book_types::records::BookTypeId, ids::TypedId};

/// Rate Id
pub type RateId = TypedId<RateRecord>;

/// Rate Record
///
/// At most one weekday and one weekend rate exist per book type, enforced by
/// a unique constraint on `(book_type_id, is_weekend)`.
#[derive(Debug, Clone)]
pub struct RateRecord {
    /// Identity key assigned by the database.
    pub id: RateId,

    /// Price in whole cents.
    pub value: u32,

    /// The book type this rate charges for.
    pub book_type_id: BookTypeId,

    /// Whether this is the weekend rate.
    pub is_weekend: bool,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
