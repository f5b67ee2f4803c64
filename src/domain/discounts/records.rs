//! Discount Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Discount Id
pub type DiscountId = TypedId<DiscountRecord>;

/// Discount Record
#[derive(Debug, Clone)]
pub struct DiscountRecord {
    /// Identity key assigned by the database.
    pub id: DiscountId,

    /// Display name for the discount.
    pub name: String,

    /// The code someone would be expected to enter at checkout.
    ///
    /// The schema places no uniqueness constraint on codes; several rows may
    /// share one.
    pub code: String,

    /// Discount amount in whole cents.
    pub discount: u32,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,

    /// Soft-delete timestamp when deleted.
    pub deleted_at: Option<Timestamp>,
}
