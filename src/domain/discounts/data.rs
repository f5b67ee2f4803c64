//! Discount Data

/// New Discount Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    /// Display name to persist.
    pub name: String,

    /// Checkout code to persist.
    pub code: String,

    /// Discount amount in whole cents.
    pub discount: u32,
}
