//! Book Type Data

/// New Book Type Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookType {
    /// Name to persist.
    pub name: String,

    /// Description to persist.
    pub description: String,
}

/// Book Type Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct BookTypeUpdate {
    /// Replacement name.
    pub name: String,

    /// Replacement description.
    pub description: String,
}
