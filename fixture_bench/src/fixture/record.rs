//!
//! A relational record of a fixture.
//!

///
/// A relational record of a fixture.
///
/// The first two values are always the endpoints. Transit records carry the line
/// label as the third value.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The record values, in file order.
    pub values: Vec<u64>,
}

impl Record {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(values: Vec<u64>) -> Self {
        Self { values }
    }

    ///
    /// Returns the two endpoints of the record.
    ///
    pub fn endpoints(&self) -> (u64, u64) {
        (
            self.values.first().copied().unwrap_or_default(),
            self.values.get(1).copied().unwrap_or_default(),
        )
    }

    ///
    /// Returns the category label, if the family has one.
    ///
    pub fn label(&self) -> Option<u64> {
        self.values.get(2).copied()
    }
}
