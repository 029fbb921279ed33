//!
//! Complexity model configuration error.
//!

use crate::fixture::family::Family;

///
/// Complexity model configuration error.
///
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Neither two exponents nor two exponents and a weight.
    #[error("Expected two exponents and an optional weight, found {0} numbers")]
    ArgumentCount(usize),
    /// An exponent or the weight is NaN or infinite.
    #[error("Complexity parameter `{0}` is not a finite number")]
    NotFinite(f64),
    /// The number of dimension bindings does not match the number of parameters.
    #[error("Expected {expected} dimension bindings, found {found}")]
    BindingCount {
        /// The number of complexity parameters.
        expected: usize,
        /// The number of bindings provided.
        found: usize,
    },
    /// A binding refers to a dimension the family does not declare.
    #[error("Dimension {index} does not exist in the `{family}` family with {count} dimensions")]
    Dimension {
        /// The 1-based dimension index.
        index: usize,
        /// The fixture family.
        family: Family,
        /// The number of dimensions of the family.
        count: usize,
    },
}
