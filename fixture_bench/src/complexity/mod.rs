//!
//! The complexity model.
//!

pub mod error;

use crate::fixture::family::Family;

use self::error::Error;

///
/// The complexity model.
///
/// `complexity = d_a^e1 * d_b^e2 [+ w * d_c]`, where the dimensions `a`, `b` and `c`
/// are bound by configuration.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Complexity {
    /// The power-law factors.
    pub factors: Vec<Factor>,
    /// The optional additive linear term.
    pub linear: Option<Linear>,
}

///
/// A power-law factor `dimension^exponent`.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Factor {
    /// The 0-based dimension index.
    pub dimension: usize,
    /// The exponent.
    pub exponent: f64,
}

///
/// A linear term `weight * dimension`.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Linear {
    /// The 0-based dimension index.
    pub dimension: usize,
    /// The weight.
    pub weight: f64,
}

impl Complexity {
    /// Number of power-law factors.
    pub const FACTOR_COUNT: usize = 2;

    ///
    /// Validates the numeric arguments and builds the model.
    ///
    /// `arguments` are `e1 e2` or `e1 e2 w`. `bindings` are 1-based dimension indexes,
    /// one per argument; if empty, the dimensions are bound in header order.
    ///
    pub fn new(arguments: &[f64], bindings: &[usize], family: Family) -> Result<Self, Error> {
        if !(Self::FACTOR_COUNT..=Self::FACTOR_COUNT + 1).contains(&arguments.len()) {
            return Err(Error::ArgumentCount(arguments.len()));
        }
        if let Some(value) = arguments.iter().find(|value| !value.is_finite()) {
            return Err(Error::NotFinite(*value));
        }

        let bindings = if bindings.is_empty() {
            (1..=arguments.len()).collect::<Vec<usize>>()
        } else {
            bindings.to_vec()
        };
        if bindings.len() != arguments.len() {
            return Err(Error::BindingCount {
                expected: arguments.len(),
                found: bindings.len(),
            });
        }
        for index in bindings.iter().copied() {
            if index == 0 || index > family.dimension_count() {
                return Err(Error::Dimension {
                    index,
                    family,
                    count: family.dimension_count(),
                });
            }
        }

        let factors = bindings
            .iter()
            .zip(arguments.iter())
            .take(Self::FACTOR_COUNT)
            .map(|(index, exponent)| Factor {
                dimension: index - 1,
                exponent: *exponent,
            })
            .collect();
        let linear = arguments.get(Self::FACTOR_COUNT).map(|weight| Linear {
            dimension: bindings[Self::FACTOR_COUNT] - 1,
            weight: *weight,
        });

        Ok(Self { factors, linear })
    }

    ///
    /// Computes the complexity of the given size dimensions.
    ///
    /// Missing dimensions count as zero.
    ///
    pub fn evaluate(&self, dimensions: &[u64]) -> f64 {
        let value = |index: usize| dimensions.get(index).copied().unwrap_or_default() as f64;

        let product = self
            .factors
            .iter()
            .map(|factor| value(factor.dimension).powf(factor.exponent))
            .product::<f64>();
        match self.linear {
            Some(linear) => product + linear.weight * value(linear.dimension),
            None => product,
        }
    }

    ///
    /// Renders the model as a spreadsheet formula.
    ///
    /// `cell` maps a 0-based dimension index to the reference of the cell holding it.
    ///
    pub fn formula<F>(&self, cell: F) -> String
    where
        F: Fn(usize) -> String,
    {
        let product = self
            .factors
            .iter()
            .map(|factor| format!("{}^{}", cell(factor.dimension), factor.exponent))
            .collect::<Vec<String>>()
            .join("*");
        match self.linear {
            Some(linear) => format!("{product}+{}*{}", cell(linear.dimension), linear.weight),
            None => product,
        }
    }

    ///
    /// Returns a human-readable description with the family's dimension names.
    ///
    pub fn describe(&self, family: Family) -> String {
        let names = family.dimension_names();
        let name = |index: usize| names.get(index).copied().unwrap_or("?");

        let product = self
            .factors
            .iter()
            .map(|factor| format!("{}^{}", name(factor.dimension), factor.exponent))
            .collect::<Vec<String>>()
            .join(" * ");
        match self.linear {
            Some(linear) => format!("{product} + {} * {}", linear.weight, name(linear.dimension)),
            None => product,
        }
    }
}
