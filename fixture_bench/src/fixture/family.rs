//!
//! Fixture family.
//!

///
/// Fixture family.
///
/// Determines how many size dimensions the header declares and how many integers
/// every relational record consists of.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Transit networks: stations connected by numbered lines.
    #[default]
    Transit,
    /// Plain graphs: nodes connected by unlabelled edges.
    Edges,
}

impl Family {
    ///
    /// Names of the size dimensions, in header order.
    ///
    pub fn dimension_names(&self) -> &'static [&'static str] {
        match self {
            Self::Transit => &["Stations", "Connections", "Lines"],
            Self::Edges => &["Nodes", "Edges"],
        }
    }

    ///
    /// Number of size dimensions in the header.
    ///
    pub fn dimension_count(&self) -> usize {
        self.dimension_names().len()
    }

    ///
    /// Number of integers in every relational record.
    ///
    pub fn record_arity(&self) -> usize {
        match self {
            Self::Transit => 3,
            Self::Edges => 2,
        }
    }
}

impl std::str::FromStr for Family {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "transit" => Ok(Self::Transit),
            "edges" => Ok(Self::Edges),
            string => anyhow::bail!(
                "Unknown fixture family `{string}`. Supported families: {}",
                [Self::Transit, Self::Edges]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transit => write!(f, "transit"),
            Self::Edges => write!(f, "edges"),
        }
    }
}
