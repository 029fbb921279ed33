//!
//! Output benchmark format.
//!

///
/// Output benchmark format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// Excel spreadsheet with the results table and the complexity chart.
    Xlsx,
    /// Unstable JSON format, corresponds to the inner data model of the harness.
    Json,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown benchmark format `{string}`. Supported formats: {}",
                [Self::Xlsx, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Xlsx => write!(f, "xlsx"),
            Format::Json => write!(f, "json"),
        }
    }
}
