//!
//! Output query format.
//!

///
/// Output query format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// JSON format, corresponds to the record shape of the ledger.
    Json,
    /// CSV format, one row per bench case.
    Csv,
    /// Excel spreadsheet format, one row per record.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                vec![Self::Json, Self::Csv, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string().to_lowercase())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
