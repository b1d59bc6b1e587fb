//!
//! Benchmark harness that produced an input report.
//!

///
/// Benchmark harness that produced an input report.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// `pytest-benchmark` JSON report.
    Pytest,
    /// `cargo bench` text output.
    Cargo,
    /// JSON array of bench cases where a larger value is an improvement.
    CustomBiggerIsBetter,
    /// JSON array of bench cases where a smaller value is an improvement.
    CustomSmallerIsBetter,
}

impl Tool {
    ///
    /// Whether a larger value is an improvement.
    ///
    pub fn is_bigger_better(&self) -> bool {
        match self {
            Self::Pytest | Self::CustomBiggerIsBetter => true,
            Self::Cargo | Self::CustomSmallerIsBetter => false,
        }
    }

    ///
    /// Returns the extension of report files searched for in input directories.
    ///
    pub fn report_extension(&self) -> &'static str {
        match self {
            Self::Cargo => "txt",
            Self::Pytest | Self::CustomBiggerIsBetter | Self::CustomSmallerIsBetter => "json",
        }
    }

    ///
    /// Returns the direction for a tool name stored in a ledger.
    ///
    /// Names this crate does not produce default to bigger-is-better.
    ///
    pub fn is_bigger_better_by_name(name: &str) -> bool {
        name.parse::<Self>()
            .map(|tool| tool.is_bigger_better())
            .unwrap_or(true)
    }
}

impl std::str::FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "pytest" => Ok(Self::Pytest),
            "cargo" => Ok(Self::Cargo),
            "customBiggerIsBetter" => Ok(Self::CustomBiggerIsBetter),
            "customSmallerIsBetter" => Ok(Self::CustomSmallerIsBetter),
            string => anyhow::bail!(
                "Unknown benchmark tool `{string}`. Supported tools: {}",
                [
                    Self::Pytest,
                    Self::Cargo,
                    Self::CustomBiggerIsBetter,
                    Self::CustomSmallerIsBetter
                ]
                .into_iter()
                .map(|element| element.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pytest => write!(f, "pytest"),
            Self::Cargo => write!(f, "cargo"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
        }
    }
}
