//!
//! One named measurement.
//!

///
/// One named measurement.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchCase {
    /// The fully qualified test identifier.
    pub name: String,
    /// The measured rate or duration.
    #[serde(serialize_with = "crate::util::number::serialize")]
    pub value: f64,
    /// The unit of `value`, e.g. `iter/sec`.
    pub unit: String,
    /// Free-text uncertainty annotation, e.g. `stddev: 0.0001`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Free-text auxiliary annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl BenchCase {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, value: f64, unit: String) -> Self {
        Self {
            name,
            value,
            unit,
            range: None,
            extra: None,
        }
    }

    ///
    /// Sets the uncertainty annotation.
    ///
    pub fn with_range(mut self, range: String) -> Self {
        self.range = Some(range);
        self
    }

    ///
    /// Sets the auxiliary annotation.
    ///
    pub fn with_extra(mut self, extra: String) -> Self {
        self.extra = Some(extra);
        self
    }

    ///
    /// Whether the value is a finite non-negative number.
    ///
    pub fn has_valid_value(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}
