//!
//! JSON output of a ledger selection.
//!

use crate::output::selection::Selection;

///
/// JSON output of a ledger selection.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl TryFrom<&Selection<'_>> for Json {
    type Error = serde_json::Error;

    fn try_from(selection: &Selection<'_>) -> Result<Self, Self::Error> {
        let content = selection.to_json()?;
        Ok(Self { content })
    }
}
