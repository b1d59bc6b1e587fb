//!
//! Ledger file form.
//!

use std::path::Path;

///
/// Ledger file form.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// A script assigning the ledger to a global variable, loadable by a chart page.
    #[default]
    Script,
    /// Bare JSON.
    Json,
}

impl Form {
    ///
    /// Selects the form by the file extension: `.json` is bare JSON, anything else a script.
    ///
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Script,
        }
    }
}
