//!
//! The commit a benchmark record was measured at.
//!

pub mod identity;

use std::path::Path;

use self::identity::Identity;

///
/// The commit a benchmark record was measured at.
///
/// All fields are passed through as they were received from the CI event.
/// Keys the model does not know about are kept in `other` and written back.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Identity,
    /// The commit committer.
    pub committer: Identity,
    /// Whether the commit is distinct from the ones already pushed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit hash.
    pub id: String,
    /// The commit message.
    pub message: String,
    /// The commit timestamp, usually RFC 3339 with the committer's offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// The source tree hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// The commit web page.
    pub url: String,
    /// Unrecognized keys.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Commit {
    /// The number of hash characters shown in short identifiers.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(Self::SHORT_ID_LENGTH) {
            Some((index, _)) => &self.id[..index],
            None => self.id.as_str(),
        }
    }

    ///
    /// Returns the first line of the commit message.
    ///
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

impl TryFrom<&Path> for Commit {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} reading: {error}"))?;
        let commit: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} parsing: {error}"))?;
        Ok(commit)
    }
}
