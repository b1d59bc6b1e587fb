//!
//! A commit author or committer.
//!

///
/// A commit author or committer.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    /// The e-mail address.
    pub email: String,
    /// The display name.
    pub name: String,
    /// The hosting service account name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Identity {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(email: String, name: String, username: Option<String>) -> Self {
        Self {
            email,
            name,
            username,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.username {
            Some(ref username) => write!(f, "{} (@{username})", self.name),
            None => write!(f, "{} <{}>", self.name, self.email),
        }
    }
}
