//!
//! A context for appending benchmark results, passed by the CI job.
//!

use std::path::Path;

use crate::input::tool::Tool;
use crate::model::suite_run::record::commit::Commit;

///
/// A context for appending benchmark results, passed by the CI job.
///
/// Every field may be omitted from the file and supplied on the command line instead.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Context {
    /// The source repository, used when the ledger file is created.
    pub repo_url: Option<String>,
    /// The suite to append to.
    pub suite: Option<String>,
    /// The harness that produced the input reports.
    pub tool: Option<Tool>,
    /// The measured commit.
    pub commit: Option<Commit>,
    /// The capture time in milliseconds since the Unix epoch.
    pub date: Option<u64>,
}

///
/// A validated context.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext {
    /// The source repository, if known.
    pub repo_url: Option<String>,
    /// The suite to append to.
    pub suite: String,
    /// The harness that produced the input reports.
    pub tool: Tool,
    /// The measured commit.
    pub commit: Commit,
    /// The capture time in milliseconds since the Unix epoch.
    pub date: u64,
}

impl Context {
    ///
    /// Reads the context from a JSON file.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Context file {path:?} reading: {error}"))?;
        let context: Self = serde_json::from_str(contents.as_str())
            .map_err(|error| anyhow::anyhow!("Context file {path:?} parsing: {error}"))?;
        Ok(context)
    }

    ///
    /// Replaces fields with the ones set in `overrides`.
    ///
    pub fn override_with(&mut self, overrides: Context) {
        let Context {
            repo_url,
            suite,
            tool,
            commit,
            date,
        } = overrides;

        if repo_url.is_some() {
            self.repo_url = repo_url;
        }
        if suite.is_some() {
            self.suite = suite;
        }
        if tool.is_some() {
            self.tool = tool;
        }
        if commit.is_some() {
            self.commit = commit;
        }
        if date.is_some() {
            self.date = date;
        }
    }

    ///
    /// Checks that the context is complete and well-formed.
    /// A missing date defaults to `now`.
    ///
    pub fn validate(self, now: u64) -> anyhow::Result<RunContext> {
        let Context {
            repo_url,
            suite,
            tool,
            commit,
            date,
        } = self;

        let suite = match suite {
            Some(suite) if !suite.trim().is_empty() => suite,
            Some(_) => anyhow::bail!("The `suite` field in the context is empty"),
            None => anyhow::bail!("The suite is not set. Use `--suite` or the context file"),
        };
        let Some(tool) = tool else {
            anyhow::bail!("The tool is not set. Use `--tool` or the context file");
        };
        let Some(commit) = commit else {
            anyhow::bail!("The commit is not set. Use `--commit-file` or the context file");
        };
        if commit.id.trim().is_empty() {
            anyhow::bail!("The `commit.id` field in the context is empty");
        }
        if repo_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            anyhow::bail!("The `repo_url` field in the context is empty");
        }

        Ok(RunContext {
            repo_url,
            suite,
            tool,
            commit,
            date: date.unwrap_or(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::input::tool::Tool;
    use crate::test_data;

    fn complete() -> Context {
        Context {
            repo_url: Some("https://example.com/repo".to_owned()),
            suite: Some("suite".to_owned()),
            tool: Some(Tool::Pytest),
            commit: Some(test_data::commit("abc")),
            date: None,
        }
    }

    #[test]
    fn validate_defaults_date() {
        let context = complete().validate(42).expect("Always valid");
        assert_eq!(context.date, 42);
        assert_eq!(context.suite, "suite");
    }

    #[test]
    fn validate_rejects_incomplete() {
        for context in [
            Context {
                suite: None,
                ..complete()
            },
            Context {
                suite: Some(" ".to_owned()),
                ..complete()
            },
            Context {
                tool: None,
                ..complete()
            },
            Context {
                commit: None,
                ..complete()
            },
            Context {
                commit: Some(test_data::commit("")),
                ..complete()
            },
            Context {
                repo_url: Some(String::new()),
                ..complete()
            },
        ] {
            assert!(context.validate(0).is_err());
        }
    }

    #[test]
    fn override_with() {
        let mut context = complete();
        context.override_with(Context {
            suite: Some("other".to_owned()),
            date: Some(7),
            ..Context::default()
        });
        assert_eq!(context.suite.as_deref(), Some("other"));
        assert_eq!(context.tool, Some(Tool::Pytest));
        assert_eq!(context.date, Some(7));
    }

    #[test]
    fn try_from_path() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join("context.json");
        std::fs::write(
            path.as_path(),
            r#"{
                "suite": "Benchmarks - Python 3.8",
                "tool": "pytest",
                "commit": {
                    "author": { "email": "a@b", "name": "A" },
                    "committer": { "email": "a@b", "name": "A" },
                    "id": "abc",
                    "message": "m",
                    "url": "u"
                }
            }"#,
        )
        .expect("Always valid");

        let context = Context::try_from_path(path.as_path()).expect("Always valid");
        assert_eq!(context.tool, Some(Tool::Pytest));
        assert!(context.repo_url.is_none());

        std::fs::write(path.as_path(), r#"{ "suites": "x" }"#).expect("Always valid");
        assert!(Context::try_from_path(path.as_path()).is_err());
    }
}
