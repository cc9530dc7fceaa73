// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The parsed commit record consumed by lint rules.

use crate::error::{CommitError, Result};

/// A commit message already split into its conventional parts.
///
/// Rules only read from this record. It is built right before a lint pass,
/// either by hand or from a [`git_conventional::Commit`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommit {
    /// Commit type (chore, fix, feat, ...).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject (description) line.
    pub subject: String,
    /// Optional body. May be present but empty.
    pub body: Option<String>,
}

impl ParsedCommit {
    /// Create a new parsed commit with a type and subject.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            subject: subject.into(),
            body: None,
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body. An empty string is kept as an empty body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Parse a raw commit message with `git-conventional`.
    ///
    /// A message without a conventional header is an error here. Hosts that
    /// still want to check the body of such a message should build the record
    /// themselves with an empty `commit_type` and the body they extracted.
    pub fn parse(message: &str) -> Result<Self> {
        let message = message.trim();

        if message.is_empty() {
            return Err(CommitError::EmptyMessage.into());
        }

        let commit = git_conventional::Commit::parse(message).map_err(|e| {
            CommitError::ParseFailed {
                message: e.to_string(),
            }
        })?;

        Ok(Self::from(&commit))
    }

    /// The scope as a string slice, if any.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The body as a string slice, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Get the header line.
    pub fn header(&self) -> String {
        match self.scope {
            Some(ref scope) => format!("{}({}): {}", self.commit_type, scope, self.subject),
            None => format!("{}: {}", self.commit_type, self.subject),
        }
    }
}

impl From<&git_conventional::Commit<'_>> for ParsedCommit {
    fn from(commit: &git_conventional::Commit<'_>) -> Self {
        Self {
            commit_type: commit.type_().as_str().to_string(),
            scope: commit.scope().map(|s| s.as_str().to_string()),
            subject: commit.description().to_string(),
            body: commit.body().map(str::to_string),
        }
    }
}
