//! Domain Value Objects
//!
//! Length-bounded text fields. Lengths are counted in Unicode scalar values.

use std::fmt;

use crate::error::{QaError, QaResult};

pub const TITLE_MIN_CHARS: usize = 1;
pub const TITLE_MAX_CHARS: usize = 255;
pub const CONTENT_MIN_CHARS: usize = 1;
pub const CONTENT_MAX_CHARS: usize = 5000;

fn check_bounds(field: &str, value: &str, min: usize, max: usize) -> QaResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(QaError::InvalidInput(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

/// Question title (1-255 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTitle(String);

impl QuestionTitle {
    pub fn new(title: impl Into<String>) -> QaResult<Self> {
        let title = title.into();
        check_bounds("title", &title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;
        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: String) -> Self {
        Self(title)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body text of a question or an answer (1-5000 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(content: impl Into<String>) -> QaResult<Self> {
        let content = content.into();
        check_bounds("content", &content, CONTENT_MIN_CHARS, CONTENT_MAX_CHARS)?;
        Ok(Self(content))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
