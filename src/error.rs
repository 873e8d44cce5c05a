use crate::models::{QuestionId, ValidationIssue};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 2 lines, found {found}")]
    WrongLineCount { found: usize },
    #[error("question line does not start with `{prefix}`")]
    MissingPrefix { prefix: String },
    #[error("expected 4 comma-separated answers, found {found}")]
    WrongOptionCount { found: usize },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::WrongLineCount { .. } => "WRONG_LINE_COUNT",
            ParseError::MissingPrefix { .. } => "MISSING_PREFIX",
            ParseError::WrongOptionCount { .. } => "WRONG_OPTION_COUNT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("container `{id}` is not present on the page")]
    MissingContainer { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("no answer key entry for {id}")]
    MissingAnswerKeyEntry { id: QuestionId },
}

/// Record of a recovered failure. Nothing in generation or grading is fatal;
/// callers get these instead.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ValidationIssue>,
}

impl Diagnostic {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            question: None,
            details: Vec::new(),
        }
    }

    pub fn for_question(mut self, id: QuestionId) -> Self {
        self.question = Some(id);
        self
    }

    pub fn with_details(mut self, details: Vec<ValidationIssue>) -> Self {
        self.details = details;
        self
    }

    pub fn malformed_block(id: QuestionId, err: &ParseError) -> Self {
        Self::new(err.code(), format!("skipped malformed block {id}: {err}")).for_question(id)
    }
}

impl From<&SurfaceError> for Diagnostic {
    fn from(err: &SurfaceError) -> Self {
        Self::new("MISSING_CONTAINER", err.to_string())
    }
}

impl From<&GradeError> for Diagnostic {
    fn from(err: &GradeError) -> Self {
        match err {
            GradeError::MissingAnswerKeyEntry { id } => {
                Self::new("MISSING_ANSWER_KEY_ENTRY", err.to_string()).for_question(*id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_block_diagnostic_serializes_code_and_question() {
        let err = ParseError::WrongOptionCount { found: 3 };
        let diag = Diagnostic::malformed_block(QuestionId::new(2), &err);
        let raw = serde_json::to_value(&diag).unwrap();
        assert_eq!(raw["code"], "WRONG_OPTION_COUNT");
        assert_eq!(raw["question"], "q2");
        assert!(raw.get("details").is_none());
        assert!(diag.message.contains("found 3"));
    }

    #[test]
    fn grade_error_keeps_question() {
        let err = GradeError::MissingAnswerKeyEntry { id: QuestionId::new(7) };
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.code, "MISSING_ANSWER_KEY_ENTRY");
        assert_eq!(diag.question, Some(QuestionId::new(7)));
    }
}
