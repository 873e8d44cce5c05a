use crate::error::Diagnostic;
use crate::models::{AnswerKey, Label, QuestionId, Verdict};
use crate::surface::QuizSurface;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// A change on one radio input: `group` is the input's name (the question id),
/// `value` its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub group: String,
    pub value: String,
}

impl SelectionEvent {
    pub fn new(group: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            value: value.into(),
        }
    }

    pub fn select(id: QuestionId, label: Label) -> Self {
        Self::new(id.to_string(), label.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackHandler {
    key: Arc<AnswerKey>,
}

impl FeedbackHandler {
    pub fn new(key: Arc<AnswerKey>) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// Clears the question's feedback slots, then marks the chosen option
    /// `Correct` or `Wrong`. Unknown questions leave every slot blank.
    pub fn handle<S: QuizSurface + ?Sized>(
        &self,
        surface: &mut S,
        event: &SelectionEvent,
    ) -> Option<Verdict> {
        let id = match event.group.parse::<QuestionId>() {
            Ok(id) => id,
            Err(err) => {
                debug!("ignoring selection outside the quiz: {}", err);
                return None;
            }
        };
        let label = match event.value.parse::<Label>() {
            Ok(label) => label,
            Err(err) => {
                warn!("ignoring selection on {}: {}", id, err);
                return None;
            }
        };

        surface.clear_feedback(id);
        match self.key.grade(id, label) {
            Ok(verdict) => {
                surface.set_feedback(id, label, verdict.feedback_text());
                Some(verdict)
            }
            Err(err) => {
                let diag = Diagnostic::from(&err);
                warn!(code = diag.code, "{}", diag.message);
                None
            }
        }
    }
}
