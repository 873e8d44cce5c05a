use crate::error::{Diagnostic, SurfaceError};
use crate::feedback::{FeedbackHandler, SelectionEvent};
use crate::generator::GeneratedQuiz;
use crate::models::{Label, QuestionId, Verdict};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// The page a quiz is mounted on.
pub trait QuizSurface {
    fn render(&mut self, markup: &str) -> Result<(), SurfaceError>;
    fn clear_feedback(&mut self, question: QuestionId);
    fn set_feedback(&mut self, question: QuestionId, label: Label, text: &str);
    fn on_select(&mut self, handler: FeedbackHandler);
}

/// Renders the quiz and wires up its feedback handler. Returns `false` and
/// leaves the surface untouched when the container is missing.
pub fn mount<S: QuizSurface + ?Sized>(surface: &mut S, quiz: &GeneratedQuiz) -> bool {
    if let Err(err) = surface.render(&quiz.markup) {
        let diag = Diagnostic::from(&err);
        warn!(code = diag.code, "{}", diag.message);
        return false;
    }
    surface.on_select(FeedbackHandler::new(quiz.key.clone()));
    info!("mounted quiz with {} question(s)", quiz.questions.len());
    true
}

/// In-memory page: one named container plus the feedback slot texts.
#[derive(Debug)]
pub struct PageSurface {
    container_id: String,
    container_present: bool,
    content: Option<String>,
    slots: BTreeMap<(QuestionId, Label), String>,
    handler: Option<FeedbackHandler>,
}

impl PageSurface {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            container_present: true,
            content: None,
            slots: BTreeMap::new(),
            handler: None,
        }
    }

    /// A page that lacks the target container.
    pub fn detached(container_id: impl Into<String>) -> Self {
        Self {
            container_present: false,
            ..Self::new(container_id)
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn feedback(&self, question: QuestionId, label: Label) -> &str {
        self.slots
            .get(&(question, label))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_listening(&self) -> bool {
        self.handler.is_some()
    }

    /// Delivers a selection to the registered handler, as a change event
    /// bubbling up to the container would.
    pub fn dispatch(&mut self, event: &SelectionEvent) -> Option<Verdict> {
        let Some(handler) = self.handler.clone() else {
            debug!("selection on {} with no handler registered", event.group);
            return None;
        };
        handler.handle(self, event)
    }
}

impl QuizSurface for PageSurface {
    fn render(&mut self, markup: &str) -> Result<(), SurfaceError> {
        if !self.container_present {
            return Err(SurfaceError::MissingContainer {
                id: self.container_id.clone(),
            });
        }
        self.content = Some(markup.to_string());
        self.slots.clear();
        Ok(())
    }

    fn clear_feedback(&mut self, question: QuestionId) {
        self.slots.retain(|(id, _), _| *id != question);
    }

    fn set_feedback(&mut self, question: QuestionId, label: Label, text: &str) {
        self.slots.insert((question, label), text.to_string());
    }

    fn on_select(&mut self, handler: FeedbackHandler) {
        self.handler = Some(handler);
    }
}
