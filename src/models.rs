use crate::error::GradeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const OPTION_COUNT: usize = 4;

/// Position of a block in its input sequence, 1-based, rendered as `q<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct QuestionId(usize);

impl QuestionId {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix('q')
            .filter(|n| {
                !n.is_empty() && !n.starts_with('0') && n.bytes().all(|b| b.is_ascii_digit())
            })
            .and_then(|n| n.parse::<usize>().ok())
            .map(Self)
            .ok_or_else(|| format!("invalid question id `{s}`"))
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for QuestionId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    pub const ALL: [Label; OPTION_COUNT] = [Label::A, Label::B, Label::C, Label::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::A => "a",
            Label::B => "b",
            Label::C => "c",
            Label::D => "d",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Label::A),
            "b" => Ok(Label::B),
            "c" => Ok(Label::C),
            "d" => Ok(Label::D),
            _ => Err(format!("invalid label `{s}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl ParsedQuestion {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOption {
    pub label: Label,
    pub text: String,
    pub is_correct: bool,
}

/// A question after shuffling, options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<LabeledOption>,
}

impl RenderedQuestion {
    pub fn option(&self, label: Label) -> Option<&LabeledOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Correct,
    Wrong,
}

impl Verdict {
    pub fn feedback_text(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::Wrong => "Wrong",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(BTreeMap<QuestionId, Label>);

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, label: Label) {
        self.0.insert(id, label);
    }

    pub fn get(&self, id: QuestionId) -> Option<Label> {
        self.0.get(&id).copied()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Label)> + '_ {
        self.0.iter().map(|(id, label)| (*id, *label))
    }

    pub fn grade(&self, id: QuestionId, chosen: Label) -> Result<Verdict, GradeError> {
        let expected = self
            .get(id)
            .ok_or(GradeError::MissingAnswerKeyEntry { id })?;
        Ok(if expected == chosen {
            Verdict::Correct
        } else {
            Verdict::Wrong
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub issue: String,
}

pub fn validate_question(question: &ParsedQuestion) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();
    if question.options.len() != OPTION_COUNT {
        issues.push(ValidationIssue {
            field: "options".into(),
            issue: format!("must contain exactly {OPTION_COUNT} options"),
        });
    }
    let correct = question.options.iter().filter(|o| o.is_correct).count();
    if correct != 1 {
        issues.push(ValidationIssue {
            field: "options".into(),
            issue: format!("must mark exactly one option correct, found {correct}"),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
