use crate::error::{Diagnostic, ParseError};
use crate::models::{AnswerOption, ParsedQuestion, QuestionId, OPTION_COUNT};
use tracing::warn;

pub const DEFAULT_PROMPT_PREFIX: &str = "question:";

/// Parses one two-line block. The first answer on the second line is the
/// correct one. The prefix is matched ASCII case-insensitively.
pub fn parse_block(id: QuestionId, raw: &str, prefix: &str) -> Result<ParsedQuestion, ParseError> {
    let lines: Vec<&str> = raw.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    if lines.len() != 2 {
        return Err(ParseError::WrongLineCount { found: lines.len() });
    }

    let question_line = lines[0].trim_start();
    let has_prefix = question_line
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
    if !has_prefix {
        return Err(ParseError::MissingPrefix {
            prefix: prefix.to_string(),
        });
    }
    let prompt = match question_line.split_once(':') {
        Some((_, rest)) => rest,
        None => &question_line[prefix.len()..],
    };

    let answers: Vec<&str> = lines[1].split(',').map(str::trim).collect();
    if answers.len() != OPTION_COUNT {
        return Err(ParseError::WrongOptionCount {
            found: answers.len(),
        });
    }

    Ok(ParsedQuestion {
        id,
        prompt: prompt.trim().to_string(),
        options: answers
            .iter()
            .enumerate()
            .map(|(i, text)| AnswerOption::new(*text, i == 0))
            .collect(),
    })
}

#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub questions: Vec<ParsedQuestion>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses every block, skipping malformed ones. Ids follow input position, so
/// a skipped block leaves a gap rather than shifting its successors.
pub fn parse_blocks<S: AsRef<str>>(blocks: &[S], prefix: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for (index, raw) in blocks.iter().enumerate() {
        let id = QuestionId::from_index(index);
        match parse_block(id, raw.as_ref(), prefix) {
            Ok(question) => outcome.questions.push(question),
            Err(err) => {
                warn!("skipping malformed question block {}: {}", id, err);
                outcome.diagnostics.push(Diagnostic::malformed_block(id, &err));
            }
        }
    }
    outcome
}
