use crate::error::Diagnostic;
use crate::models::{
    validate_question, AnswerKey, AnswerOption, Label, LabeledOption, ParsedQuestion, QuestionId,
    RenderedQuestion,
};
use crate::parse::{parse_blocks, DEFAULT_PROMPT_PREFIX};
use maud::{html, Markup};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub prompt_prefix: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub markup: String,
    pub key: Arc<AnswerKey>,
    pub questions: Vec<RenderedQuestion>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedQuiz {
    pub fn question(&self, id: QuestionId) -> Option<&RenderedQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Fisher-Yates over the options. `is_correct` moves with the text.
pub fn shuffle_options<R: Rng + ?Sized>(options: &mut [AnswerOption], rng: &mut R) {
    options.shuffle(rng);
}

/// Assigns a,b,c,d by final position and returns the label of the correct option.
pub fn label_question(question: ParsedQuestion) -> (RenderedQuestion, Option<Label>) {
    let options: Vec<LabeledOption> = question
        .options
        .into_iter()
        .zip(Label::ALL)
        .map(|(opt, label)| LabeledOption {
            label,
            text: opt.text,
            is_correct: opt.is_correct,
        })
        .collect();
    let correct = options.iter().find(|o| o.is_correct).map(|o| o.label);
    (
        RenderedQuestion {
            id: question.id,
            prompt: question.prompt,
            options,
        },
        correct,
    )
}

pub fn render_fragment(questions: &[RenderedQuestion]) -> Markup {
    html! {
        @for q in questions {
            @let id = q.id.to_string();
            div.question id=(id) {
                p.prompt { (q.prompt) }
                @for opt in &q.options {
                    div.option {
                        label {
                            input type="radio" name=(id) value=(opt.label.as_str());
                            " "
                            (opt.text)
                        }
                        " "
                        span.feedback data-label=(opt.label.as_str()) {}
                    }
                }
            }
        }
    }
}

/// Parses, shuffles and renders `blocks`. Malformed blocks are dropped and
/// reported through `GeneratedQuiz::diagnostics`.
pub fn generate<S, R>(blocks: &[S], options: &GenerateOptions, rng: &mut R) -> GeneratedQuiz
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let outcome = parse_blocks(blocks, &options.prompt_prefix);
    let mut quiz = assemble(outcome.questions, rng);
    let mut diagnostics = outcome.diagnostics;
    diagnostics.append(&mut quiz.diagnostics);
    quiz.diagnostics = diagnostics;
    quiz
}

/// Shuffles and renders already parsed questions. Questions that break the
/// four-options-one-correct invariant are skipped.
pub fn assemble<R: Rng + ?Sized>(questions: Vec<ParsedQuestion>, rng: &mut R) -> GeneratedQuiz {
    let mut key = AnswerKey::new();
    let mut rendered = Vec::with_capacity(questions.len());
    let mut diagnostics = Vec::new();

    for mut question in questions {
        if let Err(issues) = validate_question(&question) {
            warn!("skipping invalid question {}: {} issue(s)", question.id, issues.len());
            diagnostics.push(
                Diagnostic::new("INVALID_QUESTION", format!("skipped invalid question {}", question.id))
                    .for_question(question.id)
                    .with_details(issues),
            );
            continue;
        }
        shuffle_options(&mut question.options, rng);
        let (labeled, correct) = label_question(question);
        if let Some(label) = correct {
            key.insert(labeled.id, label);
        }
        rendered.push(labeled);
    }

    debug!("rendered {} question(s)", rendered.len());
    GeneratedQuiz {
        markup: render_fragment(&rendered).into_string(),
        key: Arc::new(key),
        questions: rendered,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "question: 2+2=?\n4, 3, 5, 2";

    fn sorted_texts<'a>(texts: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut v: Vec<_> = texts.collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn shuffle_is_permutation_and_flag_travels() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut options = vec![
                AnswerOption::new("4", true),
                AnswerOption::new("3", false),
                AnswerOption::new("5", false),
                AnswerOption::new("2", false),
            ];
            shuffle_options(&mut options, &mut rng);
            assert_eq!(
                sorted_texts(options.iter().map(|o| o.text.as_str())),
                ["2", "3", "4", "5"]
            );
            let correct: Vec<_> = options.iter().filter(|o| o.is_correct).collect();
            assert_eq!(correct.len(), 1);
            assert_eq!(correct[0].text, "4");
        }
    }

    #[test]
    fn shuffle_reaches_every_position() {
        let mut seen = [false; 4];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let quiz = generate(&[SAMPLE], &GenerateOptions::default(), &mut rng);
            let label = quiz.key.get(QuestionId::new(1)).unwrap();
            seen[Label::ALL.iter().position(|l| *l == label).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn key_points_at_correct_text() {
        let mut rng = StdRng::seed_from_u64(42);
        let quiz = generate(&[SAMPLE], &GenerateOptions::default(), &mut rng);
        let id = QuestionId::new(1);
        let label = quiz.key.get(id).unwrap();
        let q = quiz.question(id).unwrap();
        let opt = q.option(label).unwrap();
        assert_eq!(opt.text, "4");
        assert!(opt.is_correct);
        let labels: Vec<_> = q.options.iter().map(|o| o.label).collect();
        assert_eq!(labels, Label::ALL);
    }

    #[test]
    fn markup_has_container_radios_and_slots() {
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = generate(&[SAMPLE], &GenerateOptions::default(), &mut rng);
        let html = &quiz.markup;
        assert!(html.contains(r#"<div class="question" id="q1">"#));
        assert!(html.contains(r#"<p class="prompt">2+2=?</p>"#));
        for label in Label::ALL {
            assert!(html.contains(&format!(r#"<input type="radio" name="q1" value="{label}">"#)));
            assert!(html.contains(&format!(r#"<span class="feedback" data-label="{label}"></span>"#)));
        }
    }

    #[test]
    fn markup_escapes_text() {
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = generate(
            &["question: <b>bold</b>?\n<i>, &, x, y"],
            &GenerateOptions::default(),
            &mut rng,
        );
        assert!(quiz.markup.contains("&lt;b&gt;bold&lt;/b&gt;?"));
        assert!(quiz.markup.contains("&amp;"));
        assert!(!quiz.markup.contains("<i>"));
    }

    #[test]
    fn empty_answer_text_still_renders_and_is_keyed() {
        let mut rng = StdRng::seed_from_u64(4);
        let quiz = generate(&["question: x\n4, , 5, 2"], &GenerateOptions::default(), &mut rng);
        let id = QuestionId::new(1);
        assert!(quiz.diagnostics.is_empty());
        assert!(quiz.markup.contains(r#"id="q1""#));
        let label = quiz.key.get(id).unwrap();
        assert_eq!(quiz.question(id).unwrap().option(label).unwrap().text, "4");
        assert_eq!(quiz.question(id).unwrap().options.len(), 4);
    }

    #[test]
    fn malformed_block_leaves_neighbours_intact() {
        let blocks = [
            "question: one\na, b, c, d",
            "question: two\na, b, c",
            "question: three\nx, y, z, w",
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let quiz = generate(&blocks, &GenerateOptions::default(), &mut rng);
        assert_eq!(quiz.key.len(), 2);
        assert!(!quiz.key.contains(QuestionId::new(2)));
        assert!(!quiz.markup.contains(r#"id="q2""#));
        assert!(quiz.markup.contains(r#"id="q3""#));
        let third = quiz.question(QuestionId::new(3)).unwrap();
        assert_eq!(third.prompt, "three");
        assert_eq!(third.option(quiz.key.get(third.id).unwrap()).unwrap().text, "x");
        assert_eq!(quiz.diagnostics.len(), 1);
        assert_eq!(quiz.diagnostics[0].code, "WRONG_OPTION_COUNT");
    }

    #[test]
    fn assemble_rejects_invariant_violations() {
        let bad = ParsedQuestion {
            id: QuestionId::new(5),
            prompt: "two correct".into(),
            options: vec![
                AnswerOption::new("a", true),
                AnswerOption::new("b", true),
                AnswerOption::new("c", false),
                AnswerOption::new("d", false),
            ],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let quiz = assemble(vec![bad], &mut rng);
        assert!(quiz.key.is_empty());
        assert!(quiz.questions.is_empty());
        assert_eq!(quiz.diagnostics[0].code, "INVALID_QUESTION");
        assert!(!quiz.diagnostics[0].details.is_empty());
    }
}
