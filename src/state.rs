use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::feedback::SelectionEvent;
use crate::generator::{generate, GeneratedQuiz};
use crate::models::Verdict;
use crate::page::render_page;
use crate::surface::{mount, PageSurface};
use rand::Rng;
use std::path::Path;
use tracing::{info, warn};

/// One study page: the generated quiz mounted on its surface.
#[derive(Debug)]
pub struct QuizState {
    pub config: QuizConfig,
    pub bank: &'static QuestionBank,
    pub quiz: GeneratedQuiz,
    pub page: PageSurface,
    pub mounted: bool,
}

impl QuizState {
    pub fn new<R: Rng + ?Sized>(config: QuizConfig, bank: &'static QuestionBank, rng: &mut R) -> Self {
        let quiz = generate(bank.blocks, &config.generate_options(), rng);
        for diag in &quiz.diagnostics {
            warn!(code = diag.code, "{}", diag.message);
        }
        let mut page = PageSurface::new(config.container_id.clone());
        let mounted = mount(&mut page, &quiz);
        if !mounted {
            warn!("quiz for {} was not mounted, page will be empty", bank.slug);
        }
        info!(
            "built {} quiz: {} of {} question(s) rendered",
            bank.slug,
            quiz.questions.len(),
            bank.blocks.len()
        );
        Self {
            config,
            bank,
            quiz,
            page,
            mounted,
        }
    }

    pub fn select(&mut self, event: &SelectionEvent) -> Option<Verdict> {
        self.page.dispatch(event)
    }

    pub fn page_html(&self) -> String {
        render_page(
            self.bank.title,
            self.page.container_id(),
            self.page.content().unwrap_or_default(),
        )
    }

    pub async fn write_page(&self) -> anyhow::Result<()> {
        write_file(&self.config.output_path, self.page_html().into_bytes()).await?;
        info!("wrote quiz page to {}", self.config.output_path.display());
        Ok(())
    }

    pub async fn write_answer_key(&self) -> anyhow::Result<()> {
        let Some(path) = self.config.key_path.as_ref() else {
            return Ok(());
        };
        let serialized = serde_json::to_vec_pretty(&*self.quiz.key)?;
        write_file(path, serialized).await?;
        info!("wrote answer key to {}", path.display());
        Ok(())
    }
}

async fn write_file(path: &Path, contents: Vec<u8>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::HEMATOLOGY;
    use crate::models::{Label, QuestionId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn state_mounts_bank_and_grades() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = QuizState::new(QuizConfig::default(), &HEMATOLOGY, &mut rng);
        assert!(state.mounted);
        assert_eq!(state.quiz.questions.len(), HEMATOLOGY.blocks.len());
        assert!(state.quiz.diagnostics.is_empty());

        let id = QuestionId::new(2);
        let right = state.quiz.key.get(id).unwrap();
        let wrong = Label::ALL.into_iter().find(|l| *l != right).unwrap();
        assert_eq!(state.select(&SelectionEvent::select(id, wrong)), Some(Verdict::Wrong));
        assert_eq!(state.select(&SelectionEvent::select(id, right)), Some(Verdict::Correct));
        assert_eq!(state.page.feedback(id, wrong), "");

        let html = state.page_html();
        assert!(html.contains(r#"<form id="quiz">"#));
        assert!(html.contains("120 days"));
    }

    #[tokio::test]
    async fn writes_page_and_key() {
        let dir = std::env::temp_dir().join(format!("medlab-quiz-state-{}", std::process::id()));
        let config = QuizConfig {
            output_path: dir.join("page.html"),
            key_path: Some(dir.join("key.json")),
            ..QuizConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(8);
        let state = QuizState::new(config, &HEMATOLOGY, &mut rng);
        state.write_page().await.unwrap();
        state.write_answer_key().await.unwrap();

        let page = tokio::fs::read_to_string(dir.join("page.html")).await.unwrap();
        assert!(page.contains("<h1>Hematology</h1>"));
        let key: crate::models::AnswerKey =
            serde_json::from_slice(&tokio::fs::read(dir.join("key.json")).await.unwrap()).unwrap();
        assert_eq!(&key, &*state.quiz.key);
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
