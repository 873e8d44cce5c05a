use crate::generator::GenerateOptions;
use crate::parse::DEFAULT_PROMPT_PREFIX;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_BANK: &str = "hematology";
pub const DEFAULT_CONTAINER_ID: &str = "quiz";
pub const DEFAULT_OUTPUT_PATH: &str = "quiz.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub bank: String,
    pub container_id: String,
    pub prompt_prefix: String,
    pub seed: Option<u64>,
    pub output_path: PathBuf,
    pub key_path: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank: DEFAULT_BANK.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
            seed: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            key_path: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let seed = var("QUIZ_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!("ignoring QUIZ_SEED={}: {}", raw, err);
                None
            }
        });

        Self {
            bank: var("QUIZ_BANK")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.bank),
            container_id: var("QUIZ_CONTAINER_ID")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.container_id),
            prompt_prefix: var("QUIZ_PROMPT_PREFIX").unwrap_or(defaults.prompt_prefix),
            seed,
            output_path: var("QUIZ_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            key_path: var("QUIZ_KEY_PATH").map(PathBuf::from),
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            prompt_prefix: self.prompt_prefix.clone(),
        }
    }
}
