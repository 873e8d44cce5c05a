use medlab_quiz::config::QuizConfig;
use medlab_quiz::feedback::SelectionEvent;
use medlab_quiz::build_state;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut state = build_state(QuizConfig::from_env())?;
    if !state.mounted {
        anyhow::bail!("container `{}` missing, nothing to write", state.config.container_id);
    }
    state.write_page().await?;
    if let Err(err) = state.write_answer_key().await {
        tracing::warn!("failed to write answer key: {}", err);
    }

    // Each stdin line is one selection: `<question-id> <label>`.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let (Some(group), Some(value)) = (parts.next(), parts.next()) else {
            if !line.trim().is_empty() {
                tracing::warn!("expected `<question-id> <label>`, got {:?}", line);
            }
            continue;
        };
        let event = SelectionEvent::new(group, value);
        match state.select(&event) {
            Some(verdict) => println!("{} {}: {}", event.group, event.value, verdict.feedback_text()),
            None => println!("{} {}: -", event.group, event.value),
        }
    }
    Ok(())
}
