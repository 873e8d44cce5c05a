pub mod bank;
pub mod config;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod models;
pub mod page;
pub mod parse;
pub mod state;
pub mod surface;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn build_state(config: config::QuizConfig) -> anyhow::Result<state::QuizState> {
    let Some(bank) = bank::find_bank(&config.bank) else {
        let known: Vec<_> = bank::BANKS.iter().map(|b| b.slug).collect();
        anyhow::bail!("unknown question bank `{}` (known: {})", config.bank, known.join(", "));
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(state::QuizState::new(config, bank, &mut rng))
}
