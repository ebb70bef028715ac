//! Arena game client binary.
//!
//! Composition root: reads configuration, installs logging, builds the save
//! slot, content factory and RNGs, then hands stdin/stdout to the menu loop.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use arena_client::{App, ClientConfig, logging};
use arena_content::ContentFactory;
use arena_core::PcgRng;
use runtime::FileEncounterRepository;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.log_dir, config.session_id.as_deref())?;
    for key in &config.ignored {
        tracing::warn!("{} is set but could not be parsed; using the default", key);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting arena client (seed {})", seed);

    let store = FileEncounterRepository::new(&config.save_dir).with_context(|| {
        format!("Failed to open save directory {}", config.save_dir.display())
    })?;
    tracing::info!("Save slot: {}", store.path().display());

    let mut content = ContentFactory::new(&config.characters_file);
    if let Some(rules_file) = &config.rules_file {
        content = content.with_rules(rules_file);
    }
    let rules = content.load_rules()?;

    let mut app = App::new(
        store,
        content,
        rules,
        PcgRng::new(seed),
        StdRng::seed_from_u64(seed),
    );

    println!("Welcome to the arena!");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;

    tracing::info!("Client exited");
    Ok(())
}
