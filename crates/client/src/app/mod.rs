//! Text-menu front-end.
//!
//! Generic over the input and output streams so a whole session can be driven
//! from a string in tests.

mod play;
mod prompt;

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use arena_content::{ContentFactory, RulesFile, choose_opponent};
use arena_core::{Encounter, RngOracle};
use runtime::{EncounterRepository, Restore, Session, restore};

use play::{Flow, play};
use prompt::prompt;

/// Main menu loop bound to one save slot.
pub struct App<S, R, G> {
    store: S,
    content: ContentFactory,
    rules: RulesFile,
    combat_rng: R,
    roster_rng: G,
}

impl<S, R, G> App<S, R, G>
where
    S: EncounterRepository,
    R: RngOracle,
    G: Rng,
{
    pub fn new(store: S, content: ContentFactory, rules: RulesFile, combat_rng: R, roster_rng: G) -> Self {
        Self {
            store,
            content,
            rules,
            combat_rng,
            roster_rng,
        }
    }

    /// Runs until the player quits or input ends.
    pub fn run<I, O>(&mut self, input: &mut I, out: &mut O) -> Result<()>
    where
        I: BufRead,
        O: Write,
    {
        loop {
            writeln!(out, "1. Start new game")?;
            writeln!(out, "2. Load saved game")?;
            writeln!(out, "3. Quit")?;

            let Some(choice) = prompt(input, out, "Choose an option: ")? else {
                return Ok(());
            };

            let encounter = match choice.as_str() {
                "1" => self.new_encounter(input, out)?,
                "2" => self.load_encounter(input, out)?,
                "3" => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(out, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            let Some(encounter) = encounter else {
                continue;
            };

            let mut session = Session::new(
                encounter,
                self.rules.combat.clone(),
                &self.store,
                &mut self.combat_rng,
            );
            if play(&mut session, input, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn load_encounter<I, O>(&mut self, input: &mut I, out: &mut O) -> Result<Option<Encounter>>
    where
        I: BufRead,
        O: Write,
    {
        match restore(&self.store) {
            Restore::Loaded(encounter) => {
                writeln!(out, "Game state loaded successfully!")?;
                Ok(Some(encounter))
            }
            Restore::Missing => {
                writeln!(out, "No saved game found. Starting a new game.")?;
                self.new_encounter(input, out)
            }
            Restore::Unavailable(e) => {
                writeln!(out, "Saved game could not be loaded ({e}). Starting a new game.")?;
                self.new_encounter(input, out)
            }
        }
    }

    /// Rolls a roster, asks for the player's pick, draws an opponent.
    ///
    /// `None` sends the player back to the main menu.
    fn new_encounter<I, O>(&mut self, input: &mut I, out: &mut O) -> Result<Option<Encounter>>
    where
        I: BufRead,
        O: Write,
    {
        let mut roster = self
            .content
            .roll_roster(&self.rules.stats, &mut self.roster_rng)?;

        if roster.len() < 2 {
            writeln!(
                out,
                "Not enough characters in {} to start a game.",
                self.content.catalog_path().display()
            )?;
            return Ok(None);
        }

        writeln!(out, "Choose your character:")?;
        for (index, combatant) in roster.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, combatant)?;
        }

        let player = loop {
            let Some(line) = prompt(input, out, "Enter character number: ")? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=roster.len()).contains(&n) => break n - 1,
                _ => writeln!(out, "Enter a number from 1 to {}.", roster.len())?,
            }
        };

        let enemy = choose_opponent(&roster, player, &mut self.roster_rng)?;
        // Remove the higher index first so the lower one stays valid.
        let (player, enemy) = if player > enemy {
            let p = roster.swap_remove(player);
            (p, roster.swap_remove(enemy))
        } else {
            let e = roster.swap_remove(enemy);
            (roster.swap_remove(player), e)
        };

        writeln!(out, "You chose {}. Your enemy is {}.", player.name(), enemy.name())?;
        tracing::info!("New encounter: {} vs {}", player.name(), enemy.name());

        Ok(Some(Encounter::new(player, enemy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_content::{StatRange, StatRanges};
    use arena_core::ScriptedRng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use runtime::InMemoryEncounterRepo;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Every roll is fixed: 40 health, 20 damage, 5 armor, 0 resist.
    fn flat_rules() -> RulesFile {
        RulesFile {
            stats: StatRanges {
                health: StatRange::new(40, 40),
                damage: StatRange::new(20, 20),
                armor: StatRange::new(5, 5),
                resist: StatRange::new(0.0, 0.0),
            },
            ..RulesFile::default()
        }
    }

    fn catalog(dir: &TempDir, body: &str) -> ContentFactory {
        let path = dir.path().join("characters.json");
        std::fs::write(&path, body).unwrap();
        ContentFactory::new(path)
    }

    fn run(app: &mut App<&InMemoryEncounterRepo, ScriptedRng, StdRng>, script: &str) -> String {
        let mut out = Vec::new();
        app.run(&mut Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn new_game_played_to_defeat() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::new();
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}, {"name": "Itto"}]"#),
            flat_rules(),
            ScriptedRng::new([0.5]),
            StdRng::seed_from_u64(1),
        );

        // Each side hits for 15; the opponent's hit lands twice.
        let text = run(&mut app, "1\n1\nattack\nattack\n3\n");

        assert!(text.contains("You chose Ayato. Your enemy is Itto."));
        assert!(text.contains("Turn 1:"));
        assert!(text.contains("Ayato attacked Itto for 15.00 damage."));
        assert!(text.contains("You lost!"));
        assert!(text.contains("Game history:"));
        assert!(text.contains("Goodbye!"));
        assert!(!store.exists());
    }

    #[test]
    fn save_then_resume() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::new();
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}, {"name": "Itto"}]"#),
            flat_rules(),
            ScriptedRng::new([0.5]),
            StdRng::seed_from_u64(1),
        );

        // Resumed at 40 each: "dance" costs Itto 30, the attack turn finishes
        // Itto off, and "3" quits from the menu.
        let text = run(&mut app, "1\n2\nsave\n2\ndance\nattack\n3\n");

        assert!(text.contains("You chose Itto. Your enemy is Ayato."));
        assert!(text.contains("Game saved! Returning to the main menu..."));
        assert!(text.contains("Game state loaded successfully!"));
        assert_eq!(text.matches("Invalid action. Skipping turn.").count(), 1);
        assert!(text.contains("Itto attacked Ayato for 15.00 damage."));
        assert!(text.contains("Ayato attacked Itto for 15.00 damage."));
        assert!(text.contains("You lost!"));
        assert!(text.ends_with("Goodbye!\n"));

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.turn(), 1);
        assert_eq!(saved.player().name(), "Itto");
    }

    #[test]
    fn failed_dodge_reports_total_damage() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::new();
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}, {"name": "Itto"}]"#),
            flat_rules(),
            // Dodge fails, lowest recovery, lowest counter.
            ScriptedRng::new([0.9, 0.0, 0.0]),
            StdRng::seed_from_u64(1),
        );

        let text = run(&mut app, "1\n1\ndefend\n3\n");

        assert!(text.contains("Ayato reduced the damage from Itto's attack."));
        assert!(text.contains("Ayato took 22.50 damage in total."));
        assert!(text.contains("Ayato defended and recovered 10 health."));
        assert!(text.contains("Ayato counter-attacked Itto for 10.00 damage."));
        // 40 - 22.5 + 10 - 30 leaves Ayato below zero.
        assert!(text.contains("You lost!"));
        // Shown once during the turn, never replayed from history.
        assert_eq!(text.matches("took 22.50 damage").count(), 1);
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn load_without_save_starts_new_game() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::new();
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}, {"name": "Itto"}]"#),
            flat_rules(),
            ScriptedRng::new([0.5]),
            StdRng::seed_from_u64(1),
        );

        let text = run(&mut app, "2\n1\n");

        assert!(text.contains("No saved game found. Starting a new game."));
        assert!(text.contains("Choose your character:"));
    }

    #[test]
    fn corrupt_save_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::from_raw("{ nope");
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}, {"name": "Itto"}]"#),
            flat_rules(),
            ScriptedRng::new([0.5]),
            StdRng::seed_from_u64(1),
        );

        let text = run(&mut app, "2\n3\n");

        assert!(text.contains("Saved game could not be loaded"));
        assert!(text.contains("Starting a new game."));
    }

    #[test]
    fn tiny_catalog_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::new();
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}]"#),
            flat_rules(),
            ScriptedRng::new([0.5]),
            StdRng::seed_from_u64(1),
        );

        let text = run(&mut app, "1\nx\n3\n");

        assert!(text.contains("Not enough characters"));
        assert!(text.contains("Invalid choice. Please try again."));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn bad_character_number_reprompts() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryEncounterRepo::new();
        let mut app = App::new(
            &store,
            catalog(&dir, r#"[{"name": "Ayato"}, {"name": "Itto"}]"#),
            flat_rules(),
            ScriptedRng::new([0.5]),
            StdRng::seed_from_u64(1),
        );

        let text = run(&mut app, "1\n0\nthree\n2\n");

        assert_eq!(text.matches("Enter a number from 1 to 2.").count(), 2);
        assert!(text.contains("You chose Itto."));
    }
}
