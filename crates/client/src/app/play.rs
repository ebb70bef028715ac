//! Turn loop for one encounter.

use std::io::{BufRead, Write};

use anyhow::Result;

use arena_core::{BattleEvent, Phase, RngOracle, Side};
use runtime::{EncounterRepository, SaveReceipt, Session};

use super::prompt::prompt;

/// Where control goes once an encounter stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Menu,
    Quit,
}

pub(super) fn play<S, R, I, O>(session: &mut Session<S, R>, input: &mut I, out: &mut O) -> Result<Flow>
where
    S: EncounterRepository,
    R: RngOracle,
    I: BufRead,
    O: Write,
{
    // A resumed encounter may already be decided.
    if let Some(victor) = session.victor() {
        return finish(session, victor, out);
    }

    loop {
        let encounter = session.encounter();
        writeln!(out, "Turn {}:", encounter.turn())?;
        writeln!(out, "Your character: {}", encounter.player())?;
        writeln!(out, "Enemy character: {}", encounter.enemy())?;

        let Some(action) = prompt(input, out, "Choose action (attack/defend/save): ")? else {
            return Ok(Flow::Quit);
        };

        let step = session.submit(&action)?;
        if !step.report.recognized() {
            writeln!(out, "Invalid action. Skipping turn.")?;
        }
        for event in &step.report.events {
            writeln!(out, "{event}")?;
            // The history line leaves out the amount.
            if let BattleEvent::Braced { defender, .. } = event {
                writeln!(out, "{defender} took {:.2} damage in total.", event.vitality_loss())?;
            }
        }

        match step.report.phase {
            Phase::Suspended => {
                match step.save {
                    Some(SaveReceipt::Failed(message)) => {
                        writeln!(out, "Failed to save the game: {message}")?;
                        writeln!(out, "Returning to the main menu...")?;
                    }
                    _ => {
                        writeln!(out, "Game state saved successfully!")?;
                        writeln!(out, "Game saved! Returning to the main menu...")?;
                    }
                }
                return Ok(Flow::Menu);
            }
            Phase::Ended(victor) => return finish(session, victor, out),
            _ => {}
        }
    }
}

fn finish<S, R, O>(session: &Session<S, R>, victor: Side, out: &mut O) -> Result<Flow>
where
    S: EncounterRepository,
    R: RngOracle,
    O: Write,
{
    match victor {
        Side::Player => writeln!(out, "You won!")?,
        Side::Enemy => writeln!(out, "You lost!")?,
    }

    writeln!(out, "Game history:")?;
    for entry in session.encounter().history() {
        writeln!(out, "{entry}")?;
    }

    Ok(Flow::Menu)
}
