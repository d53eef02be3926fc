//! Line-oriented command input: one JSON `PlayerCommand` per line.

use std::io::BufRead;
use std::sync::mpsc;

use skyguard_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// Parse commands from `reader` and forward them to the game loop until the
/// input ends or the loop goes away. Blank lines are skipped and malformed
/// lines are logged and dropped. Returns the number of commands forwarded.
pub fn forward_commands(reader: impl BufRead, tx: &mpsc::Sender<GameLoopCommand>) -> usize {
    let mut forwarded = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "command input closed");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if tx.send(GameLoopCommand::Command(command)).is_err() {
                    break;
                }
                forwarded += 1;
            }
            Err(e) => tracing::warn!(error = %e, line, "ignoring malformed command"),
        }
    }
    forwarded
}
