//! Interactive play mode
//!
//! Line-oriented game loop. Numeric shortcuts follow the classic layout:
//! 0 exit, 1 restart, 2 undo, 3 hint.

use crate::game::{GameState, MoveOutcome};
use crate::output::formatters::{format_ladder, highlight_change};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Quit,
    Restart,
    Undo,
    Hint,
    NewGame,
    Move(String),
    UnknownCode(String),
}

impl PlayCommand {
    /// Parse one input line
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "0" | "quit" | "q" | "exit" => Self::Quit,
            "1" | "restart" | "r" => Self::Restart,
            "2" | "undo" | "u" => Self::Undo,
            "3" | "hint" | "h" => Self::Hint,
            "new" | "n" => Self::NewGame,
            code if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) => {
                Self::UnknownCode(code.to_string())
            }
            _ => Self::Move(input.to_string()),
        }
    }
}

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_won: usize,
    pub quit: bool,
}

/// Run the interactive loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R, W, G>(
    game: &mut GameState<'_>,
    rng: &mut G,
    mut input: R,
    out: &mut W,
) -> io::Result<PlaySummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Weaver - Play Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Change one letter at a time to turn the start word into the target.")?;
    writeln!(out, "Every step must be a dictionary word.\n")?;

    let mut games_won = 0;

    loop {
        print_status(game, out)?;

        let Some(line) = prompt(&mut input, out, "Enter a word or command")? else {
            return Ok(PlaySummary {
                games_won,
                quit: false,
            });
        };

        match PlayCommand::parse(&line) {
            PlayCommand::Quit => {
                writeln!(out, "\n👋 Exiting the game.\n")?;
                return Ok(PlaySummary {
                    games_won,
                    quit: true,
                });
            }
            PlayCommand::Restart => {
                game.restart_game();
                writeln!(out, "🔄 Restarting the game...")?;
            }
            PlayCommand::Undo => {
                if game.undo_move().is_some() {
                    writeln!(out, "✓ The last move has been undone.")?;
                } else {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            PlayCommand::Hint => match game.hint_from_current() {
                Some(path) => writeln!(out, "💡 Path hint: {}", format_ladder(&path))?,
                None => writeln!(out, "{}", "No path found.".yellow())?,
            },
            PlayCommand::NewGame => {
                game.new_game(rng);
                writeln!(out, "\n🔄 New game started!")?;
            }
            PlayCommand::UnknownCode(code) => {
                writeln!(out, "❌ Invalid numeric command: {code}")?;
            }
            PlayCommand::Move(word) => {
                let previous = game.current_word().clone();
                match game.make_move(&word) {
                    Ok(MoveOutcome::Valid) => {
                        writeln!(
                            out,
                            "✓ {}",
                            highlight_change(previous.text(), game.current_word().text())
                        )?;
                    }
                    Ok(MoveOutcome::Won) => {
                        games_won += 1;
                        print_win(game, out)?;

                        let again = prompt(&mut input, out, "Play again? (yes/no)")?
                            .unwrap_or_default()
                            .to_lowercase();
                        if matches!(again.as_str(), "yes" | "y") {
                            game.new_game(rng);
                            writeln!(out, "\n🔄 New game started!")?;
                        } else {
                            writeln!(out, "\n👋 Thanks for playing!\n")?;
                            return Ok(PlaySummary {
                                games_won,
                                quit: false,
                            });
                        }
                    }
                    Err(error) => {
                        writeln!(out, "❌ Invalid operation: {}", error.to_string().red())?;
                    }
                }
            }
        }
    }
}

fn print_status<W: Write>(game: &GameState<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Start: {}   Target: {}   Current: {}",
        game.start_word().text().to_uppercase().bright_white().bold(),
        game.target_word().text().to_uppercase().bright_green().bold(),
        game.current_word().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "Moves: {}", game.move_count())?;
    if !game.status_message().is_empty() {
        writeln!(out, "Status: {}", game.status_message())?;
    }
    writeln!(out, "Commands: 0 exit, 1 restart, 2 undo, 3 hint, 'new' for a new game")?;
    Ok(())
}

fn print_win<W: Write>(game: &GameState<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "      🎉  Congratulations, you win!  🎉      ".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    let moves = game.move_count();
    writeln!(
        out,
        "\n  Solved in {} {}",
        moves.to_string().bright_cyan().bold(),
        if moves == 1 { "move" } else { "moves" }
    )?;
    writeln!(out, "  {}", game.start_word().text().to_uppercase())?;
    let mut previous = game.start_word().text();
    for word in game.move_history() {
        writeln!(out, "  {}", highlight_change(previous, word.text()))?;
        previous = word.text();
    }
    writeln!(out)?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::WordIndex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(index: &WordIndex, start: &str, target: &str, script: &str) -> (PlaySummary, String) {
        let mut game =
            GameState::with_words(index, Word::new(start).unwrap(), Word::new(target).unwrap());
        let mut rng = StdRng::seed_from_u64(0);
        let mut out = Vec::new();
        let summary = run_play(&mut game, &mut rng, Cursor::new(script), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(PlayCommand::parse("0"), PlayCommand::Quit);
        assert_eq!(PlayCommand::parse(" QUIT "), PlayCommand::Quit);
        assert_eq!(PlayCommand::parse("1"), PlayCommand::Restart);
        assert_eq!(PlayCommand::parse("2"), PlayCommand::Undo);
        assert_eq!(PlayCommand::parse("3"), PlayCommand::Hint);
        assert_eq!(PlayCommand::parse("new"), PlayCommand::NewGame);
        assert_eq!(PlayCommand::parse("42"), PlayCommand::UnknownCode("42".to_string()));
        assert_eq!(PlayCommand::parse("Ward"), PlayCommand::Move("Ward".to_string()));
    }

    #[test]
    fn winning_session() {
        let index = WordIndex::embedded();
        let (summary, output) = play(&index, "wast", "west", "wast\nwest\nno\n");

        assert_eq!(summary, PlaySummary { games_won: 1, quit: false });
        assert!(output.contains("No change!"));
        assert!(output.contains("Congratulations, you win!"));
    }

    #[test]
    fn quit_command_stops_loop() {
        let index = WordIndex::embedded();
        let (summary, output) = play(&index, "cold", "warm", "cord\n2\n0\n");

        assert_eq!(summary, PlaySummary { games_won: 0, quit: true });
        assert!(output.contains("The last move has been undone."));
        assert!(output.contains("Exiting the game."));
    }

    #[test]
    fn hint_prints_ladder() {
        let index = WordIndex::from_words(["word", "ward", "wars", "cars"]);
        let (_, output) = play(&index, "word", "cars", "hint\n");
        assert!(output.contains("Path hint:"));
        assert_eq!(output.matches(" -> ").count(), 3);
    }

    #[test]
    fn invalid_moves_are_reported() {
        let index = WordIndex::embedded();
        let (summary, output) = play(&index, "cold", "warm", "warm\nzzzz\n7\n");

        assert_eq!(summary.games_won, 0);
        assert!(output.contains("Must change only one letter at a time!"));
        assert!(output.contains("Invalid numeric command: 7"));
    }

    #[test]
    fn play_again_starts_new_game() {
        let index = WordIndex::embedded();
        let (summary, output) = play(&index, "wast", "west", "west\ny\nq\n");

        assert_eq!(summary, PlaySummary { games_won: 1, quit: true });
        assert!(output.contains("New game started!"));
    }
}
