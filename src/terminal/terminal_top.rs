//! Line-oriented terminal front-end.
//!
//! Stands in for a graphical board: it feeds `(from, to)` requests to
//! `ChessGame` and prints the board, destinations, status and move log.
//! Diagnostics go out as `info ...` lines on the same sink.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::game::chess_game::{ChessGame, GameStatus, MoveOutcome};
use crate::game_state::board::SquareSet;
use crate::game_state::chess_rules::{PawnCaptureRule, RulesConfig, SelfCheckPolicy};
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::utils::algebraic::{parse_square, square_to_algebraic};
use crate::utils::random_mover::choose_random_move;
use crate::utils::render_game_state::{render_board, render_game_state};

pub const PAWN_CAPTURES_ENV: &str = "PLUM_PAWN_CAPTURES";
pub const SELF_CHECK_ENV: &str = "PLUM_SELF_CHECK";

const HELP_LINES: &[&str] = &[
    "board                 show the board",
    "move <from> <to>      play a move (squares as e2 or 52); also '<from> <to>' or 'e2e4'",
    "moves <sq>            pseudo-legal destinations",
    "legal <sq>            destinations that keep the king safe",
    "status                side to move and check state",
    "log                   accepted moves",
    "fen                   current position as FEN",
    "position <fen>        load a position",
    "random                play a random safe move for the side to move",
    "reset                 start a new game",
    "quit                  leave",
];

/// Build the rule set from environment values, then command-line flags.
pub fn parse_rules_config(
    args: &[String],
    env: impl Fn(&str) -> Option<String>,
) -> Result<RulesConfig, ChessError> {
    let mut rules = RulesConfig::default();

    if let Some(value) = env(PAWN_CAPTURES_ENV) {
        rules.pawn_captures = match value.to_ascii_lowercase().as_str() {
            "edge" | "checked" => PawnCaptureRule::EdgeChecked,
            "wrap" | "wraparound" => PawnCaptureRule::WrapAround,
            _ => {
                return Err(ChessError::InvalidConfig(format!(
                    "{PAWN_CAPTURES_ENV}={value}"
                )))
            }
        };
    }
    if let Some(value) = env(SELF_CHECK_ENV) {
        rules.self_check = match value.to_ascii_lowercase().as_str() {
            "permit" => SelfCheckPolicy::Permit,
            "reject" => SelfCheckPolicy::Reject,
            _ => return Err(ChessError::InvalidConfig(format!("{SELF_CHECK_ENV}={value}"))),
        };
    }

    for arg in args {
        match arg.as_str() {
            "--compatible" => rules = RulesConfig::compatible(),
            "--strict" => rules = RulesConfig::strict(),
            "--wrap-pawn-captures" => rules.pawn_captures = PawnCaptureRule::WrapAround,
            "--edge-pawn-captures" => rules.pawn_captures = PawnCaptureRule::EdgeChecked,
            "--reject-self-check" => rules.self_check = SelfCheckPolicy::Reject,
            "--permit-self-check" => rules.self_check = SelfCheckPolicy::Permit,
            other => return Err(ChessError::InvalidConfig(format!("unknown flag {other}"))),
        }
    }

    Ok(rules)
}

pub fn run_stdio_loop(rules: RulesConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut terminal = TerminalState::new(rules);

    terminal.write_board(&mut stdout, SquareSet::EMPTY)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalState {
    game: ChessGame,
    rng: StdRng,
}

impl TerminalState {
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            game: ChessGame::new(rules),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(rules: RulesConfig, seed: u64) -> Self {
        Self {
            game: ChessGame::new(rules),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    /// Handle one input line. Returns `Ok(true)` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let result: Result<(), ChessError> = match tokens[0].to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(true),
            "help" => {
                for line in HELP_LINES {
                    writeln!(out, "{line}")?;
                }
                Ok(())
            }
            "board" => {
                self.write_board(out, SquareSet::EMPTY)?;
                Ok(())
            }
            "move" => match parse_move_tokens(&tokens[1..]) {
                Ok((from, to)) => {
                    self.play(from, to, out)?;
                    Ok(())
                }
                Err(err) => Err(err),
            },
            "moves" | "legal" => match tokens.get(1).map(|t| parse_square(t)) {
                Some(Ok(square)) => {
                    let filtered = tokens[0].eq_ignore_ascii_case("legal");
                    self.write_destinations(square, filtered, out)?;
                    Ok(())
                }
                Some(Err(err)) => Err(err),
                None => Err(ChessError::InvalidCommand(format!("{} needs a square", tokens[0]))),
            },
            "status" => {
                self.write_status(out)?;
                Ok(())
            }
            "log" => {
                if self.game.move_log().is_empty() {
                    writeln!(out, "info log empty")?;
                }
                for record in self.game.move_log().iter() {
                    writeln!(out, "{record}")?;
                }
                Ok(())
            }
            "fen" => {
                writeln!(out, "{}", self.game.state().get_fen())?;
                Ok(())
            }
            "position" => {
                let fen = trimmed[tokens[0].len()..].trim();
                match ChessGame::from_fen(fen, *self.game.rules()) {
                    Ok(game) => {
                        self.game = game;
                        writeln!(out, "info position loaded")?;
                        self.write_board(out, SquareSet::EMPTY)?;
                        self.write_status(out)?;
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            "random" => {
                self.play_random(out)?;
                Ok(())
            }
            "reset" => {
                self.game.reset();
                writeln!(out, "info new game")?;
                self.write_board(out, SquareSet::EMPTY)?;
                Ok(())
            }
            _ => match parse_move_tokens(&tokens) {
                Ok((from, to)) => {
                    self.play(from, to, out)?;
                    Ok(())
                }
                Err(_) => Err(ChessError::InvalidCommand(format!(
                    "unknown command '{}'",
                    tokens[0]
                ))),
            },
        };

        if let Err(err) = result {
            writeln!(out, "info error: {err}")?;
        }
        Ok(false)
    }

    fn play(&mut self, from: Square, to: Square, out: &mut impl Write) -> io::Result<()> {
        let outcome = self.game.apply_move(from, to);
        self.write_outcome(from, to, &outcome, out)
    }

    fn play_random(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.game.status().is_terminal() {
            return writeln!(out, "info game is over");
        }
        let side = self.game.side_to_move();
        let rules = *self.game.rules();
        let mut board = *self.game.board();
        match choose_random_move(&mut board, side, &rules, &mut self.rng) {
            Some(mv) => self.play(mv.from, mv.to, out),
            None => writeln!(out, "info no safe move for {}", side.name()),
        }
    }

    fn write_outcome(
        &mut self,
        from: Square,
        to: Square,
        outcome: &MoveOutcome,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if !outcome.accepted {
            let reason = outcome.rejection.map_or("refused", |r| r.describe());
            return writeln!(out, "info rejected {}-{}: {reason}", name(from), name(to));
        }

        match outcome.captured {
            Some(piece) => writeln!(out, "ok {}-{} x{}", name(from), name(to), piece.glyph())?,
            None => writeln!(out, "ok {}-{}", name(from), name(to))?,
        }
        self.write_board(out, SquareSet::EMPTY)?;
        self.write_status(out)
    }

    fn write_board(&self, out: &mut impl Write, highlight: SquareSet) -> io::Result<()> {
        let rendered = if highlight.is_empty() {
            render_game_state(self.game.state())
        } else {
            render_board(self.game.board(), highlight)
        };
        writeln!(out, "{rendered}")
    }

    fn write_destinations(&mut self, square: Square, filtered: bool, out: &mut impl Write) -> io::Result<()> {
        let targets = if filtered {
            self.game.safe_destinations(square)
        } else {
            self.game.legal_destinations(square)
        };
        let names: Vec<String> = targets.iter().map(name).collect();
        writeln!(out, "{} {}: {}", if filtered { "legal" } else { "moves" }, name(square), names.join(" "))?;
        self.write_board(out, targets)
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        let side = self.game.side_to_move();
        match self.game.status() {
            GameStatus::Ongoing => writeln!(out, "info turn {}", side.name()),
            GameStatus::Check => {
                let king = self.game.board().find_king(side);
                let checkers: Vec<String> = king
                    .map(|sq| attackers_to_square(self.game.board(), sq, side.opposite(), self.game.rules()))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(sq, _)| name(sq))
                    .collect();
                writeln!(out, "info turn {} check from {}", side.name(), checkers.join(" "))
            }
            GameStatus::Checkmate { winner } => {
                writeln!(out, "info checkmate {} wins", winner.name())
            }
            GameStatus::Stalemate => writeln!(out, "info stalemate {} has no moves", side.name()),
        }
    }
}

fn name(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}

/// `["e2", "e4"]`, `["52", "36"]` or `["e2e4"]`.
fn parse_move_tokens(tokens: &[&str]) -> Result<(Square, Square), ChessError> {
    match tokens {
        [from, to] => Ok((parse_square(from)?, parse_square(to)?)),
        [joined] if joined.len() == 4 && joined.is_ascii() => {
            Ok((parse_square(&joined[..2])?, parse_square(&joined[2..])?))
        }
        _ => Err(ChessError::InvalidCommand(
            "expected '<from> <to>' or '<from><to>'".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(terminal: &mut TerminalState, line: &str) -> String {
        let mut out = Vec::<u8>::new();
        terminal
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn move_forms_are_equivalent() {
        for line in ["move e2 e4", "e2 e4", "e2e4", "52 36"] {
            let mut terminal = TerminalState::with_seed(RulesConfig::default(), 1);
            let text = run(&mut terminal, line);
            assert!(text.starts_with("ok e2-e4"), "{line}: {text}");
            assert!(text.contains("info turn Black"));
        }
    }

    #[test]
    fn refused_move_reports_reason() {
        let mut terminal = TerminalState::with_seed(RulesConfig::default(), 1);
        let text = run(&mut terminal, "e7 e5");
        assert!(text.contains("info rejected e7-e5: piece belongs to the side not on move"));
    }

    #[test]
    fn fools_mate_is_announced() {
        let mut terminal = TerminalState::with_seed(RulesConfig::default(), 1);
        for line in ["f2 f3", "e7 e5", "g2 g4"] {
            run(&mut terminal, line);
        }
        let text = run(&mut terminal, "d8 h4");
        assert!(text.contains("info checkmate Black wins"));
        assert!(run(&mut terminal, "random").contains("info game is over"));
    }

    #[test]
    fn destinations_and_fen_commands() {
        let mut terminal = TerminalState::with_seed(RulesConfig::default(), 1);
        assert!(run(&mut terminal, "moves g1").starts_with("moves g1: f3 h3"));
        assert!(run(&mut terminal, "fen").starts_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"));
        let text = run(&mut terminal, "position 4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        assert!(text.contains("info turn White check from h1"));
    }

    #[test]
    fn random_and_log_commands() {
        let mut terminal = TerminalState::with_seed(RulesConfig::default(), 9);
        assert!(run(&mut terminal, "log").contains("info log empty"));
        assert!(run(&mut terminal, "random").starts_with("ok "));
        assert_eq!(terminal.game().move_log().len(), 1);
        assert!(run(&mut terminal, "log").starts_with("  1. "));
    }

    #[test]
    fn unknown_input_is_reported_not_fatal() {
        let mut terminal = TerminalState::with_seed(RulesConfig::default(), 1);
        assert!(run(&mut terminal, "castle").contains("info error: invalid command"));
        assert!(run(&mut terminal, "moves").contains("needs a square"));
        assert!(run(&mut terminal, "position nonsense").contains("info error: invalid FEN"));
        let mut out = Vec::new();
        assert!(terminal.handle_command("quit", &mut out).expect("quit"));
    }

    #[test]
    fn config_reads_env_then_flags() {
        let env = |key: &str| match key {
            PAWN_CAPTURES_ENV => Some("wrap".to_owned()),
            SELF_CHECK_ENV => Some("reject".to_owned()),
            _ => None,
        };
        let rules = parse_rules_config(&[], env).expect("valid env");
        assert_eq!(rules.pawn_captures, PawnCaptureRule::WrapAround);
        assert_eq!(rules.self_check, SelfCheckPolicy::Reject);

        let flags = vec!["--edge-pawn-captures".to_owned()];
        let rules = parse_rules_config(&flags, env).expect("valid flags");
        assert_eq!(rules.pawn_captures, PawnCaptureRule::EdgeChecked);
        assert_eq!(rules.self_check, SelfCheckPolicy::Reject);

        assert!(parse_rules_config(&["--castle".to_owned()], |_| None).is_err());
        assert!(parse_rules_config(&[], |_| Some("sometimes".to_owned())).is_err());
    }
}
