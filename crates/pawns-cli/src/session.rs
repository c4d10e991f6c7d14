//! The interactive game loop.
//!
//! Reads player names and moves line by line, hands moves to the engine
//! untouched, and prints the board, rejections, and the final result. The
//! loop is written against [`BufRead`] and [`Write`] so it can be driven
//! from memory in tests.

use crate::config::CliConfig;
use crate::render::render_board;
use pawns_core::Color;
use pawns_engine::{Game, GameError, GameResult};
use std::io::{self, BufRead, Write};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player entered the quit token.
    Quit,
    /// The input ran out.
    EndOfInput,
    /// The game reached a result.
    Finished(GameResult),
}

/// One game between two named players.
pub struct Session<R, W> {
    input: R,
    output: W,
    quit_token: String,
    names: [Option<String>; 2],
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session from the starting position.
    pub fn new(input: R, output: W, config: &CliConfig) -> Self {
        Self::with_game(input, output, config, Game::new())
    }

    /// Creates a session that continues an existing game.
    pub fn with_game(input: R, output: W, config: &CliConfig, game: Game) -> Self {
        Session {
            input,
            output,
            quit_token: config.quit_token.clone(),
            names: [config.players.white.clone(), config.players.black.clone()],
            game,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until a result, the quit token, or the end of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        writeln!(self.output, "Pawns-Only Chess")?;
        self.ask_name(Color::White, "First")?;
        self.ask_name(Color::Black, "Second")?;
        write!(self.output, "{}", render_board(self.game.board()))?;

        if let Some(result) = self.game.result() {
            return self.finish(result);
        }

        loop {
            let name = self.name(self.game.side_to_move()).to_string();
            write!(self.output, "{}'s turn:\n> ", name)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output, "Bye!")?;
                return Ok(SessionEnd::EndOfInput);
            };
            if line == self.quit_token {
                writeln!(self.output, "Bye!")?;
                return Ok(SessionEnd::Quit);
            }

            match self.game.submit(&line) {
                Ok(report) => {
                    write!(self.output, "{}", render_board(self.game.board()))?;
                    if let Some(result) = report.result {
                        return self.finish(result);
                    }
                }
                Err(GameError::Rejected(rejection)) => {
                    writeln!(self.output, "{}", rejection)?;
                }
                Err(GameError::GameAlreadyOver) => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    fn finish(&mut self, result: GameResult) -> io::Result<SessionEnd> {
        writeln!(self.output, "{}", result)?;
        writeln!(self.output, "Bye!")?;
        tracing::info!(%result, plies = self.game.ply_count(), "game finished");
        Ok(SessionEnd::Finished(result))
    }

    fn ask_name(&mut self, color: Color, ordinal: &str) -> io::Result<()> {
        if self.names[color.index()].is_some() {
            return Ok(());
        }
        write!(self.output, "{} Player's name:\n> ", ordinal)?;
        self.output.flush()?;
        let name = self.read_line()?.unwrap_or_default();
        self.names[color.index()] = Some(name);
        Ok(())
    }

    fn name(&self, color: Color) -> &str {
        self.names[color.index()].as_deref().unwrap_or_default()
    }

    /// Reads one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: &CliConfig) -> (SessionEnd, String) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config);
        let end = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (end, output)
    }

    #[test]
    fn asks_for_both_names() {
        let (end, output) = run("Alice\nBob\nexit\n", &CliConfig::default());
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.starts_with("Pawns-Only Chess\nFirst Player's name:\n> Second Player's name:\n> "));
        assert!(output.contains("Alice's turn:\n> "));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn configured_names_skip_prompts() {
        let mut config = CliConfig::default();
        config.players.white = Some("Alice".into());
        config.players.black = Some("Bob".into());
        let (_, output) = run("e2e4\nexit\n", &config);
        assert!(!output.contains("Player's name"));
        assert!(output.contains("Bob's turn:"));
    }

    #[test]
    fn custom_quit_token() {
        let config = CliConfig {
            quit_token: "quit".into(),
            ..CliConfig::default()
        };
        let (end, output) = run("A\nB\nexit\nquit\n", &config);
        assert_eq!(end, SessionEnd::Quit);
        // "exit" is just bad move text here.
        assert!(output.contains("Invalid Input\n"));
    }

    #[test]
    fn end_of_input_says_bye() {
        let (end, output) = run("A\nB\ne2e4\n", &CliConfig::default());
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(output.ends_with("B's turn:\n> Bye!\n"));
    }

    #[test]
    fn game_tracks_played_moves() {
        let input = Cursor::new("A\nB\ne2e4\ne2e4\nexit\n".to_string());
        let mut session = Session::new(input, Vec::new(), &CliConfig::default());
        assert_eq!(session.run().unwrap(), SessionEnd::Quit);
        assert_eq!(session.game().ply_count(), 1);
        assert_eq!(session.game().side_to_move(), Color::Black);
    }

    #[test]
    fn strips_crlf() {
        let (end, _) = run("A\r\nB\r\ne2e4\r\nexit\r\n", &CliConfig::default());
        assert_eq!(end, SessionEnd::Quit);
    }
}
