//! A single game driven by text commands.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use super::command::Command;
use crate::board::Board;
use crate::core::action::Move;
use crate::core::card::Card;
use crate::core::config::GameConfig;
use crate::core::error::SetupError;
use crate::core::rng::GameRng;
use crate::deck::shuffled_deck;
use crate::render::render_board;

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  move <from> <num> <to>          - Move <num> cards from tableau <from> to tableau <to>
  movef <from> <num> <foundation> - Move <num> cards from tableau <from> to foundation <foundation>
  print                           - Print the board
  quit                            - Exit the game
  help                            - Show this help message";

const WELCOME: &str = "Welcome to Yukon Solitaire!\nType 'help' for command info.\n";
const WIN_TEXT: &str = "Congratulations, you won!";

/// What a dispatched command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The move was committed.
    Moved(Move),
    /// The move was refused; the board is unchanged.
    Rejected(Move),
    /// The move was committed and completed the last foundation.
    Won(Move),
    /// Rendered board text.
    Board(String),
    /// Command reference.
    Help(&'static str),
    /// The player asked to stop.
    Quit,
}

/// One game: a board, its seed and a move counter.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    seed: Option<u64>,
    moves_played: u32,
}

impl GameSession {
    /// Shuffle and deal a new game from `config`.
    ///
    /// Without a configured seed one is drawn from the OS; it is still
    /// recorded so the deal can be replayed.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = shuffled_deck(&mut rng);
        let board = Board::deal_with_layout(&deck, &config.layout)?;
        info!("new game, seed {}", rng.seed());
        Ok(Self {
            board,
            seed: Some(rng.seed()),
            moves_played: 0,
        })
    }

    /// Deal an explicit deck in the standard layout.
    pub fn from_deck(deck: &[Card]) -> Result<Self, SetupError> {
        Ok(Self::from_board(Board::deal(deck)?))
    }

    /// Continue from an existing position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            seed: None,
            moves_played: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shuffle seed, if the game was dealt from one.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Committed moves so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Carry out one command.
    pub fn dispatch(&mut self, command: Command) -> SessionEvent {
        match command {
            Command::Play(mv) => self.play(mv),
            Command::Print => SessionEvent::Board(render_board(&self.board)),
            Command::Help => SessionEvent::Help(HELP_TEXT),
            Command::Quit => SessionEvent::Quit,
        }
    }

    fn play(&mut self, mv: Move) -> SessionEvent {
        if !self.board.apply(&mv).is_placed() {
            debug!("rejected {mv}");
            return SessionEvent::Rejected(mv);
        }
        self.moves_played += 1;
        if self.board.is_won() {
            info!("game won in {} moves", self.moves_played);
            SessionEvent::Won(mv)
        } else {
            SessionEvent::Moved(mv)
        }
    }

    /// Read commands from `input` until `quit`, end of input or a win,
    /// writing prompts, boards and messages to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{WELCOME}")?;
        writeln!(output, "{}", render_board(&self.board))?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(
                        output,
                        "{err}. Try: move <from> <num> <to>, movef <from> <num> <foundation>, print, quit"
                    )?;
                    continue;
                }
            };

            match self.dispatch(command) {
                SessionEvent::Moved(_) | SessionEvent::Rejected(_) => {
                    writeln!(output, "{}", render_board(&self.board))?;
                }
                SessionEvent::Won(_) => {
                    writeln!(output, "{}", render_board(&self.board))?;
                    writeln!(output, "{WIN_TEXT}")?;
                    break;
                }
                SessionEvent::Board(text) => writeln!(output, "{text}")?,
                SessionEvent::Help(text) => writeln!(output, "{text}")?,
                SessionEvent::Quit => break,
            }
        }
        output.flush()
    }
}
