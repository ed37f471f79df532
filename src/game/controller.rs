use super::{Board, ComputerPlayer, HumanPlayer, InputEvent, MoveSource, Player, PlayerType};
use crate::error::MoveError;
use crate::ui::Geometry;

/// Session phase. The machine only moves forward; `reset` is the sole way back to `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// A piece that was placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing changed: waiting to start, waiting for a move, or game over.
    Idle,
    /// The start signal arrived; play begins next tick.
    Started,
    /// The game was reset and is waiting for the start signal.
    Reset,
    /// A move was applied and the turn passed to the other player.
    Moved(Move),
    /// The current player chose an illegal column; the board is unchanged.
    Rejected(MoveError),
    /// A move was applied and ended the game.
    Finished(Move, Outcome),
}

/// Drives a game: owns the board and both seats, and advances at most one
/// move per tick.
pub struct GameController {
    board: Board,
    phase: Phase,
    current: Player,
    seats: [Box<dyn MoveSource>; 2],
    geometry: Geometry,
    outcome: Option<Outcome>,
    last_move: Option<Move>,
}

impl GameController {
    /// Create a controller with the given seats, player one first.
    pub fn new(seats: [Box<dyn MoveSource>; 2]) -> Self {
        GameController {
            board: Board::new(),
            phase: Phase::Start,
            current: Player::One,
            seats,
            geometry: Geometry::default(),
            outcome: None,
            last_move: None,
        }
    }

    /// Build seats from player types. Computer seats are seeded from `seed`
    /// (offset per seat) when given, otherwise from the OS.
    pub fn from_types(types: [PlayerType; 2], seed: Option<u64>) -> Self {
        let seats = Player::ALL.map(|player| -> Box<dyn MoveSource> {
            match types[player.index()] {
                PlayerType::Human => Box::new(HumanPlayer::new()),
                PlayerType::Computer => match seed {
                    Some(seed) => Box::new(ComputerPlayer::seeded(
                        seed.wrapping_add(player.index() as u64),
                    )),
                    None => Box::new(ComputerPlayer::new()),
                },
            }
        });
        Self::new(seats)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn seat_kind(&self, player: Player) -> PlayerType {
        self.seats[player.index()].kind()
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Install screen geometry directly, e.g. before the first frame. Resizes
    /// during play arrive as `InputEvent::Resize`.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// Start over with an empty board, waiting for the start signal.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Phase::Start;
        self.current = Player::One;
        self.outcome = None;
        self.last_move = None;
        for seat in &mut self.seats {
            seat.reset();
        }
        log::info!("game reset");
    }

    /// Advance the state machine by one tick.
    ///
    /// Events are applied in order. A `Reset` throws away everything queued
    /// before it, so clicks aimed at the old game never reach the new one.
    /// `Resize` takes effect for the events that follow it. Input is routed
    /// only to the player whose turn it is, and that player is polled once.
    /// If it has no move ready the tick is a no-op.
    pub fn tick(&mut self, events: &[InputEvent]) -> TickResult {
        let mut events = events;
        let mut was_reset = false;
        if let Some(pos) = events.iter().rposition(|e| *e == InputEvent::Reset) {
            self.apply_resizes(&events[..pos]);
            self.reset();
            events = &events[pos + 1..];
            was_reset = true;
        }

        match self.phase {
            Phase::Start => self.await_start(events, was_reset),
            Phase::Playing => self.play_turn(events),
            Phase::Finished => {
                self.apply_resizes(events);
                TickResult::Idle
            }
        }
    }

    fn apply_resizes(&mut self, events: &[InputEvent]) {
        for event in events {
            if let InputEvent::Resize(geometry) = *event {
                self.geometry = geometry;
            }
        }
    }

    fn await_start(&mut self, events: &[InputEvent], was_reset: bool) -> TickResult {
        self.apply_resizes(events);
        let begin = events
            .iter()
            .any(|e| matches!(e, InputEvent::PointerUp { .. } | InputEvent::Begin));
        if begin {
            self.phase = Phase::Playing;
            log::info!(
                "game started: {:?} vs {:?}",
                self.seat_kind(Player::One),
                self.seat_kind(Player::Two)
            );
            TickResult::Started
        } else if was_reset {
            TickResult::Reset
        } else {
            TickResult::Idle
        }
    }

    fn play_turn(&mut self, events: &[InputEvent]) -> TickResult {
        let seat = &mut self.seats[self.current.index()];
        for event in events {
            match *event {
                InputEvent::Resize(geometry) => self.geometry = geometry,
                _ => seat.handle_input(event, &self.geometry),
            }
        }

        let Some(col) = seat.poll_move(&self.board) else {
            return TickResult::Idle;
        };

        let row = match self.board.drop_piece(col, self.current) {
            Ok(row) => row,
            Err(err) => {
                log::debug!("ignoring move by {}: {err}", self.current.name());
                return TickResult::Rejected(err);
            }
        };

        let mv = Move {
            player: self.current,
            row,
            col,
        };
        self.last_move = Some(mv);
        log::info!("{} played column {col} (row {row})", mv.player.name());

        // A new line can only appear for the player who just moved.
        let outcome = if self.board.is_win(mv.player) {
            Some(Outcome::Winner(mv.player))
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.phase = Phase::Finished;
                self.outcome = Some(outcome);
                log::info!("game finished: {outcome:?}");
                TickResult::Finished(mv, outcome)
            }
            None => {
                self.current = self.current.other();
                TickResult::Moved(mv)
            }
        }
    }
}
