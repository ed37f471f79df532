//! Core Connect Four game logic: board and win detection, player seats, and
//! the tick-driven controller that alternates turns.

mod board;
mod computer;
mod controller;
mod human;
mod input;
mod move_source;
mod player;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use computer::ComputerPlayer;
pub use controller::{GameController, Move, Outcome, Phase, TickResult};
pub use human::HumanPlayer;
pub use input::InputEvent;
pub use move_source::MoveSource;
pub use player::{Player, PlayerType};
