//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built with Ratatui.
//! Seats can be played by a human (mouse or keyboard) or by the computer.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, tick-driven controller
//! - [`ui`] — Terminal UI: geometry, board renderer, game view, app loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
