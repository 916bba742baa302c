//! # Minimax Connect Four
//!
//! Connect Four with a depth-limited minimax opponent using alpha-beta
//! pruning and center-first move ordering. Ships a terminal UI built with
//! Ratatui and a plain console mode.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, line detection, heuristic, turn controller
//! - [`ai`]: Minimax search, heuristic trait, contestant kinds
//! - [`ui`]: Terminal UI and console front ends
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
