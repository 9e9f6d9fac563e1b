//! # Connect Four Minimax
//!
//! Connect Four against a computer opponent at three strength tiers. The
//! hardest tier runs a fixed-depth minimax search with alpha-beta pruning over
//! a window-counting heuristic; the easier tiers play random legal columns.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, win detection, player, state machine
//! - [`ai`]: Agent trait, heuristic, minimax search, random picker, tiers
//! - [`controller`]: Human/computer turn sequencing
//! - [`ui`]: Terminal UI: difficulty dialog and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
