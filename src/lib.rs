//! # HexOust
//!
//! Rules engine for HexOust, a two-player placement and capture game on a
//! hexagonal board, plus a terminal front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: coordinates, board, rules, game session
//! - [`ui`] — Terminal UI: board view with cursor and highlights
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
