//! CLI infrastructure for the tic-tac-toe engine
//!
//! This module provides the command-line interface for querying the best
//! move, analyzing positions, and watching optimal self-play.

pub mod commands;
pub mod config;
pub mod output;
