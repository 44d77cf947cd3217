//! Board generation and reveal engine for square Minesweeper boards.
//!
//! [`Board`] owns the grid and the flood reveal, [`GameManager`] layers the
//! playing/won/lost state machine on top of it.

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use manager::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod manager;
mod types;
