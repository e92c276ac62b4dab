#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod attack;
mod bitboard;
mod board;
mod bot;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
pub mod events;
mod fleet;
mod game;
mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
#[cfg(feature = "std")]
pub mod session;
mod ship;
pub mod sim;
#[cfg(feature = "std")]
pub mod ui;
mod win;

pub use attack::attack;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use bot::*;
pub use common::*;
pub use config::*;
pub use events::GameEvent;
pub use fleet::Fleet;
pub use game::*;
pub use generator::FleetGenerator;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use placement::validate;
#[cfg(feature = "std")]
pub use session::{ChannelSink, EventSink, LogSink, Session};
pub use ship::*;
pub use sim::{simulate, SimReport};
pub use win::evaluate;
