//! woz → MRC: workout-beskrivelser ("woz") til MRC-kursfiler for smarttrenere.
//!
//! Linjer klassifiseres (rampe/steady), ekspanderes til relative segmenter
//! og settes sammen til absolutte (tid, effekt)-breakpoints.

pub mod classify;
pub mod cli;
pub mod config;
pub mod course;
pub mod error;
pub mod models;
pub mod numbers;
pub mod ramp;
pub mod steady;
pub mod storage;
pub mod tokens;

#[cfg(feature = "python")]
mod py;

pub use classify::{detect_type, LineKind};
pub use config::ConvertConfig;
pub use course::{assemble, build_breakpoints, construct, construct_with, RoundTo};
pub use error::{ParseErrorKind, TokenClass, WozError, WozResult};
pub use models::{Breakpoint, Segment};
pub use numbers::extract_numbers;
pub use ramp::{convert_ramp_to_mrc, DEFAULT_STEP_MIN};
pub use steady::{convert_steady_to_mrc, expand_line};
pub use storage::{convert_file, read_workout, write_course};
