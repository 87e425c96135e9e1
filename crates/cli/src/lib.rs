//! `wareflow-cli` — line-command front end for the order-lifecycle engine.
//!
//! One text command per line in, one JSON object per line out. All state is
//! in memory and lives as long as the session.

pub mod command;
pub mod config;
pub mod dto;
pub mod errors;
pub mod seed;
pub mod session;

pub use command::{Command, CommandError};
pub use config::{CliConfig, Mode};
pub use seed::{SeedError, WarehouseSeed};
pub use session::Session;
