//! Shared configuration, logging and error vocabulary for the enumgate crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::ScalarKind;
