pub mod config;
pub mod core;
pub mod domain;
pub mod numbers;
pub mod strings;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::driver::Driver;
pub use domain::model::{DriverInputs, OutputFormat, Report};
pub use numbers::is_prime;
pub use strings::{count, reverse, WELCOME};
pub use utils::error::{LeafError, Result};
