pub mod driver;

pub use crate::domain::model::{DriverInputs, OutputFormat, Report};
pub use crate::utils::error::Result;
