use crate::config::inputs::InputsFile;
use crate::domain::model::{DriverInputs, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "leaf-utils")]
#[command(about = "Runs each helper once and prints the results")]
pub struct CliConfig {
    #[arg(long, help = "TOML file overriding the driver inputs")]
    pub inputs: Option<String>,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Inputs from `--inputs` when given, otherwise the fixed defaults.
    pub fn load_inputs(&self) -> Result<DriverInputs> {
        match &self.inputs {
            Some(path) => {
                tracing::debug!("Loading driver inputs from {}", path);
                Ok(InputsFile::from_file(path)?.inputs)
            }
            None => Ok(DriverInputs::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.inputs {
            validate_path("inputs", path)?;
        }
        Ok(())
    }
}
