use crate::core::{DriverInputs, OutputFormat, Report, Result};
use crate::numbers::is_prime;
use crate::strings::{count, reverse, WELCOME};
use std::io::Write;

/// Calls every helper once, in a fixed order, and renders the results.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    inputs: DriverInputs,
}

impl Driver {
    pub fn new(inputs: DriverInputs) -> Self {
        Self { inputs }
    }

    pub fn run(&self) -> Report {
        let inputs = &self.inputs;

        let is_prime = is_prime(inputs.prime_candidate);
        tracing::debug!("is_prime({}) = {}", inputs.prime_candidate, is_prime);

        let reversed = reverse(&inputs.reverse_text);
        tracing::debug!("reverse({:?}) = {:?}", inputs.reverse_text, reversed);

        let count = count(&inputs.count_text, &inputs.count_pattern);
        tracing::debug!(
            "count({:?}, {:?}) = {}",
            inputs.count_text,
            inputs.count_pattern,
            count
        );

        Report {
            is_prime,
            greeting: WELCOME.to_string(),
            reversed,
            count,
        }
    }

    pub fn write_report<W: Write>(&self, mut out: W, format: OutputFormat) -> Result<()> {
        let report = self.run();

        match format {
            OutputFormat::Text => {
                for line in report.lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
        }

        out.flush()?;
        tracing::info!("Report written ({:?})", format);
        Ok(())
    }
}
