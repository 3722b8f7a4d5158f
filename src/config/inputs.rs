use crate::domain::model::DriverInputs;
use crate::utils::error::{LeafError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of the driver inputs:
///
/// ```toml
/// [inputs]
/// prime_candidate = 19
/// reverse_text = "callicoder"
/// count_text = "Go is Awesome. I love Go"
/// count_pattern = "Go"
/// ```
///
/// Every key is optional and falls back to the built-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsFile {
    #[serde(default)]
    pub inputs: DriverInputs,
}

impl InputsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LeafError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LeafError::ConfigParseError {
            field: "inputs_toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LeafError::ConfigParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_inputs() {
        let toml_content = r#"
[inputs]
prime_candidate = 7919
reverse_text = "héllo"
count_text = "banana"
count_pattern = "an"
"#;

        let file = InputsFile::from_toml_str(toml_content).unwrap();

        assert_eq!(file.inputs.prime_candidate, 7919);
        assert_eq!(file.inputs.reverse_text, "héllo");
        assert_eq!(file.inputs.count_text, "banana");
        assert_eq!(file.inputs.count_pattern, "an");
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let file = InputsFile::from_toml_str("[inputs]\ncount_pattern = \"o\"\n").unwrap();
        let defaults = DriverInputs::default();

        assert_eq!(file.inputs.count_pattern, "o");
        assert_eq!(file.inputs.prime_candidate, defaults.prime_candidate);
        assert_eq!(file.inputs.reverse_text, defaults.reverse_text);

        let empty = InputsFile::from_toml_str("").unwrap();
        assert_eq!(empty.inputs, defaults);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = InputsFile::from_toml_str("[inputs]\nprime = 3\n");
        assert!(matches!(result, Err(LeafError::ConfigParseError { .. })));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = InputsFile::from_toml_str("[inputs]\nprime_candidate = \"nineteen\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LEAF_UTILS_TEST_TEXT", "stressed");

        let toml_content = r#"
[inputs]
reverse_text = "${LEAF_UTILS_TEST_TEXT}"
count_text = "${LEAF_UTILS_TEST_UNSET_VAR}"
"#;

        let file = InputsFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.inputs.reverse_text, "stressed");
        assert_eq!(file.inputs.count_text, "${LEAF_UTILS_TEST_UNSET_VAR}");

        std::env::remove_var("LEAF_UTILS_TEST_TEXT");
    }

    #[test]
    fn test_inputs_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inputs]\nprime_candidate = 21\n")
            .unwrap();

        let file = InputsFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.inputs.prime_candidate, 21);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = InputsFile::from_file("/definitely/not/here/inputs.toml");
        assert!(matches!(result, Err(LeafError::IoError(_))));
    }
}
