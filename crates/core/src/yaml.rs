use std::{env, fs::File, io::Read, path::Path};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// How byte-valued fields lose their JSON quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStripping {
    /// Strip only when the first and last bytes are both `"`.
    #[default]
    Verified,
    /// Always strip the first and last byte of values at least two bytes long.
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub quote_stripping: QuoteStripping,

    /// Accept a non-string `id` by keeping its raw bytes.
    #[serde(default = "default_true")]
    pub tolerate_structured_id: bool,

    /// Reject an `executed` receipt that carries no `trx`.
    #[serde(default = "default_true")]
    pub require_trx_on_success: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            quote_stripping: QuoteStripping::default(),
            tolerate_structured_id: true,
            require_trx_on_success: true,
        }
    }
}

/// Substitutes `${VAR}` environment references in YAML content.
fn substitute_env_variables(contents: &str) -> Result<String, ReadConfigError> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;

    let mut missing: Option<String> = None;
    let result = re.replace_all(contents, |caps: &Captures| {
        let var_name = &caps[1];
        match env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                error!("Environment variable {} not found", var_name);
                missing.get_or_insert_with(|| var_name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(var_name) => Err(ReadConfigError::EnvironmentVariableNotFound(var_name)),
        None => Ok(result.into_owned()),
    }
}

#[derive(Error, Debug)]
pub enum ReadConfigError {
    #[error("Can not find config yaml")]
    CanNotFindYaml,

    #[error("Can not read config yaml")]
    CanNotReadYaml,

    #[error("Normalizer config is invalid yaml and does not match the struct - {0}")]
    ConfigInvalidYaml(String),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),

    #[error("Environment variable pattern is invalid: {0}")]
    InvalidSubstitutionPattern(#[from] regex::Error),
}

/// Parses normalizer settings from YAML text, resolving `${VAR}` references
/// unless `raw_yaml` is set.
pub fn from_yaml_str(contents: &str, raw_yaml: bool) -> Result<NormalizerConfig, ReadConfigError> {
    let substituted_contents =
        if raw_yaml { contents.to_string() } else { substitute_env_variables(contents)? };

    // an empty document means all defaults
    if substituted_contents.trim().is_empty() {
        return Ok(NormalizerConfig::default());
    }

    serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadConfigError::ConfigInvalidYaml(e.to_string()))
}

/// Reads and parses the normalizer configuration YAML file.
pub fn read(file_path: &Path, raw_yaml: bool) -> Result<NormalizerConfig, ReadConfigError> {
    let mut file = File::open(file_path).map_err(|_| ReadConfigError::CanNotFindYaml)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|_| ReadConfigError::CanNotReadYaml)?;

    from_yaml_str(&contents, raw_yaml)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = from_yaml_str("", false).unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.quote_stripping, QuoteStripping::Verified);
        assert!(config.tolerate_structured_id);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = from_yaml_str("quote_stripping: positional\n", false).unwrap();
        assert_eq!(config.quote_stripping, QuoteStripping::Positional);
        assert!(config.tolerate_structured_id);
        assert!(config.require_trx_on_success);
    }

    #[test]
    fn test_env_substitution() {
        env::set_var("TRX_ENVELOPE_TEST_STRIPPING", "positional");
        let config =
            from_yaml_str("quote_stripping: ${TRX_ENVELOPE_TEST_STRIPPING}\n", false).unwrap();
        assert_eq!(config.quote_stripping, QuoteStripping::Positional);
    }

    #[test]
    fn test_raw_yaml_skips_substitution() {
        let result = from_yaml_str("quote_stripping: ${TRX_ENVELOPE_TEST_UNSET}\n", true);
        assert!(matches!(result, Err(ReadConfigError::ConfigInvalidYaml(_))));
    }

    #[test]
    fn test_missing_env_variable() {
        let result = from_yaml_str("quote_stripping: ${TRX_ENVELOPE_TEST_UNSET}\n", false);
        assert!(matches!(
            result,
            Err(ReadConfigError::EnvironmentVariableNotFound(name)) if name == "TRX_ENVELOPE_TEST_UNSET"
        ));
    }

    #[test]
    fn test_unknown_stripping_mode() {
        let result = from_yaml_str("quote_stripping: sometimes\n", false);
        assert!(matches!(result, Err(ReadConfigError::ConfigInvalidYaml(_))));
    }

    #[test]
    fn test_read_from_file() {
        let path = env::temp_dir().join(format!("trx_envelope_{}.yaml", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(b"tolerate_structured_id: false\nrequire_trx_on_success: false\n").unwrap();

        let config = read(&path, false).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!config.tolerate_structured_id);
        assert!(!config.require_trx_on_success);
        assert_eq!(config.quote_stripping, QuoteStripping::Verified);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read(Path::new("/nonexistent/trx_envelope.yaml"), false);
        assert!(matches!(result, Err(ReadConfigError::CanNotFindYaml)));
    }
}
