use crate::adapters::LpSpooler;
use crate::domain::model::{FontSpec, PageGeometry};
use crate::domain::strip::{ControlZone, FilterMode};
use crate::utils::error::{PrinterError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file shared by `strip-printer` and `strip-feed`. Every section
/// is optional and falls back to US Letter, 9pt Courier and `lp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub page: PageGeometry,
    pub font: FontSpec,
    pub print: SpoolerConfig,
    pub zone: ZoneConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoolerConfig {
    pub command: String,
    pub args: Vec<String>,
    pub title: String,
}

impl Default for SpoolerConfig {
    fn default() -> Self {
        Self {
            command: "lp".to_string(),
            args: Vec::new(),
            title: "strip-printer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    pub airports: Vec<String>,
    pub mode: FilterMode,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            airports: ["CYTZ", "CYYZ", "CYXU", "CYKF"]
                .iter()
                .map(|a| a.to_string())
                .collect(),
            mode: FilterMode::Both,
        }
    }
}

impl PrinterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PrinterError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read '{}': {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PrinterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Load `path` when given, otherwise the built-in defaults. Either way
    /// the result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static env pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn spooler(&self) -> LpSpooler {
        LpSpooler::new(self.print.command.clone(), self.print.args.clone())
    }

    pub fn control_zone(&self) -> ControlZone {
        ControlZone::new(&self.zone.airports, self.zone.mode)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive("page.width", self.page.width)?;
        validation::validate_positive("page.height", self.page.height)?;
        validation::validate_non_negative("page.margin_left", self.page.margin_left)?;
        validation::validate_non_negative("page.margin_top", self.page.margin_top)?;
        validation::validate_non_negative("page.margin_right", self.page.margin_right)?;
        validation::validate_non_negative("page.margin_bottom", self.page.margin_bottom)?;

        let bounds = self.page.margin_bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(PrinterError::ConfigValidationError {
                field: "page".to_string(),
                message: "margins leave no printable area".to_string(),
            });
        }

        validation::validate_monospace_font("font.name", &self.font.name)?;
        validation::validate_range("font.size", self.font.size, 4.0, 72.0)?;
        validation::validate_range("font.line_spacing", self.font.line_spacing, 0.5, 4.0)?;

        validation::validate_non_empty_string("print.command", &self.print.command)?;
        validation::validate_non_empty_string("print.title", &self.print.title)?;

        validation::validate_icao_codes("zone.airports", &self.zone.airports)?;

        Ok(())
    }
}

impl Validate for PrinterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
