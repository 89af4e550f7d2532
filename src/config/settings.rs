use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file for the explorer: where the dataset lives and how the
/// charts are styled. Everything has a built-in default so the tool runs
/// without a file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub charts: ChartStyles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Local CSV path or HTTP(S) URL of the raw dataset.
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyles {
    #[serde(default = "ChartStyle::county_default")]
    pub county: ChartStyle,
    #[serde(default = "ChartStyle::year_default")]
    pub year: ChartStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    pub color: String,
    pub edge_color: String,
}

impl ChartStyle {
    fn county_default() -> Self {
        Self {
            color: "tab:blue".to_string(),
            edge_color: "navy".to_string(),
        }
    }

    fn year_default() -> Self {
        Self {
            color: "cornflowerblue".to_string(),
            edge_color: "navy".to_string(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: "National_Register_of_Historic_Places.csv".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            charts: ChartStyles::default(),
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value, so a settings file
    // can point at per-machine dataset locations.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if validation::is_remote_source(&self.dataset.source) {
            validation::validate_url("dataset.source", &self.dataset.source)?;
        } else {
            validation::validate_path("dataset.source", &self.dataset.source)?;
        }

        validation::validate_non_empty_string("charts.county.color", &self.charts.county.color)?;
        validation::validate_non_empty_string(
            "charts.county.edge_color",
            &self.charts.county.edge_color,
        )?;
        validation::validate_non_empty_string("charts.year.color", &self.charts.year.color)?;
        validation::validate_non_empty_string(
            "charts.year.edge_color",
            &self.charts.year.edge_color,
        )?;

        Ok(())
    }
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            county: ChartStyle::county_default(),
            year: ChartStyle::year_default(),
        }
    }
}
