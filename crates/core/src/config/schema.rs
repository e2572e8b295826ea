//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub plan: PlanConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Corpus scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// File extensions treated as notes
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from the scan
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

/// Curriculum plan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// File name of the plan document inside the corpus
    #[serde(default = "default_plan_file")]
    pub file: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            file: default_plan_file(),
        }
    }
}

fn default_plan_file() -> String {
    "Plan.md".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default output format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
