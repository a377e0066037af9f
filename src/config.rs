use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BUNDLE_MODULE, RenderOptions};

pub const CONFIG_FILE_NAME: &str = ".fluent-typegen.json";

/// Placeholder in `output` replaced by the input file stem.
pub const STEM_PLACEHOLDER: &str = "{stem}";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_bundle_module")]
    pub bundle_module: String,
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub semi: bool,
}

fn default_input() -> String {
    "**/*.ftl".to_string()
}

fn default_output() -> String {
    "src/locales.types.ts".to_string()
}

fn default_bundle_module() -> String {
    DEFAULT_BUNDLE_MODULE.to_string()
}

fn default_tab_width() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            ignores: Vec::new(),
            bundle_module: default_bundle_module(),
            tab_width: default_tab_width(),
            semi: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `input` or `ignores`,
    /// an empty `output`, or a zero `tabWidth`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Pattern::new(&self.input)
            .with_context(|| format!("Invalid glob pattern in 'input': \"{}\"", self.input))?;

        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        if self.tab_width == 0 {
            bail!("'tabWidth' must be at least 1");
        }

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tab_width: self.tab_width,
            semi: self.semi,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file the values came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
