//! Serializable parser configuration.
//!
//! [`ParserOptions`] is the plain-data form of a [`Parser`]. It can be
//! written to and read from TOML, and every field has a default, so a
//! file only needs the settings it changes:
//!
//! ```toml
//! [numeric]
//! currency_symbol = "€"
//! digit_separator = "."
//! decimal_separator = ","
//!
//! [booleans]
//! ja = true
//! nein = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::boolean::{BooleanMap, BooleanParser};
use crate::error::{ConfigError, Result};
use crate::numeric::NumericParser;
use crate::parser::Parser;
use crate::pattern::{PatternConfig, TrailingDecimal};
use crate::time::{TimeLayout, TimeParser, default_date_layouts, default_datetime_layouts};

/// Currency and separator patterns for the numeric detector.
///
/// An empty string means "infer".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericOptions {
    pub currency_symbol: String,
    pub digit_separator: String,
    pub decimal_separator: String,
    /// What to do with a decimal separator that ends the input.
    pub trailing_decimal: TrailingDecimal,
}

impl NumericOptions {
    /// `$`, `,` and `.`.
    pub fn standard() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            digit_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            trailing_decimal: TrailingDecimal::default(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_separators(
        mut self,
        digit_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
    ) -> Self {
        self.digit_separator = digit_separator.into();
        self.decimal_separator = decimal_separator.into();
        self
    }

    pub fn with_trailing_decimal(mut self, policy: TrailingDecimal) -> Self {
        self.trailing_decimal = policy;
        self
    }

    pub fn compile(&self) -> PatternConfig {
        PatternConfig::new(
            &self.currency_symbol,
            &self.digit_separator,
            &self.decimal_separator,
        )
        .with_trailing_decimal(self.trailing_decimal)
    }
}

/// Ordered layouts for the time detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOptions {
    pub datetime_layouts: Vec<TimeLayout>,
    pub date_layouts: Vec<TimeLayout>,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            datetime_layouts: default_datetime_layouts(),
            date_layouts: default_date_layouts(),
        }
    }
}

impl TimeOptions {
    pub fn compile(&self) -> TimeParser {
        TimeParser::new(self.datetime_layouts.clone(), self.date_layouts.clone())
    }
}

/// Everything needed to build a [`Parser`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub numeric: NumericOptions,
    pub time: TimeOptions,
    pub booleans: BooleanMap,
}

impl ParserOptions {
    /// Inferred separators; same as `default()`.
    pub fn generic() -> Self {
        Self::default()
    }

    /// US-style numbers.
    pub fn standard() -> Self {
        Self {
            numeric: NumericOptions::standard(),
            ..Self::default()
        }
    }

    pub fn with_numeric(mut self, numeric: NumericOptions) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_time(mut self, time: TimeOptions) -> Self {
        self.time = time;
        self
    }

    pub fn with_booleans(mut self, booleans: BooleanMap) -> Self {
        self.booleans = booleans;
        self
    }

    /// Build the parser these options describe.
    pub fn compile(&self) -> Parser {
        Parser::new(
            NumericParser::new(self.numeric.compile()),
            self.time.compile(),
            BooleanParser::new(self.booleans.clone()),
        )
    }

    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML or unknown layout values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    ///
    /// [`ConfigError::Serialize`] if TOML serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read options from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::ParseFile`] if it is not valid options TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let options = toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded parser options");
        Ok(options)
    }

    /// Write options to a TOML file, creating parent directories.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] or [`ConfigError::Serialize`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;
        info!(path = %path.display(), "saved parser options");
        Ok(())
    }
}
