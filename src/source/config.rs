// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use super::error::{SourceError, SourceResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Seconds in one CloudWatch aggregation period for daily samples.
pub const DAILY_PERIOD_SECONDS: i32 = 86_400;

/// Monitoring backend type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// AWS CloudWatch storage metrics
    CloudWatch,
}

/// Generic configuration for sample sources
///
/// Backend-specific settings live in a string option map so new backends
/// can be added without new configuration structs.
///
/// # Examples
///
/// ```
/// use bucket_growth::source::SourceConfig;
///
/// let config = SourceConfig::cloudwatch()
///     .with_option("region", "us-east-1")
///     .with_option("profile", "production");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source backend type
    #[serde(rename = "type")]
    pub source_type: SourceType,

    /// Backend-specific configuration options
    ///
    /// CloudWatch:
    /// - region: AWS region (e.g., "us-east-1")
    /// - profile: Shared config profile name
    /// - endpoint: Custom endpoint URL (e.g., a local emulator)
    /// - max_retries: Retries on transient request failures
    /// - period_seconds: Aggregation period of each sample, whole days only
    /// - size_storage_type: `StorageType` dimension for the size metric
    /// - object_storage_type: `StorageType` dimension for the object count metric
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl SourceConfig {
    /// Create a new source configuration from a backend name.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigError` if the backend name is unknown.
    pub fn new(source_type: impl Into<String>) -> SourceResult<Self> {
        let source_type_str = source_type.into();
        let source_type = match source_type_str.to_lowercase().as_str() {
            "cloudwatch" | "aws" => SourceType::CloudWatch,
            _ => {
                return Err(SourceError::ConfigError(format!(
                    "Unknown source type: {}",
                    source_type_str
                )))
            }
        };

        Ok(Self {
            source_type,
            options: Self::default_options(),
        })
    }

    /// Create a CloudWatch source configuration with default options.
    pub fn cloudwatch() -> Self {
        Self {
            source_type: SourceType::CloudWatch,
            options: Self::default_options(),
        }
    }

    /// Default options shared by all source types.
    pub fn default_options() -> HashMap<String, String> {
        [
            ("max_retries", "3".to_string()),
            ("period_seconds", DAILY_PERIOD_SECONDS.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Add a configuration option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Add an option only when a value is present.
    ///
    /// Handy for optional CLI flags such as `--profile`.
    pub fn with_optional(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_option(key, value),
            None => self,
        }
    }

    /// Get a configuration option.
    pub fn get_option(&self, key: &str) -> Option<&String> {
        self.options.get(key)
    }

    /// Number of retries for transient request failures.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigError` if the option is not a non-negative integer.
    pub fn max_retries(&self) -> SourceResult<usize> {
        self.parse_option("max_retries", 3)
    }

    /// Aggregation period of each sample, in seconds.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigError` unless the option is a positive multiple of
    /// `DAILY_PERIOD_SECONDS`, so each UTC day yields at most one sample.
    pub fn period_seconds(&self) -> SourceResult<i32> {
        let period: i32 = self.parse_option("period_seconds", DAILY_PERIOD_SECONDS)?;
        if period <= 0 || period % DAILY_PERIOD_SECONDS != 0 {
            return Err(SourceError::ConfigError(format!(
                "period_seconds must be a positive multiple of 86400, got {}",
                period
            )));
        }
        Ok(period)
    }

    /// Get the source type as a string.
    pub fn source_type_str(&self) -> &str {
        match self.source_type {
            SourceType::CloudWatch => "cloudwatch",
        }
    }

    fn parse_option<T: std::str::FromStr>(&self, key: &str, default: T) -> SourceResult<T> {
        match self.options.get(key) {
            Some(raw) => raw.trim().parse::<T>().map_err(|_| {
                SourceError::ConfigError(format!("Invalid value for '{}': {}", key, raw))
            }),
            None => Ok(default),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::cloudwatch()
    }
}
