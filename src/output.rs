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

//! Rendering of a growth report for the command line.

use crate::analyze::metrics::GrowthReport;
use clap::ValueEnum;
use serde_json::Error as JsonError;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputType {
    /// Human readable summary
    #[default]
    Text,
    /// Pretty printed JSON document
    Json,
}

/// Render a report in the requested format.
///
/// The banner only applies to text output.
pub fn render(
    report: &GrowthReport,
    output: OutputType,
    show_banner: bool,
) -> Result<String, JsonError> {
    match output {
        OutputType::Text => Ok(report.to_text(show_banner)),
        OutputType::Json => report.to_json(),
    }
}
