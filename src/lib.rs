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

//! # Bucket Growth
//!
//! A Rust library for estimating how fast an S3 bucket grows, from the daily
//! storage metrics S3 publishes to CloudWatch.
//!
//! For both the bucket size and the object count it computes:
//!
//! - **Monthly growth**: the mean of twelve month-over-month midpoint rates
//! - **Yearly growth**: the midpoint rate between the oldest and newest sample
//! - **Projections**: the current total compounded monthly for one and five years
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bucket_growth::{GrowthAnalyzer, SourceConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = SourceConfig::cloudwatch()
//!     .with_option("region", "us-east-1")
//!     .with_option("profile", "production");
//!
//! let analyzer = GrowthAnalyzer::builder(config).build().await?;
//! let report = analyzer.measure("my-bucket").await?;
//!
//! println!("{}", report);
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`analyze`] - Growth estimation, projections and the report
//! - [`source`] - Monitoring backend abstraction (CloudWatch)
//! - [`output`] - Text and JSON rendering
//! - [`util`] - Retry, timing and formatting helpers

pub mod analyze;
pub mod output;
pub mod source;
pub mod util;

// Re-export commonly used types
pub use analyze::metrics::{GrowthReport, ProjectionMetrics};
pub use analyze::{GrowthAnalyzer, GrowthError};
pub use output::OutputType;
pub use source::SourceConfig;
