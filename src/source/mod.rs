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

//! Monitoring backend abstraction layer
//!
//! A [`SampleSource`] returns the daily samples of a bucket metric over a
//! time window. Backends are created from a [`SourceConfig`] through the
//! [`SampleSourceFactory`]; CloudWatch is the only one today.

pub mod cloudwatch;
pub mod config;
pub mod error;
pub mod factory;
pub mod provider;

// Public exports
pub use cloudwatch::CloudWatchSource;
pub use config::{SourceConfig, SourceType};
pub use error::{SourceError, SourceResult};
pub use factory::SampleSourceFactory;
pub use provider::SampleSource;
