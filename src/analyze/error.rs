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

use super::series::MetricKind;
use crate::source::error::SourceError;
use thiserror::Error;

/// Errors returned while measuring bucket growth
#[derive(Error, Debug)]
pub enum GrowthError {
    /// The backend returned no samples for a metric.
    #[error("Bucket is empty: no {0} data")]
    EmptySeries(MetricKind),

    /// The backend request failed. Passed through untouched.
    #[error(transparent)]
    Fetch(#[from] SourceError),
}

/// Result type for growth measurements
pub type GrowthResult<T> = Result<T, GrowthError>;
