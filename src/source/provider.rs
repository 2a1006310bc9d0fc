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

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::error::SourceResult;
use crate::analyze::series::{DailyMetric, MetricKind};

/// Generic trait for monitoring backends that expose daily bucket metrics.
///
/// Implementations are free to return samples in any order; callers sort
/// them before doing any arithmetic.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Short human readable name of the backend, used in logs.
    fn name(&self) -> &str;

    /// Fetch the daily maximum of a metric for one entity.
    ///
    /// # Arguments
    ///
    /// * `entity_id` - The bucket name
    /// * `kind` - Which metric to fetch (size in bytes or object count)
    /// * `start` - Inclusive start of the query window
    /// * `end` - End of the query window
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(Vec<DailyMetric>)` - One sample per day the backend has data for (possibly empty)
    /// * `Err(SourceError)` - If the request fails
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * Credentials are invalid or expired
    /// * Network or backend errors occur
    /// * A returned datapoint cannot be converted
    async fn fetch_daily_samples(
        &self,
        entity_id: &str,
        kind: MetricKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SourceResult<Vec<DailyMetric>>;
}

impl Debug for dyn SampleSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "SampleSource(name={})", self.name())
    }
}
