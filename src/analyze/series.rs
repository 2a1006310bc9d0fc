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

//! Daily samples and the date-ordered series built from them.

use super::error::{GrowthError, GrowthResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One daily observation of a bucket metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub total: i64,
}

impl DailyMetric {
    pub fn new(date: NaiveDate, total: i64) -> Self {
        Self { date, total }
    }
}

/// The two bucket metrics the growth report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Total bucket size in bytes
    Size,
    /// Total number of objects
    ObjectCount,
}

impl MetricKind {
    /// CloudWatch namespace holding S3 storage metrics.
    pub fn namespace(&self) -> &'static str {
        "AWS/S3"
    }

    /// CloudWatch metric name.
    pub fn metric_name(&self) -> &'static str {
        match self {
            MetricKind::Size => "BucketSizeBytes",
            MetricKind::ObjectCount => "NumberOfObjects",
        }
    }

    /// Default value of the `StorageType` dimension.
    ///
    /// S3 only publishes `NumberOfObjects` under `AllStorageTypes`.
    pub fn default_storage_type(&self) -> &'static str {
        match self {
            MetricKind::Size => "StandardStorage",
            MetricKind::ObjectCount => "AllStorageTypes",
        }
    }

    /// Name of the source option overriding the `StorageType` dimension.
    pub fn storage_type_option(&self) -> &'static str {
        match self {
            MetricKind::Size => "size_storage_type",
            MetricKind::ObjectCount => "object_storage_type",
        }
    }

    /// CloudWatch unit name of the metric.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Size => "Bytes",
            MetricKind::ObjectCount => "Count",
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MetricKind::Size => write!(f, "size"),
            MetricKind::ObjectCount => write!(f, "object count"),
        }
    }
}

/// A non-empty, date-ascending sequence of daily samples for one metric.
///
/// Duplicate dates are kept. The sort is stable, so samples sharing a date
/// stay in the order the backend returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    kind: MetricKind,
    samples: Vec<DailyMetric>,
}

impl MetricSeries {
    /// Normalize raw samples into a series.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::EmptySeries` if `samples` is empty.
    pub fn new(kind: MetricKind, mut samples: Vec<DailyMetric>) -> GrowthResult<Self> {
        if samples.is_empty() {
            return Err(GrowthError::EmptySeries(kind));
        }

        samples.sort_by_key(|sample| sample.date);

        Ok(Self { kind, samples })
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn samples(&self) -> &[DailyMetric] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest sample.
    pub fn earliest(&self) -> &DailyMetric {
        // non-empty by construction
        &self.samples[0]
    }

    /// Most recent sample.
    pub fn latest(&self) -> &DailyMetric {
        &self.samples[self.samples.len() - 1]
    }

    /// First sample whose date equals `date`, scanning oldest to newest.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&DailyMetric> {
        self.samples.iter().find(|sample| sample.date == date)
    }
}
