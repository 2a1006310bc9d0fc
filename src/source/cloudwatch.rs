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

use super::config::SourceConfig;
use super::error::{SourceError, SourceResult};
use super::provider::SampleSource;
use crate::analyze::series::{DailyMetric, MetricKind};
use crate::util::retry::{retry_with_backoff, DEFAULT_BASE_DELAY};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudwatch::types::{Datapoint, Dimension, StandardUnit, Statistic};
use aws_sdk_cloudwatch::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Sample source backed by the `AWS/S3` CloudWatch storage metrics.
///
/// S3 publishes `BucketSizeBytes` and `NumberOfObjects` once per day, so
/// each sample is the daily maximum of the metric.
pub struct CloudWatchSource {
    config: SourceConfig,
    client: Client,
    max_retries: usize,
    period_seconds: i32,
}

impl CloudWatchSource {
    /// Create a new CloudWatch source from configuration.
    ///
    /// Credentials and region come from the standard AWS provider chain
    /// unless overridden by the `profile`, `region` or `endpoint` options.
    /// Credentials are resolved lazily, on the first request.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ConfigError` if a numeric option is malformed.
    pub async fn new(config: SourceConfig) -> SourceResult<Self> {
        let max_retries = config.max_retries()?;
        let period_seconds = config.period_seconds()?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = config.get_option("profile") {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = config.get_option("region") {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = config.get_option("endpoint") {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        info!(
            "CloudWatch source ready, region={:?}, profile={:?}, endpoint={:?}",
            sdk_config.region().map(|r| r.as_ref().to_string()),
            config.get_option("profile"),
            config.get_option("endpoint"),
        );

        Ok(Self {
            client: Client::new(&sdk_config),
            config,
            max_retries,
            period_seconds,
        })
    }
}

#[async_trait]
impl SampleSource for CloudWatchSource {
    fn name(&self) -> &str {
        "cloudwatch"
    }

    async fn fetch_daily_samples(
        &self,
        entity_id: &str,
        kind: MetricKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SourceResult<Vec<DailyMetric>> {
        let storage_type = storage_type_for(&self.config, kind);
        let operation_name = format!("GetMetricStatistics({})", kind.metric_name());

        debug!(
            "Querying {}/{} for bucket={}, storage_type={}, start={}, end={}",
            kind.namespace(),
            kind.metric_name(),
            entity_id,
            storage_type,
            start,
            end
        );

        let response = retry_with_backoff(
            self.max_retries,
            DEFAULT_BASE_DELAY,
            &operation_name,
            || {
                self.client
                    .get_metric_statistics()
                    .namespace(kind.namespace())
                    .metric_name(kind.metric_name())
                    .dimensions(
                        Dimension::builder()
                            .name("BucketName")
                            .value(entity_id)
                            .build(),
                    )
                    .dimensions(
                        Dimension::builder()
                            .name("StorageType")
                            .value(storage_type.as_str())
                            .build(),
                    )
                    .start_time(AwsDateTime::from_secs(start.timestamp()))
                    .end_time(AwsDateTime::from_secs(end.timestamp()))
                    .period(self.period_seconds)
                    .statistics(Statistic::Maximum)
                    .unit(StandardUnit::from(kind.unit()))
                    .send()
            },
        )
        .await
        .map_err(|e| SourceError::RequestError(DisplayErrorContext(&e).to_string()))?;

        let samples = datapoints_to_samples(response.datapoints())?;
        debug!(
            "{} returned {} datapoints for bucket={}",
            operation_name,
            samples.len(),
            entity_id
        );
        Ok(samples)
    }
}

/// `StorageType` dimension for a metric, honouring the per-metric override.
fn storage_type_for(config: &SourceConfig, kind: MetricKind) -> String {
    config
        .get_option(kind.storage_type_option())
        .cloned()
        .unwrap_or_else(|| kind.default_storage_type().to_string())
}

/// Convert raw datapoints into daily samples.
///
/// Datapoints without a timestamp or a maximum are skipped. Values are
/// truncated toward zero.
fn datapoints_to_samples(datapoints: &[Datapoint]) -> SourceResult<Vec<DailyMetric>> {
    let mut samples = Vec::with_capacity(datapoints.len());

    for datapoint in datapoints {
        let (Some(timestamp), Some(maximum)) = (datapoint.timestamp(), datapoint.maximum()) else {
            warn!("Skipping incomplete datapoint: {:?}", datapoint);
            continue;
        };

        let date = DateTime::<Utc>::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
            .ok_or_else(|| {
                SourceError::InvalidDatapoint(format!("timestamp out of range: {:?}", timestamp))
            })?
            .date_naive();

        samples.push(DailyMetric::new(date, maximum as i64));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datapoint(secs: i64, maximum: f64) -> Datapoint {
        Datapoint::builder()
            .timestamp(AwsDateTime::from_secs(secs))
            .maximum(maximum)
            .build()
    }

    #[test]
    fn test_datapoints_to_samples() {
        // 2024-06-15T00:00:00Z and 2024-06-14T00:00:00Z
        let datapoints = vec![
            datapoint(1_718_409_600, 82_854_982.0),
            datapoint(1_718_323_200, 82_000_000.9),
        ];

        let samples = datapoints_to_samples(&datapoints).unwrap();

        assert_eq!(
            samples,
            vec![
                DailyMetric::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 82_854_982),
                DailyMetric::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), 82_000_000),
            ]
        );
    }

    #[test]
    fn test_datapoints_to_samples_uses_utc_date() {
        // 2024-06-15T23:59:59Z
        let samples = datapoints_to_samples(&[datapoint(1_718_495_999, 1.0)]).unwrap();
        assert_eq!(samples[0].date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_datapoints_to_samples_skips_incomplete() {
        let datapoints = vec![
            Datapoint::builder().maximum(5.0).build(),
            Datapoint::builder()
                .timestamp(AwsDateTime::from_secs(1_718_409_600))
                .build(),
            datapoint(1_718_409_600, 7.0),
        ];

        let samples = datapoints_to_samples(&datapoints).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].total, 7);
    }

    #[test]
    fn test_datapoints_to_samples_empty() {
        assert!(datapoints_to_samples(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_storage_type_defaults() {
        let config = SourceConfig::cloudwatch();
        assert_eq!(storage_type_for(&config, MetricKind::Size), "StandardStorage");
        assert_eq!(
            storage_type_for(&config, MetricKind::ObjectCount),
            "AllStorageTypes"
        );
    }

    #[test]
    fn test_storage_type_override() {
        let config = SourceConfig::cloudwatch().with_option("size_storage_type", "GlacierStorage");
        assert_eq!(storage_type_for(&config, MetricKind::Size), "GlacierStorage");
        assert_eq!(
            storage_type_for(&config, MetricKind::ObjectCount),
            "AllStorageTypes"
        );
    }

    #[tokio::test]
    async fn test_new_rejects_malformed_options() {
        let config = SourceConfig::cloudwatch().with_option("max_retries", "many");
        let result = CloudWatchSource::new(config).await;
        assert!(matches!(result, Err(SourceError::ConfigError(_))));

        let config = SourceConfig::cloudwatch().with_option("period_seconds", "0");
        let result = CloudWatchSource::new(config).await;
        assert!(matches!(result, Err(SourceError::ConfigError(_))));

        let config = SourceConfig::cloudwatch().with_option("period_seconds", "3600");
        let result = CloudWatchSource::new(config).await;
        assert!(matches!(result, Err(SourceError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_new_with_explicit_region() {
        let config = SourceConfig::cloudwatch()
            .with_option("region", "eu-west-1")
            .with_option("endpoint", "http://localhost:4566");

        let source = CloudWatchSource::new(config).await.unwrap();
        assert_eq!(source.name(), "cloudwatch");
        assert_eq!(source.period_seconds, 86_400);
        assert_eq!(source.max_retries, 3);
    }
}
