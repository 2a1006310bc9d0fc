use super::constants::LOOKBACK_MONTHS;
use super::error::{GrowthError, GrowthResult};
use super::metrics::GrowthReport;
use super::series::{DailyMetric, MetricKind, MetricSeries};
use crate::source::{SampleSource, SampleSourceFactory, SourceConfig, SourceResult};
use crate::util::util::{measure_dur, measure_dur_async};
use chrono::{DateTime, Months, Utc};
use std::sync::Arc;
use tracing::info;

/// Builder for constructing a `GrowthAnalyzer` instance.
///
/// # Examples
///
/// ```no_run
/// use bucket_growth::analyze::GrowthAnalyzer;
/// use bucket_growth::source::SourceConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let config = SourceConfig::cloudwatch().with_option("region", "us-east-1");
///
/// let analyzer = GrowthAnalyzer::builder(config).build().await?;
/// # Ok(())
/// # }
/// ```
pub struct GrowthAnalyzerBuilder {
    config: SourceConfig,
}

impl GrowthAnalyzerBuilder {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Builds the `GrowthAnalyzer` instance.
    ///
    /// This method performs the async initialization of the sample source.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample source cannot be initialized.
    pub async fn build(self) -> SourceResult<GrowthAnalyzer> {
        let source = SampleSourceFactory::from_config(self.config).await?;
        Ok(GrowthAnalyzer { source })
    }
}

/// Measures the growth of a bucket from its daily storage metrics.
///
/// Fetches a year of daily size and object count samples, estimates monthly
/// and yearly growth for both and projects them one and five years ahead.
///
/// # Examples
///
/// ```no_run
/// use bucket_growth::{GrowthAnalyzer, SourceConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let analyzer = GrowthAnalyzer::builder(SourceConfig::cloudwatch())
///     .build()
///     .await?;
///
/// let report = analyzer.measure("my-bucket").await?;
/// println!("{}", report);
/// # Ok(())
/// # }
/// ```
pub struct GrowthAnalyzer {
    source: Arc<dyn SampleSource>,
}

impl GrowthAnalyzer {
    pub fn builder(config: SourceConfig) -> GrowthAnalyzerBuilder {
        GrowthAnalyzerBuilder::new(config)
    }

    /// Creates an analyzer over an already initialized sample source.
    pub fn new(source: Arc<dyn SampleSource>) -> Self {
        Self { source }
    }

    /// Measure a bucket over the window ending now.
    pub async fn measure(&self, bucket: &str) -> GrowthResult<GrowthReport> {
        self.measure_at(bucket, Utc::now()).await
    }

    /// Measure a bucket over the window ending at `now`.
    ///
    /// Both series are fetched concurrently; the first fetch error aborts the
    /// measurement and is returned unchanged.
    ///
    /// # Errors
    ///
    /// * `GrowthError::Fetch` - If either request fails
    /// * `GrowthError::EmptySeries` - If a metric has no samples, size checked first
    pub async fn measure_at(
        &self,
        bucket: &str,
        now: DateTime<Utc>,
    ) -> GrowthResult<GrowthReport> {
        let start = now
            .checked_sub_months(Months::new(LOOKBACK_MONTHS))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        info!(
            "Measuring bucket={}, source={}, start={}, end={}",
            bucket,
            self.source.name(),
            start,
            now
        );

        let (size_samples, object_samples) = futures::try_join!(
            self.fetch(bucket, MetricKind::Size, start, now),
            self.fetch(bucket, MetricKind::ObjectCount, start, now),
        )?;

        let size = MetricSeries::new(MetricKind::Size, size_samples)?;
        let objects = MetricSeries::new(MetricKind::ObjectCount, object_samples)?;

        measure_dur(
            "build_report",
            || Ok::<_, GrowthError>(GrowthReport::from_series(&size, &objects)),
            Some(|r: &GrowthReport| {
                format!(
                    "size_growth_monthly={:.4}, object_growth_monthly={:.4}",
                    r.size_growth_monthly, r.object_growth_monthly
                )
            }),
        )
    }

    async fn fetch(
        &self,
        bucket: &str,
        kind: MetricKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GrowthResult<Vec<DailyMetric>> {
        let metric_name = match kind {
            MetricKind::Size => "fetch_size_samples",
            MetricKind::ObjectCount => "fetch_object_samples",
        };

        let samples = measure_dur_async(
            metric_name,
            || self.source.fetch_daily_samples(bucket, kind, start, end),
            Some(|s: &Vec<DailyMetric>| format!("Fetched samples count={}", s.len())),
        )
        .await?;

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::projection::project;
    use crate::source::SourceError;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};
    use std::sync::Mutex;

    type Window = (String, MetricKind, DateTime<Utc>, DateTime<Utc>);

    struct MockSource {
        size: Vec<DailyMetric>,
        objects: Vec<DailyMetric>,
        fail_on: Option<MetricKind>,
        calls: Mutex<Vec<Window>>,
    }

    impl MockSource {
        fn new(size: Vec<DailyMetric>, objects: Vec<DailyMetric>) -> Self {
            Self {
                size,
                objects,
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(kind: MetricKind) -> Self {
            Self {
                fail_on: Some(kind),
                ..Self::new(Vec::new(), Vec::new())
            }
        }
    }

    #[async_trait]
    impl SampleSource for MockSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_daily_samples(
            &self,
            entity_id: &str,
            kind: MetricKind,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> SourceResult<Vec<DailyMetric>> {
            self.calls
                .lock()
                .unwrap()
                .push((entity_id.to_string(), kind, start, end));

            if self.fail_on == Some(kind) {
                return Err(SourceError::RequestError("AccessDenied".to_string()));
            }

            Ok(match kind {
                MetricKind::Size => self.size.clone(),
                MetricKind::ObjectCount => self.objects.clone(),
            })
        }
    }

    fn sample(y: i32, m: u32, d: u32, total: i64) -> DailyMetric {
        DailyMetric::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), total)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 16, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_measure_at_builds_report() {
        let source = Arc::new(MockSource::new(
            vec![
                sample(2024, 6, 15, 1000),
                sample(2024, 4, 15, 100),
                sample(2024, 5, 15, 200),
            ],
            vec![sample(2024, 5, 15, 40), sample(2024, 6, 15, 60)],
        ));
        let analyzer = GrowthAnalyzer::new(source.clone());

        let report = analyzer.measure_at("my-bucket", now()).await.unwrap();

        assert_eq!(report.total_size_bytes, 1000);
        assert_eq!(report.total_object_count, 60);
        assert_eq!((report.size_growth_monthly * 100.0).round() / 100.0, 16.67);
        assert_eq!((report.size_growth_yearly * 100.0).round() / 100.0, 163.64);
        // one real step 40->60 (0.4), eleven flat steps
        assert_eq!(
            (report.object_growth_monthly * 10_000.0).round() / 10_000.0,
            3.3333
        );
        assert_eq!(
            report.projections.object_count_5_year,
            project(60, 5, report.object_growth_monthly / 100.0)
        );
    }

    #[tokio::test]
    async fn test_measure_at_queries_twelve_month_window() {
        let source = Arc::new(MockSource::new(
            vec![sample(2024, 6, 15, 1)],
            vec![sample(2024, 6, 15, 1)],
        ));
        let analyzer = GrowthAnalyzer::new(source.clone());

        analyzer.measure_at("my-bucket", now()).await.unwrap();

        let calls = source.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        for (bucket, _, start, end) in &calls {
            assert_eq!(bucket, "my-bucket");
            assert_eq!(*start, Utc.with_ymd_and_hms(2023, 6, 16, 12, 0, 0).unwrap());
            assert_eq!(*end, now());
        }
        assert!(calls.iter().any(|(_, kind, _, _)| *kind == MetricKind::Size));
        assert!(calls.iter().any(|(_, kind, _, _)| *kind == MetricKind::ObjectCount));
    }

    #[tokio::test]
    async fn test_measure_at_empty_size_series() {
        let source = Arc::new(MockSource::new(Vec::new(), vec![sample(2024, 6, 15, 5)]));
        let analyzer = GrowthAnalyzer::new(source);

        let result = analyzer.measure_at("empty-bucket", now()).await;

        assert!(matches!(
            result,
            Err(GrowthError::EmptySeries(MetricKind::Size))
        ));
    }

    #[tokio::test]
    async fn test_measure_at_empty_series_checks_size_first() {
        let analyzer = GrowthAnalyzer::new(Arc::new(MockSource::new(Vec::new(), Vec::new())));
        let result = analyzer.measure_at("empty-bucket", now()).await;
        assert!(matches!(
            result,
            Err(GrowthError::EmptySeries(MetricKind::Size))
        ));
    }

    #[tokio::test]
    async fn test_measure_at_empty_object_series() {
        let source = Arc::new(MockSource::new(vec![sample(2024, 6, 15, 5)], Vec::new()));
        let analyzer = GrowthAnalyzer::new(source);

        let error = analyzer.measure_at("no-objects", now()).await.unwrap_err();

        assert!(matches!(
            error,
            GrowthError::EmptySeries(MetricKind::ObjectCount)
        ));
        assert_eq!(error.to_string(), "Bucket is empty: no object count data");
    }

    #[tokio::test]
    async fn test_measure_at_propagates_fetch_error() {
        let analyzer = GrowthAnalyzer::new(Arc::new(MockSource::failing(MetricKind::ObjectCount)));

        let error = analyzer.measure_at("my-bucket", now()).await.unwrap_err();

        assert!(matches!(
            error,
            GrowthError::Fetch(SourceError::RequestError(_))
        ));
        assert_eq!(error.to_string(), "Request error: AccessDenied");
    }

    #[tokio::test]
    async fn test_builder_creates_cloudwatch_source() {
        let analyzer = GrowthAnalyzer::builder(
            SourceConfig::cloudwatch().with_option("region", "us-east-1"),
        )
        .build()
        .await
        .unwrap();

        assert_eq!(analyzer.source.name(), "cloudwatch");
    }

    #[tokio::test]
    async fn test_builder_rejects_bad_config() {
        let result = GrowthAnalyzer::builder(
            SourceConfig::cloudwatch().with_option("max_retries", "-1"),
        )
        .build()
        .await;

        assert!(result.is_err());
    }
}
