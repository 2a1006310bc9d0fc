pub mod analyze;
pub mod constants;
pub mod error;
pub mod growth;
pub mod metrics;
pub mod projection;
pub mod series;

pub use analyze::{GrowthAnalyzer, GrowthAnalyzerBuilder};
pub use error::{GrowthError, GrowthResult};
pub use metrics::{GrowthReport, ProjectionMetrics};
pub use series::{DailyMetric, MetricKind, MetricSeries};
