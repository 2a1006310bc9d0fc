use super::constants::{LONG_HORIZON_YEARS, SHORT_HORIZON_YEARS};
use super::growth::{monthly_growth_pct, yearly_growth_pct};
use super::projection::project;
use super::series::MetricSeries;
use crate::util::util::{format_bytes, format_count, format_decimal};
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use std::fmt::{Display, Formatter, Result as FmtResult, Write};

const RULE_WIDTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMetrics {
    pub size_bytes_1_year: i64,
    pub size_bytes_5_year: i64,
    pub object_count_1_year: i64,
    pub object_count_5_year: i64,
}

/// Current totals, growth rates (in percent) and projections of a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub total_size_bytes: i64,
    pub total_object_count: i64,
    pub size_growth_monthly: f64,
    pub size_growth_yearly: f64,
    pub object_growth_monthly: f64,
    pub object_growth_yearly: f64,
    pub projections: ProjectionMetrics,
}

impl GrowthReport {
    /// Build a report from the size and object count series.
    ///
    /// Totals are the latest sample of each series. Projections compound the
    /// monthly rate.
    pub fn from_series(size: &MetricSeries, objects: &MetricSeries) -> Self {
        let total_size_bytes = size.latest().total;
        let total_object_count = objects.latest().total;

        let size_growth_monthly = monthly_growth_pct(size);
        let object_growth_monthly = monthly_growth_pct(objects);

        let size_rate = size_growth_monthly / 100.0;
        let object_rate = object_growth_monthly / 100.0;

        Self {
            total_size_bytes,
            total_object_count,
            size_growth_monthly,
            size_growth_yearly: yearly_growth_pct(size),
            object_growth_monthly,
            object_growth_yearly: yearly_growth_pct(objects),
            projections: ProjectionMetrics {
                size_bytes_1_year: project(total_size_bytes, SHORT_HORIZON_YEARS, size_rate),
                size_bytes_5_year: project(total_size_bytes, LONG_HORIZON_YEARS, size_rate),
                object_count_1_year: project(total_object_count, SHORT_HORIZON_YEARS, object_rate),
                object_count_5_year: project(total_object_count, LONG_HORIZON_YEARS, object_rate),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, JsonError> {
        serde_json::from_str(json)
    }

    /// Plain text rendering, optionally without the title banner.
    pub fn to_text(&self, show_banner: bool) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_text(&mut out, show_banner);
        out
    }

    fn write_text<W: Write>(&self, f: &mut W, show_banner: bool) -> FmtResult {
        if show_banner {
            writeln!(f, "{}", "━".repeat(RULE_WIDTH))?;
            writeln!(f, " Bucket Growth")?;
            writeln!(f, "{}", "━".repeat(RULE_WIDTH))?;
        }

        let projections = &self.projections;

        writeln!(f)?;
        writeln!(f, " {:<25} {}", "Total Size", bytes(self.total_size_bytes))?;
        writeln!(
            f,
            " {:<25} {}",
            "Total Objects",
            format_count(self.total_object_count)
        )?;

        writeln!(f)?;
        writeln!(
            f,
            " {:<25} {}%/mo, {}%/yr",
            "Size Growth",
            format_decimal(self.size_growth_monthly, 2),
            format_decimal(self.size_growth_yearly, 2)
        )?;
        writeln!(
            f,
            " {:<25} {}%/mo, {}%/yr",
            "Object Growth",
            format_decimal(self.object_growth_monthly, 2),
            format_decimal(self.object_growth_yearly, 2)
        )?;

        writeln!(f)?;
        writeln!(
            f,
            " {:<25} {} (1 yr), {} (5 yr)",
            "Size Projection",
            bytes(projections.size_bytes_1_year),
            bytes(projections.size_bytes_5_year)
        )?;
        writeln!(
            f,
            " {:<25} {} (1 yr), {} (5 yr)",
            "Object Count Projection",
            format_count(projections.object_count_1_year),
            format_count(projections.object_count_5_year)
        )
    }
}

impl Display for GrowthReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.write_text(f, true)
    }
}

/// Negative sizes render as 0 B.
fn bytes(value: i64) -> String {
    format_bytes(u64::try_from(value).unwrap_or(0))
}
