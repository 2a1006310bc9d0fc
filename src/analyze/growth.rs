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

//! Growth rate estimation over a metric series.
//!
//! All rates use the midpoint formula
//! `(end - start) / ((start + end) / 2)`, which stays symmetric when the
//! series is read backwards.

use super::constants::MONTHLY_GROWTH_STEPS;
use super::series::{DailyMetric, MetricSeries};
use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::debug;

/// Midpoint growth rate between two samples, as a fraction.
///
/// Returns 0.0 when the midpoint is zero (e.g. both values are zero) so a
/// NaN never reaches the projections.
pub fn midpoint_growth_rate(starting: &DailyMetric, ending: &DailyMetric) -> f64 {
    let start = starting.total as f64;
    let end = ending.total as f64;
    let midpoint = (start + end) / 2.0;

    if midpoint == 0.0 {
        return 0.0;
    }

    (end - start) / midpoint
}

/// Smoothed month-over-month growth, as a percentage.
///
/// Walks back from the latest sample one calendar month at a time (see
/// [`one_month_before`]) for `MONTHLY_GROWTH_STEPS` steps. Each step looks up
/// the sample dated exactly one month earlier and falls back to the earliest
/// sample of the series when there is none. The step rates are averaged.
pub fn monthly_growth_pct(series: &MetricSeries) -> f64 {
    let earliest = series.earliest();
    let mut ending = series.latest();
    let mut rates = Vec::with_capacity(MONTHLY_GROWTH_STEPS);

    for _ in 0..MONTHLY_GROWTH_STEPS {
        let starting = one_month_before(ending.date)
            .and_then(|date| series.find_by_date(date))
            .unwrap_or(earliest);

        rates.push(midpoint_growth_rate(starting, ending));
        ending = starting;
    }

    debug!("Monthly {} growth rates={:?}", series.kind(), rates);

    average(&rates) * 100.0
}

/// Same day number one month earlier.
///
/// A day past the end of the previous month rolls forward into the
/// following month by the overflow, so 31 March steps back to 2 March in a
/// leap year and 3 March otherwise.
pub fn one_month_before(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_sub_months(Months::new(1))?
        .checked_add_days(Days::new(u64::from(date.day0())))
}

/// Growth between the earliest and latest sample, as a percentage.
pub fn yearly_growth_pct(series: &MetricSeries) -> f64 {
    midpoint_growth_rate(series.earliest(), series.latest()) * 100.0
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
