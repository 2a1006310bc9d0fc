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

use super::constants::PERIODS_PER_YEAR;

/// Compound `base_value` forward by `num_years` at a monthly rate.
///
/// The rate is a fraction (0.1 for 10%) and is applied `num_years * 12`
/// times. The result is truncated toward zero.
///
/// Degenerate inputs:
/// * `num_years == 0` returns 0, not `base_value`
/// * `base_value == 0` returns 0
/// * `periodic_rate == 0.0` returns `base_value`
///
/// # Examples
///
/// ```
/// use bucket_growth::analyze::projection::project;
///
/// assert_eq!(project(1000, 1, 0.1), 3138);
/// ```
pub fn project(base_value: i64, num_years: u32, periodic_rate: f64) -> i64 {
    if num_years == 0 {
        return 0;
    }

    if base_value == 0 {
        return 0;
    }

    if periodic_rate == 0.0 {
        return base_value;
    }

    let periods = f64::from(num_years) * f64::from(PERIODS_PER_YEAR);
    let compound_growth = (1.0 + periodic_rate).powf(periods);

    // `as` saturates at the i64 bounds and truncates toward zero
    (base_value as f64 * compound_growth) as i64
}
