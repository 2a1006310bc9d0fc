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

//! Constants shared by the growth estimator, projector and analyzer.

/// Number of backward month-over-month steps averaged into the monthly growth rate.
pub const MONTHLY_GROWTH_STEPS: usize = 12;

/// Compounding periods per projected year. Projection rates are monthly.
pub const PERIODS_PER_YEAR: u32 = 12;

/// How far back the analyzer queries the backend, in months.
pub const LOOKBACK_MONTHS: u32 = 12;

/// Short projection horizon, in years.
pub const SHORT_HORIZON_YEARS: u32 = 1;

/// Long projection horizon, in years.
pub const LONG_HORIZON_YEARS: u32 = 5;
