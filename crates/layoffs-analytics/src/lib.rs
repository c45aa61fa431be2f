//! Analytics views over the clean layoffs dataset.
//!
//! Every view is a pure function of the clean records and can be computed
//! independently of the others. [`analyze`] bundles all of them into an
//! [`AnalyticsReport`] for output.

pub mod ranking;
pub mod report;
pub mod shutdown;
pub mod summary;
pub mod timeline;
pub mod totals;

pub use ranking::{YearRank, dense_rank, top_companies_per_year};
pub use report::{AnalyticsReport, VIEWS, ViewInfo, analyze};
pub use shutdown::{
    ShutdownEntry, shutdown_count, shutdown_funding_ranking, shutdown_headcount_ranking,
    total_shutdowns,
};
pub use summary::{
    DateRange, average_percentage, date_range, peak_percentage, peak_single_layoff,
};
pub use timeline::{MonthlyTotal, RollingTotal, monthly_totals, rolling_totals};
pub use totals::{
    GroupAverage, GroupTotal, YearTotal, average_percentage_by_industry, totals_by_company,
    totals_by_country, totals_by_industry, totals_by_stage, totals_by_year,
};
