//! All views computed together for output.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use layoffs_model::{AnalyticsOptions, Record};

use crate::ranking::{YearRank, top_companies_per_year};
use crate::shutdown::{
    ShutdownEntry, shutdown_count, shutdown_funding_ranking, shutdown_headcount_ranking,
    total_shutdowns,
};
use crate::summary::{
    DateRange, average_percentage, date_range, peak_percentage, peak_single_layoff,
};
use crate::timeline::{MonthlyTotal, RollingTotal, monthly_totals, rolling_totals};
use crate::totals::{
    GroupAverage, GroupTotal, YearTotal, average_percentage_by_industry, totals_by_company,
    totals_by_country, totals_by_industry, totals_by_stage, totals_by_year,
};

/// Name and description of one analytics view.
#[derive(Debug, Clone, Copy)]
pub struct ViewInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog of the views in [`AnalyticsReport`], in report order.
pub const VIEWS: [ViewInfo; 17] = [
    ViewInfo { name: "peak_single_layoff", description: "Largest single-event layoff count" },
    ViewInfo { name: "total_shutdowns", description: "Records with 100% of staff laid off" },
    ViewInfo { name: "shutdown_count", description: "Number of total shutdowns" },
    ViewInfo { name: "shutdown_headcount", description: "Total shutdowns ranked by layoff count" },
    ViewInfo { name: "shutdown_funding", description: "Total shutdowns ranked by funds raised" },
    ViewInfo { name: "by_company", description: "Layoff totals per company" },
    ViewInfo { name: "by_industry", description: "Layoff totals per industry" },
    ViewInfo { name: "by_country", description: "Layoff totals per country" },
    ViewInfo { name: "date_range", description: "Earliest and latest layoff dates" },
    ViewInfo { name: "rolling_monthly", description: "Cumulative layoffs by month" },
    ViewInfo { name: "top_companies_per_year", description: "Top companies per year by dense rank" },
    ViewInfo { name: "average_percentage", description: "Mean share of workforce laid off" },
    ViewInfo { name: "average_percentage_by_industry", description: "Mean share laid off per industry" },
    ViewInfo { name: "by_year", description: "Layoff totals per year" },
    ViewInfo { name: "by_stage", description: "Layoff totals per funding stage" },
    ViewInfo { name: "monthly", description: "Layoff totals per month" },
    ViewInfo { name: "peak_percentage", description: "Largest share of workforce laid off" },
];

/// Every analytics view over one clean dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub record_count: usize,
    pub peak_single_layoff: Option<i64>,
    pub total_shutdowns: Vec<Record>,
    pub shutdown_count: usize,
    pub shutdown_headcount: Vec<ShutdownEntry>,
    pub shutdown_funding: Vec<ShutdownEntry>,
    pub by_company: Vec<GroupTotal>,
    pub by_industry: Vec<GroupTotal>,
    pub by_country: Vec<GroupTotal>,
    pub date_range: Option<DateRange>,
    pub rolling_monthly: Vec<RollingTotal>,
    pub top_companies_per_year: Vec<YearRank>,
    pub average_percentage: Option<f64>,
    pub average_percentage_by_industry: Vec<GroupAverage>,
    pub by_year: Vec<YearTotal>,
    pub by_stage: Vec<GroupTotal>,
    pub monthly: Vec<MonthlyTotal>,
    pub peak_percentage: Option<f64>,
}

/// Compute every view over the clean records.
pub fn analyze(records: &[Record], options: &AnalyticsOptions) -> AnalyticsReport {
    let span = info_span!("analyze", records = records.len(), top_n = options.top_n);
    let _guard = span.enter();
    let start = Instant::now();

    let report = AnalyticsReport {
        record_count: records.len(),
        peak_single_layoff: peak_single_layoff(records),
        total_shutdowns: total_shutdowns(records)
            .into_iter()
            .cloned()
            .collect(),
        shutdown_count: shutdown_count(records),
        shutdown_headcount: shutdown_headcount_ranking(records),
        shutdown_funding: shutdown_funding_ranking(records),
        by_company: totals_by_company(records),
        by_industry: totals_by_industry(records),
        by_country: totals_by_country(records),
        date_range: date_range(records),
        rolling_monthly: rolling_totals(records),
        top_companies_per_year: top_companies_per_year(records, options.top_n),
        average_percentage: average_percentage(records),
        average_percentage_by_industry: average_percentage_by_industry(records),
        by_year: totals_by_year(records),
        by_stage: totals_by_stage(records),
        monthly: monthly_totals(records),
        peak_percentage: peak_percentage(records),
    };
    debug!(
        duration_ms = start.elapsed().as_millis(),
        shutdowns = report.shutdown_count,
        months = report.monthly.len(),
        "analytics computed"
    );
    report
}
