use std::collections::BTreeMap;
use std::fmt;
use chrono::{DateTime, NaiveDate};
use log::warn;
use crate::manager_nws::models::ForecastPeriod;

/// Number of days shown in a weekly forecast
pub const DEFAULT_MAX_DAYS: usize = 7;

#[derive(Debug)]
pub enum AggregateError {
    UnparseableTimestamp(String),
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AggregateError::UnparseableTimestamp(e) => write!(f, "AggregateError::UnparseableTimestamp: {}", e),
        }
    }
}

/// All forecast periods falling on one calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub day_name: String,
    pub periods: Vec<ForecastPeriod>,
    pub high_temp: Option<i32>,
    pub low_temp: Option<i32>,
}

impl DailySummary {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: date.format("%A").to_string(),
            periods: Vec::new(),
            high_temp: None,
            low_temp: None,
        }
    }

    fn add(&mut self, period: &ForecastPeriod) {
        if let Some(temp) = period.temperature {
            if period.is_daytime() {
                self.high_temp = Some(self.high_temp.map_or(temp, |t| t.max(temp)));
            } else {
                self.low_temp = Some(self.low_temp.map_or(temp, |t| t.min(temp)));
            }
        }
        self.periods.push(period.clone());
    }
}

/// Calendar date of a period, taken in the offset its start time is given in
///
/// Accepts RFC 3339 as NWS sends it, and ISO 8601 offsets without a colon (e.g. +0500).
///
/// # Arguments
///
/// * 'period' - forecast period with an ISO 8601 start time
pub fn period_date(period: &ForecastPeriod) -> Result<NaiveDate, AggregateError> {
    let start_time = period.start_time.as_deref()
        .ok_or_else(|| AggregateError::UnparseableTimestamp("missing start time".to_string()))?;

    DateTime::parse_from_rfc3339(start_time)
        .or_else(|_| DateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|dt| dt.date_naive())
        .map_err(|e| AggregateError::UnparseableTimestamp(format!("'{}': {}", start_time, e)))
}

/// Groups forecast periods per calendar date and returns the first `max_days` dates in
/// ascending order, each with its high (daytime) and low (nighttime) temperature.
///
/// Periods with a start time that can't be parsed are logged and left out, the rest
/// are still aggregated.
///
/// # Arguments
///
/// * 'periods' - forecast periods, normally in the order the provider published them
/// * 'max_days' - max number of days to return
pub fn aggregate(periods: &[ForecastPeriod], max_days: usize) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for period in periods {
        let date = match period_date(period) {
            Ok(date) => date,
            Err(e) => {
                warn!("skipping forecast period: {}", e);
                continue;
            }
        };

        days.entry(date)
            .or_insert_with(|| DailySummary::new(date))
            .add(period);
    }

    days.into_values().take(max_days).collect()
}
