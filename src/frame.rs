//! Tabular views for renderers. Columns are plain scalars so any table or plot
//! front end can consume them without knowing the scheduling types; times are
//! `f64` units.

use crate::catalog::Catalog;
use crate::schedule::Schedule;
use polars::prelude::PlSmallStr;
use polars::prelude::*;

impl Catalog {
    /// Columns: `task`, `duration`, `prerequisites` (comma-joined), catalog order.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let names: Vec<&str> = self.names().collect();
        let durations: Vec<f64> = self.tasks().map(|task| task.duration().as_f64()).collect();
        let prerequisites: Vec<String> = self
            .tasks()
            .map(|task| task.prerequisites().join(", "))
            .collect();

        DataFrame::new(vec![
            Series::new(PlSmallStr::from_static("task"), names).into_column(),
            Series::new(PlSmallStr::from_static("duration"), durations).into_column(),
            Series::new(PlSmallStr::from_static("prerequisites"), prerequisites).into_column(),
        ])
    }
}

impl Schedule {
    /// One row per activity in start order.
    ///
    /// Columns: `task`, `duration`, `start`, `finish`, `latest_start`,
    /// `latest_finish`, `slack`, `critical`.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let rows = self.ordered_by_start();
        let height = rows.len();

        let mut names: Vec<&str> = Vec::with_capacity(height);
        let mut durations: Vec<f64> = Vec::with_capacity(height);
        let mut starts: Vec<f64> = Vec::with_capacity(height);
        let mut finishes: Vec<f64> = Vec::with_capacity(height);
        let mut latest_starts: Vec<f64> = Vec::with_capacity(height);
        let mut latest_finishes: Vec<f64> = Vec::with_capacity(height);
        let mut slacks: Vec<f64> = Vec::with_capacity(height);
        let mut critical: Vec<bool> = Vec::with_capacity(height);

        for activity in rows {
            names.push(activity.name());
            durations.push(activity.duration().as_f64());
            starts.push(activity.start().as_f64());
            finishes.push(activity.finish().as_f64());
            latest_starts.push(activity.latest_start().as_f64());
            latest_finishes.push(activity.latest_finish().as_f64());
            slacks.push(activity.slack().as_f64());
            critical.push(activity.is_critical());
        }

        DataFrame::new(vec![
            Series::new(PlSmallStr::from_static("task"), names).into_column(),
            Series::new(PlSmallStr::from_static("duration"), durations).into_column(),
            Series::new(PlSmallStr::from_static("start"), starts).into_column(),
            Series::new(PlSmallStr::from_static("finish"), finishes).into_column(),
            Series::new(PlSmallStr::from_static("latest_start"), latest_starts).into_column(),
            Series::new(PlSmallStr::from_static("latest_finish"), latest_finishes).into_column(),
            Series::new(PlSmallStr::from_static("slack"), slacks).into_column(),
            Series::new(PlSmallStr::from_static("critical"), critical).into_column(),
        ])
    }
}
