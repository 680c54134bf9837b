use log::{debug, info};

use crate::chart::{build_chart_series, ChartSeries};
use crate::error::{DashboardError, Result};
use crate::filter::{apply_criteria, FilterCriteria};
use crate::schema::{CategoryStat, DashboardPayload, ExpenseRecord};
use crate::totals::{aggregate_visible, FilteredTotals};

/// Authoritative supplier of the view's data. `load` is consulted once at
/// construction and again whenever filters are cleared, so totals are
/// re-derived from the source rather than from a client-cached figure.
pub trait RecordSource {
    fn load(&self) -> Result<DashboardPayload>;
}

/// The external charting collaborator. Receives the built series together
/// with precomputed tooltip labels; how it draws them is its own business.
pub trait ChartRenderer {
    fn render(&mut self, series: &ChartSeries, tooltip_labels: &[String]) -> Result<()>;
}

/// Raw values read from the three filter controls. `None` means the control
/// is absent from the view; the corresponding criterion is skipped silently.
#[derive(Debug, Clone, Default)]
pub struct ControlValues {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
}

impl ControlValues {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_controls(
            self.start_date.as_deref().unwrap_or(""),
            self.end_date.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(""),
        )
    }
}

/// One dashboard view's worth of state: the record list, the current
/// visibility flags, the category aggregates, and the last computed totals.
/// Instantiated once per view; every operation runs synchronously on it.
pub struct Dashboard {
    records: Vec<ExpenseRecord>,
    visibility: Vec<bool>,
    category_stats: Vec<CategoryStat>,
    totals: FilteredTotals,
    chart: Option<ChartSeries>,
}

impl Dashboard {
    /// Populates the view state once from the initial server payload.
    pub fn from_source(source: &dyn RecordSource) -> Result<Self> {
        let payload = source.load()?;
        info!(
            "Dashboard loaded: {} records, {} category stats",
            payload.records.len(),
            payload.category_stats.len()
        );
        Ok(Self::from_payload(payload))
    }

    pub fn from_payload(payload: DashboardPayload) -> Self {
        let visibility = vec![true; payload.records.len()];
        let totals = aggregate_visible(&payload.records, &visibility);
        Self {
            records: payload.records,
            visibility,
            category_stats: payload.category_stats,
            totals,
            chart: None,
        }
    }

    /// Applies the current control values: recomputes the visible set
    /// wholesale and the totals over it. Reapplying unchanged values yields
    /// the same visible set and totals.
    pub fn apply_filters(&mut self, controls: &ControlValues) -> FilteredTotals {
        let criteria = controls.to_criteria();
        self.apply_criteria(&criteria)
    }

    pub fn apply_criteria(&mut self, criteria: &FilterCriteria) -> FilteredTotals {
        self.visibility = apply_criteria(&self.records, criteria);
        self.totals = aggregate_visible(&self.records, &self.visibility);
        debug!(
            "Filter applied: {} of {} records visible, total {}",
            self.totals.count,
            self.records.len(),
            self.totals.total
        );
        self.totals
    }

    /// Clears every criterion and resynchronizes with the authoritative
    /// source. Filtering is a client-approximate read; clearing is the point
    /// where authoritative totals are re-established.
    pub fn clear_filters(&mut self, source: &dyn RecordSource) -> Result<FilteredTotals> {
        let payload = source.load()?;
        self.records = payload.records;
        self.category_stats = payload.category_stats;
        self.visibility = vec![true; self.records.len()];
        self.totals = aggregate_visible(&self.records, &self.visibility);
        info!(
            "Filters cleared, resynchronized {} records from source",
            self.records.len()
        );
        Ok(self.totals)
    }

    /// Builds the chart series from the category aggregates and hands them
    /// to the renderer. When no category has a positive total, nothing is
    /// rendered and `Ok(false)` is returned.
    pub fn initialize_chart(&mut self, renderer: &mut dyn ChartRenderer) -> Result<bool> {
        match build_chart_series(&self.category_stats) {
            Some(series) => {
                let labels = series.tooltip_labels();
                renderer.render(&series, &labels)?;
                self.chart = Some(series);
                Ok(true)
            }
            None => {
                debug!("No category with a positive total, chart skipped");
                Ok(false)
            }
        }
    }

    /// Looks up a record for the edit dialog to prefill itself from.
    pub fn record_for_edit(&self, id: &str) -> Result<&ExpenseRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| DashboardError::MissingElement(format!("record row '{}'", id)))
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn visibility(&self) -> &[bool] {
        &self.visibility
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records
            .iter()
            .zip(&self.visibility)
            .filter_map(|(r, v)| v.then_some(r))
    }

    pub fn visible_count(&self) -> usize {
        self.totals.count
    }

    pub fn totals(&self) -> FilteredTotals {
        self.totals
    }

    /// The text shown in the totals row of the table footer.
    pub fn totals_display(&self) -> String {
        self.totals.display()
    }

    pub fn category_stats(&self) -> &[CategoryStat] {
        &self.category_stats
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }
}
