use crate::currency::format_amount;
use crate::schema::CategoryStat;

/// The three parallel series a doughnut chart is drawn from. Only categories
/// with a positive total are plotted; input order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartSeries {
    /// Percentage share of the plotted entry at `index`, rounded to one
    /// decimal place. The denominator is the sum of plotted values, which is
    /// nonzero by construction.
    pub fn percentage(&self, index: usize) -> f64 {
        let sum: f64 = self.values.iter().sum();
        ((self.values[index] / sum) * 1000.0).round() / 10.0
    }

    /// Tooltip text for the plotted entry at `index`, showing the absolute
    /// value and the percentage share, e.g. `"Food: $70.00 (70.0%)"`.
    pub fn tooltip_label(&self, index: usize) -> String {
        format!(
            "{}: ${} ({:.1}%)",
            self.labels[index],
            format_amount(self.values[index]),
            self.percentage(index)
        )
    }

    pub fn tooltip_labels(&self) -> Vec<String> {
        (0..self.labels.len()).map(|i| self.tooltip_label(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Transforms the server-supplied category aggregates into plotted series.
/// Returns `None` when no category has a positive total: no chart is
/// constructed in that case, which is a no-op rather than an error.
pub fn build_chart_series(stats: &[CategoryStat]) -> Option<ChartSeries> {
    let plotted: Vec<&CategoryStat> = stats.iter().filter(|s| s.total > 0.0).collect();
    if plotted.is_empty() {
        return None;
    }

    Some(ChartSeries {
        labels: plotted.iter().map(|s| s.category.clone()).collect(),
        values: plotted.iter().map(|s| s.total).collect(),
        colors: plotted.iter().map(|s| s.color.clone()).collect(),
    })
}
