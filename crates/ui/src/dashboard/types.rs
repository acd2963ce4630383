//! Metric card contents.

use rendering::format::group_thousands;
use simulation::labels::CardText;
use simulation::{DashboardLabels, ProjectedIndicators};

/// Text of one metric card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub caption: String,
}

fn card(text: &CardText, value: String) -> MetricCard {
    MetricCard {
        label: text.label.clone(),
        value,
        caption: text.caption.clone(),
    }
}

/// Value followed by its unit, or the bare value when the unit is empty.
fn with_unit(value: String, unit: &str) -> String {
    if unit.is_empty() {
        value
    } else {
        format!("{value} {unit}")
    }
}

/// The six cards, in display order.
pub fn metric_cards(indicators: &ProjectedIndicators, labels: &DashboardLabels) -> [MetricCard; 6] {
    [
        card(
            &labels.avoided_emissions,
            with_unit(
                format!("{:.2}", indicators.avoided_emissions),
                &labels.avoided_emissions.unit,
            ),
        ),
        card(
            &labels.water_saved,
            with_unit(
                format!("{:.2}", indicators.water_saved_m3()),
                &labels.water_saved.unit,
            ),
        ),
        card(
            &labels.inputs_replaced,
            with_unit(
                format!("{:.2}", indicators.inputs_replaced),
                &labels.inputs_replaced.unit,
            ),
        ),
        // Currency reads unit-first: "USD 200,000.00".
        card(
            &labels.estimated_revenue,
            format!(
                "{} {}",
                labels.estimated_revenue.unit,
                group_thousands(indicators.estimated_revenue, 2)
            )
            .trim_start()
            .to_string(),
        ),
        card(
            &labels.jobs_created,
            with_unit(
                indicators.jobs_created.to_string(),
                &labels.jobs_created.unit,
            ),
        ),
        card(
            &labels.industrial_symbiosis,
            with_unit(
                indicators.industrial_symbiosis_links.to_string(),
                &labels.industrial_symbiosis.unit,
            ),
        ),
    ]
}
