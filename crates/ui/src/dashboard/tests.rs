//! Tests for the dashboard module.

#[cfg(test)]
mod tests {
    use simulation::{compute, DashboardLabels, SimulationInputs};

    use crate::dashboard::types::metric_cards;

    #[test]
    fn test_default_card_values() {
        let indicators = compute(&SimulationInputs::default());
        let cards = metric_cards(&indicators, &DashboardLabels::english());

        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "82.00 tCO₂e/year",
                "30000.00 m³/year",
                "6.00 tons/year",
                "USD 200,000.00",
                "3",
                "5 interactions",
            ]
        );
    }

    #[test]
    fn test_maximum_card_values() {
        let indicators = compute(&SimulationInputs::maximum());
        let cards = metric_cards(&indicators, &DashboardLabels::english());
        assert_eq!(cards[0].value, "450.00 tCO₂e/year");
        assert_eq!(cards[1].value, "200000.00 m³/year");
        assert_eq!(cards[2].value, "50.00 tons/year");
        assert_eq!(cards[3].value, "USD 1,500,000.00");
    }

    #[test]
    fn test_cards_follow_labels() {
        let indicators = compute(&SimulationInputs::default());
        let labels = DashboardLabels::spanish();
        let cards = metric_cards(&indicators, &labels);
        assert_eq!(cards[0].label, labels.avoided_emissions.label);
        assert_eq!(cards[0].value, "82.00 tCO₂e/año");
        assert_eq!(cards[5].value, "5 interacciones");
        assert_eq!(cards[4].caption, labels.jobs_created.caption);
    }

    #[test]
    fn test_revenue_without_unit_has_no_leading_space() {
        let indicators = compute(&SimulationInputs::default());
        let mut labels = DashboardLabels::english();
        labels.estimated_revenue.unit.clear();
        let cards = metric_cards(&indicators, &labels);
        assert_eq!(cards[3].value, "200,000.00");
    }
}
