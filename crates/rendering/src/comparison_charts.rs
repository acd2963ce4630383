use bevy::prelude::*;
use simulation::{Baseline, DashboardLabels, ProjectedIndicators};

use crate::chart::{build_metric_charts, BarChart, ChartMode, Metric};

/// The three embedded panel charts, in [`Metric::ALL`] order.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ComparisonCharts {
    pub charts: Vec<(Metric, BarChart)>,
}

impl ComparisonCharts {
    pub fn build(
        labels: &DashboardLabels,
        baseline: &Baseline,
        indicators: &ProjectedIndicators,
    ) -> Self {
        Self {
            charts: build_metric_charts(labels, baseline, indicators, ChartMode::Panel),
        }
    }

    pub fn get(&self, metric: Metric) -> Option<&BarChart> {
        self.charts
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, chart)| chart)
    }
}

impl FromWorld for ComparisonCharts {
    fn from_world(world: &mut World) -> Self {
        let labels = world.get_resource::<DashboardLabels>().cloned().unwrap_or_default();
        let baseline = world.get_resource::<Baseline>().cloned().unwrap_or_default();
        let indicators = world
            .get_resource::<ProjectedIndicators>()
            .copied()
            .unwrap_or_default();
        Self::build(&labels, &baseline, &indicators)
    }
}

pub fn rebuild_comparison_charts(
    labels: Res<DashboardLabels>,
    baseline: Res<Baseline>,
    indicators: Res<ProjectedIndicators>,
    mut charts: ResMut<ComparisonCharts>,
) {
    if !(labels.is_changed() || baseline.is_changed() || indicators.is_changed()) {
        return;
    }
    *charts = ComparisonCharts::build(&labels, &baseline, &indicators);
}
