use bevy::prelude::*;
use simulation::SimulationSet;

pub mod atomic_write;
pub mod chart;
pub mod comparison_charts;
pub mod download;
pub mod export;
pub mod export_error;
pub mod format;
pub mod palette;
pub mod svg;

pub use chart::{build_comparison_chart, BarChart, ChartMode, ComparisonSpec, Metric};
pub use comparison_charts::ComparisonCharts;
pub use download::{
    export_chart, ChartExported, ExportChartRequest, ExportSettings, StatusMessage,
};
pub use export_error::ExportError;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExportSettings>()
            .init_resource::<StatusMessage>()
            .init_resource::<ComparisonCharts>()
            .add_event::<ExportChartRequest>()
            .add_event::<ChartExported>()
            .add_systems(
                Update,
                (
                    comparison_charts::rebuild_comparison_charts,
                    download::handle_export_requests,
                )
                    .chain()
                    .in_set(SimulationSet::Present),
            )
            .add_systems(Update, download::tick_status_message);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use simulation::{Baseline, ProjectedIndicators, SimulationInputs, SimulationPlugin};

    use super::*;

    fn test_app(export_dir: PathBuf) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(ExportSettings { dir: export_dir });
        app.add_plugins(RenderingPlugin);
        app.update();
        app
    }

    #[test]
    fn test_charts_follow_inputs() {
        let mut app = test_app(PathBuf::from("/tmp/impact_rendering_unused"));

        let before = app.world().resource::<ComparisonCharts>().clone();
        assert_eq!(before.charts.len(), 3);

        app.world_mut()
            .resource_mut::<SimulationInputs>()
            .production_volume = 100.0;
        app.update();

        let after = app.world().resource::<ComparisonCharts>();
        let emissions = after.get(Metric::AvoidedEmissions).unwrap();
        assert!((emissions.bars[1].height - 410.0).abs() < 1e-9);
        assert_ne!(*after, before);
        // Baseline bars never move.
        assert_eq!(
            emissions.bars[0].height,
            app.world().resource::<Baseline>().avoided_emissions
        );
    }

    #[test]
    fn test_panel_charts_match_indicators() {
        let app = test_app(PathBuf::from("/tmp/impact_rendering_unused"));
        let indicators = *app.world().resource::<ProjectedIndicators>();
        let charts = app.world().resource::<ComparisonCharts>();

        let water = charts.get(Metric::WaterSaved).unwrap();
        assert_eq!(water.mode, ChartMode::Panel);
        assert_eq!(water.bars[1].height, indicators.water_saved_m3());
    }

    #[test]
    fn test_export_request_writes_file_and_reports() {
        let dir = PathBuf::from("/tmp/impact_rendering_export_request");
        let _ = std::fs::remove_dir_all(&dir);
        let mut app = test_app(dir.clone());

        app.world_mut().send_event(ExportChartRequest {
            metric: Metric::WaterSaved,
        });
        app.update();

        let path = dir.join("Water_Saved.png");
        assert!(path.exists());

        let status = app.world().resource::<StatusMessage>();
        assert!(status.active());
        assert!(!status.is_error);
        assert!(status.text.contains("Water_Saved.png"));

        let events = app.world().resource::<Events<ChartExported>>();
        let mut cursor = events.get_cursor();
        let exported: Vec<_> = cursor.read(events).cloned().collect();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].path, path);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
