//! Per-chart PNG downloads.
//!
//! A download button (or the headless export mode) sends an
//! [`ExportChartRequest`]; [`handle_export_requests`] renders the standalone
//! chart from the current indicators and writes it into the export directory.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use simulation::config::DEFAULT_EXPORT_DIR;
use simulation::{Baseline, DashboardLabels, ProjectedIndicators};

use crate::atomic_write::atomic_write;
use crate::chart::{build_comparison_chart, ChartMode, Metric};
use crate::export::render_png;
use crate::export_error::ExportError;

/// Seconds a status line stays visible.
const STATUS_DURATION_SECS: f32 = 3.0;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportChartRequest {
    pub metric: Metric,
}

/// Sent after a chart PNG has been written.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ChartExported {
    pub metric: Metric,
    pub path: PathBuf,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

/// Short-lived feedback line shown under the download buttons.
#[derive(Resource, Default, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = STATUS_DURATION_SECS;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}

/// Render `metric`'s standalone chart and write it to `dir`.
pub fn export_chart(
    metric: Metric,
    labels: &DashboardLabels,
    baseline: &Baseline,
    indicators: &ProjectedIndicators,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let spec = metric.spec(labels, baseline, indicators);
    let chart = build_comparison_chart(&spec, ChartMode::Standalone);
    let bytes = render_png(&chart)?;

    let path = dir.join(metric.file_name(labels));
    atomic_write(&path, &bytes)?;
    Ok(path)
}

pub fn handle_export_requests(
    mut requests: EventReader<ExportChartRequest>,
    settings: Res<ExportSettings>,
    labels: Res<DashboardLabels>,
    baseline: Res<Baseline>,
    indicators: Res<ProjectedIndicators>,
    mut status: ResMut<StatusMessage>,
    mut exported: EventWriter<ChartExported>,
) {
    for request in requests.read() {
        match export_chart(
            request.metric,
            &labels,
            &baseline,
            &indicators,
            &settings.dir,
        ) {
            Ok(path) => {
                info!("Exported {:?} chart to {}", request.metric, path.display());
                status.set(format!("Saved {}", path.display()), false);
                exported.send(ChartExported {
                    metric: request.metric,
                    path,
                });
            }
            Err(e) => {
                error!("Failed to export {:?} chart: {}", request.metric, e);
                status.set(format!("Export failed: {e}"), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use simulation::{compute, SimulationInputs};

    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = PathBuf::from(format!("/tmp/impact_download_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_status_message_lifecycle() {
        let mut status = StatusMessage::default();
        assert!(!status.active());
        status.set("Saved", false);
        assert!(status.active());
        assert!(!status.is_error);
        status.timer -= STATUS_DURATION_SECS;
        assert!(!status.active());
    }

    #[test]
    fn test_default_export_dir() {
        assert_eq!(ExportSettings::default().dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_export_chart_writes_named_png() {
        let dir = test_dir("named_png");
        let labels = DashboardLabels::default();
        let indicators = compute(&SimulationInputs::default());

        let path = export_chart(
            Metric::EstimatedRevenue,
            &labels,
            &Baseline::default(),
            &indicators,
            &dir,
        )
        .unwrap();

        assert_eq!(path, dir.join("Estimated_Revenue.png"));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_chart_uses_label_stems() {
        let dir = test_dir("label_stems");
        let labels = DashboardLabels::spanish();
        let indicators = compute(&SimulationInputs::default());

        let path = export_chart(
            Metric::AvoidedEmissions,
            &labels,
            &Baseline::default(),
            &indicators,
            &dir,
        )
        .unwrap();
        assert!(path.ends_with("GEI_Evitados.png"));
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
