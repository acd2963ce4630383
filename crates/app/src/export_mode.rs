//! Headless export mode: compute a scenario, write the three chart PNGs into
//! `IMPACT_EXPORT_DIR`, then exit. No window, no UI.
//!
//! `IMPACT_SCENARIO` holds the slider values, either as inline JSON or as a
//! path to a JSON file. Missing fields take their defaults and every value is
//! clamped into its slider range.

use std::fmt;
use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use rendering::{ChartExported, ExportChartRequest, ExportSettings, Metric};
use simulation::{DashboardLabels, SimulationInputs};

pub const EXPORT_DIR_ENV: &str = "IMPACT_EXPORT_DIR";
pub const SCENARIO_ENV: &str = "IMPACT_SCENARIO";

#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "Could not read scenario file: {e}"),
            ScenarioError::Parse(e) => write!(f, "Invalid scenario JSON: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(e) => Some(e),
            ScenarioError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        ScenarioError::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Parse(e)
    }
}

/// Parse a scenario given inline (`{...}`) or as a file path, clamped into
/// the slider ranges.
pub fn load_scenario(source: &str) -> Result<SimulationInputs, ScenarioError> {
    let trimmed = source.trim();
    let inputs: SimulationInputs = if trimmed.starts_with('{') {
        serde_json::from_str(trimmed)?
    } else {
        serde_json::from_str(&std::fs::read_to_string(trimmed)?)?
    };
    if !inputs.is_within_ranges() {
        warn!("Scenario values outside the slider ranges were clamped");
    }
    Ok(inputs.clamped())
}

/// Add the dashboard pipeline to a headless `app`, seeded with the given
/// labels and inputs.
pub fn configure_export_app(
    app: &mut App,
    dir: PathBuf,
    labels: DashboardLabels,
    inputs: SimulationInputs,
) {
    app.insert_resource(labels)
        .insert_resource(inputs)
        .insert_resource(ExportSettings { dir })
        .add_plugins((simulation::SimulationPlugin, rendering::RenderingPlugin));
}

/// Request every chart, run one frame, and collect what was written.
pub fn export_all(app: &mut App) -> Vec<ChartExported> {
    app.update();
    for metric in Metric::ALL {
        app.world_mut().send_event(ExportChartRequest { metric });
    }
    app.update();

    let events = app.world().resource::<Events<ChartExported>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).cloned().collect()
}

pub fn run_export_mode(dir: PathBuf) -> AppExit {
    let mut app = App::new();
    // Logging comes up first so label and scenario warnings are visible.
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let labels = DashboardLabels::resolve(std::env::var(crate::LABELS_ENV).ok().as_deref());
    let inputs = match std::env::var(SCENARIO_ENV) {
        Ok(source) => match load_scenario(&source) {
            Ok(inputs) => inputs,
            Err(e) => {
                error!("{}", e);
                return AppExit::error();
            }
        },
        Err(_) => SimulationInputs::default(),
    };
    info!("Exporting charts for {:?} into {}", inputs, dir.display());

    configure_export_app(&mut app, dir, labels, inputs);
    let exported = export_all(&mut app);
    if exported.len() == Metric::ALL.len() {
        info!("Exported {} charts", exported.len());
        AppExit::Success
    } else {
        error!(
            "Only {} of {} charts were exported",
            exported.len(),
            Metric::ALL.len()
        );
        AppExit::error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inline_scenario_is_clamped() {
        let inputs = load_scenario(r#"{ "production_volume": 500.0, "market_price": 12000 }"#)
            .unwrap();
        assert_eq!(inputs.production_volume, 100.0);
        assert_eq!(inputs.market_price, 12000.0);
        assert_eq!(inputs.emission_factor, SimulationInputs::default().emission_factor);
    }

    #[test]
    fn test_load_scenario_file() {
        let dir = "/tmp/impact_export_mode_test_scenario";
        let _ = std::fs::remove_dir_all(dir);
        std::fs::create_dir_all(dir).unwrap();
        let path = format!("{dir}/scenario.json");
        std::fs::write(&path, r#"{ "water_factor": 1800 }"#).unwrap();

        let inputs = load_scenario(&path).unwrap();
        assert_eq!(inputs.water_factor, 1800.0);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_scenario_errors() {
        assert!(matches!(
            load_scenario("/nonexistent/scenario.json"),
            Err(ScenarioError::Io(_))
        ));
        assert!(matches!(
            load_scenario("{ broken"),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn test_export_all_writes_three_pngs() {
        let dir = PathBuf::from("/tmp/impact_export_mode_test_all");
        let _ = std::fs::remove_dir_all(&dir);

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        configure_export_app(
            &mut app,
            dir.clone(),
            DashboardLabels::default(),
            SimulationInputs::maximum(),
        );
        let exported = export_all(&mut app);

        assert_eq!(exported.len(), 3);
        for name in ["Avoided_Emissions.png", "Water_Saved.png", "Estimated_Revenue.png"] {
            let bytes = std::fs::read(dir.join(name)).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "{name}");
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}
