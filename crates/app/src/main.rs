use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow};
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::DashboardLabels;

mod export_mode;

/// Label selector: a JSON file path, or `es` for the Spanish preset.
pub const LABELS_ENV: &str = "IMPACT_LABELS";

fn main() -> AppExit {
    // Export mode: writes the chart PNGs headlessly and exits
    if let Ok(dir) = std::env::var(export_mode::EXPORT_DIR_ENV) {
        return export_mode::run_export_mode(PathBuf::from(dir));
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Impact Visualizer".to_string(),
            resolution: (1440.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(Color::WHITE));

    // Resolved after DefaultPlugins so a bad label file is logged.
    let labels = DashboardLabels::resolve(std::env::var(LABELS_ENV).ok().as_deref());
    app.insert_resource(labels)
        .add_plugins((
            simulation::SimulationPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ))
        .add_systems(Startup, (spawn_camera, apply_window_title));

    app.run()
}

/// egui draws on top of a camera's output.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn apply_window_title(
    labels: Res<DashboardLabels>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = labels.page_title.clone();
    }
}
