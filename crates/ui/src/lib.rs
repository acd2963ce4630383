use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use simulation::SimulationSet;

pub mod dashboard;
pub mod graphs;
pub mod logos;
pub mod sidebar;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<logos::LogoRow>()
            .add_systems(
                Startup,
                (theme::apply_dashboard_theme, logos::start_logo_fetch),
            )
            // The sidebar claims its side panel before the central panel
            // takes the rest of the window.
            .add_systems(
                Update,
                sidebar::sidebar_ui.in_set(SimulationSet::Inputs),
            )
            .add_systems(
                Update,
                (logos::upload_fetched_logos, dashboard::dashboard_ui)
                    .chain()
                    .in_set(SimulationSet::Present)
                    .after(rendering::comparison_charts::rebuild_comparison_charts),
            );
    }
}
