use bevy::prelude::*;

pub mod config;
pub mod indicators;
pub mod inputs;
pub mod labels;

pub use indicators::{compute, Baseline, ProjectedIndicators};
pub use inputs::{Parameter, SimulationInputs};
pub use labels::DashboardLabels;

/// Per-frame ordering of the dashboard pipeline.
///
/// Sliders write inputs, indicators are recomputed from them, and only then
/// are charts rebuilt and panels drawn.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Inputs,
    Recompute,
    Present,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // init_resource keeps anything the app inserted beforehand (scenario
        // inputs, a label file).
        app.init_resource::<SimulationInputs>()
            .init_resource::<ProjectedIndicators>()
            .init_resource::<Baseline>()
            .init_resource::<DashboardLabels>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Inputs,
                    SimulationSet::Recompute,
                    SimulationSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                indicators::recompute_indicators.in_set(SimulationSet::Recompute),
            );
    }
}
