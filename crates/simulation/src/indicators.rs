//! Indicator calculator: maps the five slider inputs to the projected annual
//! indicators shown on the dashboard.
//!
//! | Indicator            | Formula                          | Unit        |
//! |----------------------|----------------------------------|-------------|
//! | Avoided emissions    | volume × emission_factor         | tCO2e/year  |
//! | Water saved          | volume × water_factor × 1000     | liters/year |
//! | Inputs replaced      | volume × substitution_factor     | tons/year   |
//! | Estimated revenue    | volume × market_price            | USD/year    |
//! | Jobs created         | 3                                | jobs        |
//! | Industrial symbiosis | 5                                | links       |
//!
//! No rounding happens here; formatting is a presentation concern.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    BASELINE_AVOIDED_EMISSIONS, BASELINE_REVENUE, BASELINE_WATER_SAVED, INDUSTRIAL_SYMBIOSIS_LINKS,
    JOBS_CREATED, LITERS_PER_M3, WATER_LITERS_SCALE,
};
use crate::inputs::SimulationInputs;

/// Projected annual indicators, recomputed from scratch on every input change.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedIndicators {
    /// tCO2e/year.
    pub avoided_emissions: f64,
    /// Liters/year.
    pub water_saved_liters: f64,
    /// tons/year.
    pub inputs_replaced: f64,
    /// USD/year.
    pub estimated_revenue: f64,
    pub jobs_created: u32,
    pub industrial_symbiosis_links: u32,
}

impl Default for ProjectedIndicators {
    fn default() -> Self {
        compute(&SimulationInputs::default())
    }
}

impl ProjectedIndicators {
    /// Water saved in m³/year.
    pub fn water_saved_m3(&self) -> f64 {
        self.water_saved_liters / LITERS_PER_M3
    }
}

/// Compute the projected indicators for `inputs`.
///
/// Pure and total over the slider domain.
pub fn compute(inputs: &SimulationInputs) -> ProjectedIndicators {
    let volume = inputs.production_volume;
    ProjectedIndicators {
        avoided_emissions: volume * inputs.emission_factor,
        water_saved_liters: volume * inputs.water_factor * WATER_LITERS_SCALE,
        inputs_replaced: volume * inputs.substitution_factor,
        estimated_revenue: volume * inputs.market_price,
        jobs_created: JOBS_CREATED,
        industrial_symbiosis_links: INDUSTRIAL_SYMBIOSIS_LINKS,
    }
}

/// Fixed reference values the charts compare projections against.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// tCO2e/year.
    pub avoided_emissions: f64,
    /// m³/year.
    pub water_saved_m3: f64,
    /// USD/year.
    pub estimated_revenue: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            avoided_emissions: BASELINE_AVOIDED_EMISSIONS,
            water_saved_m3: BASELINE_WATER_SAVED,
            estimated_revenue: BASELINE_REVENUE,
        }
    }
}

/// Recompute [`ProjectedIndicators`] whenever the inputs change.
pub fn recompute_indicators(
    inputs: Res<SimulationInputs>,
    mut indicators: ResMut<ProjectedIndicators>,
) {
    if !inputs.is_changed() {
        return;
    }
    *indicators = compute(&inputs);
    debug!(
        "Recomputed indicators: emissions={:.2} water_m3={:.2} inputs={:.2} revenue={:.2}",
        indicators.avoided_emissions,
        indicators.water_saved_m3(),
        indicators.inputs_replaced,
        indicators.estimated_revenue
    );
}
