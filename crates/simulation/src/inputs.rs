//! The five slider values the dashboard is driven by.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    ParameterSpec, EMISSION_FACTOR, MARKET_PRICE, PRODUCTION_VOLUME, SUBSTITUTION_FACTOR,
    WATER_FACTOR,
};

/// Current slider values. Written by the sidebar, read by the calculator.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInputs {
    /// Tons/year.
    pub production_volume: f64,
    /// tCO2e avoided per ton.
    pub emission_factor: f64,
    /// Liters saved per kg of replaced meat.
    pub water_factor: f64,
    /// Fraction of synthetic inputs replaced.
    pub substitution_factor: f64,
    /// USD/ton.
    pub market_price: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            production_volume: PRODUCTION_VOLUME.default,
            emission_factor: EMISSION_FACTOR.default,
            water_factor: WATER_FACTOR.default,
            substitution_factor: SUBSTITUTION_FACTOR.default,
            market_price: MARKET_PRICE.default,
        }
    }
}

impl SimulationInputs {
    /// Inputs with every field at its range minimum.
    pub fn minimum() -> Self {
        Self::from_fn(|p| p.spec().min)
    }

    /// Inputs with every field at its range maximum.
    pub fn maximum() -> Self {
        Self::from_fn(|p| p.spec().max)
    }

    fn from_fn(f: impl Fn(Parameter) -> f64) -> Self {
        let mut inputs = Self::default();
        for param in Parameter::ALL {
            *param.value_mut(&mut inputs) = f(param);
        }
        inputs
    }

    /// Copy of `self` with every field clamped into its slider range.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for param in Parameter::ALL {
            let value = param.value_mut(&mut out);
            *value = param.spec().clamp(*value);
        }
        out
    }

    pub fn is_within_ranges(&self) -> bool {
        Parameter::ALL
            .iter()
            .all(|p| p.spec().contains(p.value(self)))
    }
}

/// One of the five slider parameters, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    ProductionVolume,
    EmissionFactor,
    WaterFactor,
    SubstitutionFactor,
    MarketPrice,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::ProductionVolume,
        Parameter::EmissionFactor,
        Parameter::WaterFactor,
        Parameter::SubstitutionFactor,
        Parameter::MarketPrice,
    ];

    pub fn spec(self) -> ParameterSpec {
        match self {
            Parameter::ProductionVolume => PRODUCTION_VOLUME,
            Parameter::EmissionFactor => EMISSION_FACTOR,
            Parameter::WaterFactor => WATER_FACTOR,
            Parameter::SubstitutionFactor => SUBSTITUTION_FACTOR,
            Parameter::MarketPrice => MARKET_PRICE,
        }
    }

    pub fn value(self, inputs: &SimulationInputs) -> f64 {
        match self {
            Parameter::ProductionVolume => inputs.production_volume,
            Parameter::EmissionFactor => inputs.emission_factor,
            Parameter::WaterFactor => inputs.water_factor,
            Parameter::SubstitutionFactor => inputs.substitution_factor,
            Parameter::MarketPrice => inputs.market_price,
        }
    }

    pub fn value_mut(self, inputs: &mut SimulationInputs) -> &mut f64 {
        match self {
            Parameter::ProductionVolume => &mut inputs.production_volume,
            Parameter::EmissionFactor => &mut inputs.emission_factor,
            Parameter::WaterFactor => &mut inputs.water_factor,
            Parameter::SubstitutionFactor => &mut inputs.substitution_factor,
            Parameter::MarketPrice => &mut inputs.market_price,
        }
    }

    /// Decimal places the slider displays.
    pub fn decimals(self) -> usize {
        match self {
            Parameter::ProductionVolume | Parameter::WaterFactor | Parameter::MarketPrice => 0,
            Parameter::EmissionFactor => 1,
            Parameter::SubstitutionFactor => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_within_ranges() {
        assert!(SimulationInputs::default().is_within_ranges());
        assert!(SimulationInputs::minimum().is_within_ranges());
        assert!(SimulationInputs::maximum().is_within_ranges());
    }

    #[test]
    fn test_minimum_and_maximum_values() {
        let min = SimulationInputs::minimum();
        assert_eq!(min.production_volume, 10.0);
        assert_eq!(min.emission_factor, 3.5);
        assert_eq!(min.water_factor, 1000.0);
        assert_eq!(min.substitution_factor, 0.1);
        assert_eq!(min.market_price, 5000.0);

        let max = SimulationInputs::maximum();
        assert_eq!(max.production_volume, 100.0);
        assert_eq!(max.emission_factor, 4.5);
        assert_eq!(max.water_factor, 2000.0);
        assert_eq!(max.substitution_factor, 0.5);
        assert_eq!(max.market_price, 15000.0);
    }

    #[test]
    fn test_clamped_pulls_out_of_range_values_in() {
        let wild = SimulationInputs {
            production_volume: 0.0,
            emission_factor: 9.0,
            water_factor: 1200.0,
            substitution_factor: 2.0,
            market_price: -5.0,
        };
        assert!(!wild.is_within_ranges());

        let clamped = wild.clamped();
        assert!(clamped.is_within_ranges());
        assert_eq!(clamped.production_volume, 10.0);
        assert_eq!(clamped.emission_factor, 4.5);
        assert_eq!(clamped.water_factor, 1200.0, "in-range value untouched");
        assert_eq!(clamped.substitution_factor, 0.5);
        assert_eq!(clamped.market_price, 5000.0);
    }

    #[test]
    fn test_value_mut_targets_matching_field() {
        let mut inputs = SimulationInputs::default();
        for (i, param) in Parameter::ALL.into_iter().enumerate() {
            *param.value_mut(&mut inputs) = i as f64;
        }
        for (i, param) in Parameter::ALL.into_iter().enumerate() {
            assert_eq!(param.value(&inputs), i as f64);
        }
    }

    #[test]
    fn test_inputs_deserialize_from_json() {
        let json = r#"{
            "production_volume": 40.0,
            "emission_factor": 4.0,
            "water_factor": 1800.0,
            "substitution_factor": 0.25,
            "market_price": 12000.0
        }"#;
        let inputs: SimulationInputs = serde_json::from_str(json).expect("deserialize");
        assert_eq!(inputs.production_volume, 40.0);
        assert_eq!(inputs.market_price, 12000.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let inputs: SimulationInputs =
            serde_json::from_str(r#"{ "production_volume": 75.0 }"#).expect("deserialize");
        assert_eq!(inputs.production_volume, 75.0);
        assert_eq!(inputs.water_factor, SimulationInputs::default().water_factor);
    }
}
