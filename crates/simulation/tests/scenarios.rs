//! Scenario and property tests for the indicator calculator.
//!
//! Properties are checked over seeded random samples of the slider domain so
//! failures are reproducible.
//!
//! Run: cargo test -p simulation --test scenarios

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use simulation::config::{INDUSTRIAL_SYMBIOSIS_LINKS, JOBS_CREATED};
use simulation::{compute, Parameter, SimulationInputs};

const SAMPLES: usize = 2_000;

fn random_inputs(rng: &mut ChaCha8Rng) -> SimulationInputs {
    let mut inputs = SimulationInputs::default();
    for param in Parameter::ALL {
        let spec = param.spec();
        *param.value_mut(&mut inputs) = rng.gen_range(spec.min..=spec.max);
    }
    inputs
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Fixed scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_default_scenario() {
    let inputs = SimulationInputs {
        production_volume: 20.0,
        emission_factor: 4.1,
        water_factor: 1500.0,
        substitution_factor: 0.3,
        market_price: 10_000.0,
    };
    let out = compute(&inputs);
    assert_close(out.avoided_emissions, 82.0, "avoided_emissions");
    assert_close(out.water_saved_m3(), 30_000.0, "water_saved_m3");
    assert_close(out.inputs_replaced, 6.0, "inputs_replaced");
    assert_close(out.estimated_revenue, 200_000.0, "estimated_revenue");
}

#[test]
fn test_minimum_bounds_scenario() {
    let out = compute(&SimulationInputs::minimum());
    assert_close(out.avoided_emissions, 35.0, "avoided_emissions");
    assert_close(out.water_saved_m3(), 10_000.0, "water_saved_m3");
    assert_close(out.inputs_replaced, 1.0, "inputs_replaced");
    assert_close(out.estimated_revenue, 50_000.0, "estimated_revenue");
}

#[test]
fn test_maximum_bounds_scenario() {
    let out = compute(&SimulationInputs::maximum());
    assert_close(out.avoided_emissions, 450.0, "avoided_emissions");
    assert_close(out.water_saved_m3(), 200_000.0, "water_saved_m3");
    assert_close(out.inputs_replaced, 50.0, "inputs_replaced");
    assert_close(out.estimated_revenue, 1_500_000.0, "estimated_revenue");
}

// ---------------------------------------------------------------------------
// Properties over the input domain
// ---------------------------------------------------------------------------

#[test]
fn test_compute_is_bit_identical_for_identical_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    for _ in 0..SAMPLES {
        let inputs = random_inputs(&mut rng);
        let copy = inputs;
        let a = compute(&inputs);
        let b = compute(&copy);
        assert_eq!(a.avoided_emissions.to_bits(), b.avoided_emissions.to_bits());
        assert_eq!(a.water_saved_liters.to_bits(), b.water_saved_liters.to_bits());
        assert_eq!(a.inputs_replaced.to_bits(), b.inputs_replaced.to_bits());
        assert_eq!(a.estimated_revenue.to_bits(), b.estimated_revenue.to_bits());
        assert_eq!(a, b);
    }
}

#[test]
fn test_water_m3_equals_volume_times_factor() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let inputs = random_inputs(&mut rng);
        let out = compute(&inputs);
        assert_close(
            out.water_saved_m3(),
            inputs.production_volume * inputs.water_factor,
            "water_saved_m3",
        );
    }
}

#[test]
fn test_volume_increase_strictly_increases_outputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let volume = Parameter::ProductionVolume.spec();
    for _ in 0..SAMPLES {
        let low = random_inputs(&mut rng);
        let mut high = low;
        high.production_volume = rng.gen_range(low.production_volume..=volume.max);
        if high.production_volume <= low.production_volume {
            continue;
        }

        let a = compute(&low);
        let b = compute(&high);
        assert!(b.avoided_emissions > a.avoided_emissions);
        assert!(b.water_saved_m3() > a.water_saved_m3());
        assert!(b.inputs_replaced > a.inputs_replaced);
        assert!(b.estimated_revenue > a.estimated_revenue);
    }
}

#[test]
fn test_fixed_indicators_are_input_independent() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let out = compute(&random_inputs(&mut rng));
        assert_eq!(out.jobs_created, JOBS_CREATED);
        assert_eq!(out.jobs_created, 3);
        assert_eq!(out.industrial_symbiosis_links, INDUSTRIAL_SYMBIOSIS_LINKS);
        assert_eq!(out.industrial_symbiosis_links, 5);
    }
}

#[test]
fn test_clamped_random_inputs_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let mut inputs = SimulationInputs::default();
        for param in Parameter::ALL {
            let spec = param.spec();
            let span = spec.max - spec.min;
            *param.value_mut(&mut inputs) =
                rng.gen_range((spec.min - span)..=(spec.max + span));
        }
        assert!(inputs.clamped().is_within_ranges());
    }
}
