//! Fixed configuration for the impact dashboard: slider ranges, fixed
//! indicator constants, baseline reference values, and export settings.

/// Range, default and step of a single slider parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Unit shown next to the value, e.g. `tons/year`.
    pub unit: &'static str,
}

impl ParameterSpec {
    pub const fn new(min: f64, max: f64, default: f64, step: f64, unit: &'static str) -> Self {
        Self {
            min,
            max,
            default,
            step,
            unit,
        }
    }

    /// Clamp `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ---------------------------------------------------------------------------
// Slider parameters
// ---------------------------------------------------------------------------

/// Total product volume, tons/year.
pub const PRODUCTION_VOLUME: ParameterSpec = ParameterSpec::new(10.0, 100.0, 20.0, 5.0, "tons/year");
/// GHG emissions avoided per ton of product, tCO2e/ton.
pub const EMISSION_FACTOR: ParameterSpec = ParameterSpec::new(3.5, 4.5, 4.1, 0.1, "tCO₂e/ton");
/// Water saved per kg of replaced meat, liters/kg.
pub const WATER_FACTOR: ParameterSpec = ParameterSpec::new(1000.0, 2000.0, 1500.0, 100.0, "L/kg");
/// Fraction of synthetic inputs replaced by natural ones.
pub const SUBSTITUTION_FACTOR: ParameterSpec = ParameterSpec::new(0.1, 0.5, 0.3, 0.01, "");
/// Plant-based market price, USD/ton.
pub const MARKET_PRICE: ParameterSpec = ParameterSpec::new(5000.0, 15000.0, 10000.0, 500.0, "USD/ton");

// ---------------------------------------------------------------------------
// Fixed indicators
// ---------------------------------------------------------------------------

/// Jobs created by the project. Input-independent.
pub const JOBS_CREATED: u32 = 3;
/// Resource-sharing collaborations with other industrial actors. Input-independent.
pub const INDUSTRIAL_SYMBIOSIS_LINKS: u32 = 5;

/// Scale applied to `volume * water_factor` to get liters.
pub const WATER_LITERS_SCALE: f64 = 1000.0;
/// Liters per cubic meter.
pub const LITERS_PER_M3: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Baseline reference values (chart comparison only)
// ---------------------------------------------------------------------------

pub const BASELINE_AVOIDED_EMISSIONS: f64 = 82.0;
/// In m³/year.
pub const BASELINE_WATER_SAVED: f64 = 270.0;
/// In USD/year.
pub const BASELINE_REVENUE: f64 = 200_000.0;

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Version shown in the sidebar footer.
pub const DASHBOARD_VERSION: &str = "1.0";

/// Logos shown at the bottom of the dashboard, fetched at startup.
pub const LOGO_URLS: [&str; 2] = [
    "https://drive.google.com/uc?id=1vx_znPU2VfdkzeDtl91dlpw_p9mmu4dd",
    "https://drive.google.com/uc?id=1uIQZQywjuQJz6Eokkj6dNSpBroJ8tQf8",
];

/// Directory interactive chart downloads are written to.
pub const DEFAULT_EXPORT_DIR: &str = "exports";
