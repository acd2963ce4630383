//! User-visible dashboard text.
//!
//! Every string the dashboard shows lives in [`DashboardLabels`], so a single
//! dashboard component serves any wording. Two presets ship built in
//! ([`DashboardLabels::english`], the default, and
//! [`DashboardLabels::spanish`]); a JSON file can override any subset of
//! fields, nested ones included, with everything it leaves out taken from the
//! English preset.

mod error;
mod presets;
#[cfg(test)]
mod tests;

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::inputs::Parameter;

pub use error::LabelsError;

/// Selector value for the built-in Spanish preset.
pub const SPANISH_PRESET: &str = "es";

/// Label and hover help for one slider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderText {
    pub label: String,
    pub help: String,
}

/// Label, unit suffix and caption for one metric card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardText {
    pub label: String,
    pub unit: String,
    pub caption: String,
}

/// Title, y-axis label and export file stem for one comparison chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartText {
    pub title: String,
    pub y_label: String,
    /// Download file name without the `.png` extension.
    pub export_stem: String,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardLabels {
    pub page_title: String,
    pub page_subtitle: String,
    pub page_intro: String,

    pub sidebar_header: String,
    pub production_volume: SliderText,
    pub emission_factor: SliderText,
    pub water_factor: SliderText,
    pub substitution_factor: SliderText,
    pub market_price: SliderText,

    pub results_header: String,
    pub avoided_emissions: CardText,
    pub water_saved: CardText,
    pub inputs_replaced: CardText,
    pub estimated_revenue: CardText,
    pub jobs_created: CardText,
    pub industrial_symbiosis: CardText,

    pub charts_header: String,
    pub baseline_category: String,
    pub projection_category: String,
    pub emissions_chart: ChartText,
    pub water_chart: ChartText,
    pub revenue_chart: ChartText,

    pub downloads_header: String,
    /// Download button text; `{file}` is replaced by the file name.
    pub download_button: String,

    pub additional_info_header: String,
    pub additional_info: String,
    pub attribution: String,
    pub location: String,
    pub version_footer: String,
    pub credits: String,

    pub logo_network_error: String,
    pub logo_unexpected_error: String,
}

impl Default for DashboardLabels {
    fn default() -> Self {
        Self::english()
    }
}

impl DashboardLabels {
    /// Parse a label file, merging its fields over the English preset.
    pub fn from_json_str(json: &str) -> Result<Self, LabelsError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::english())?;
        merge_json(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LabelsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Resolve a label selector: `None` gives the default preset, `"es"` the
    /// Spanish preset, anything else is read as a JSON file path. A file that
    /// fails to load logs a warning and falls back to the default preset.
    pub fn resolve(selector: Option<&str>) -> Self {
        match selector {
            None => Self::default(),
            Some(SPANISH_PRESET) => Self::spanish(),
            Some(path) => match Self::from_json_file(path) {
                Ok(labels) => {
                    info!("Loaded dashboard labels from {}", path);
                    labels
                }
                Err(e) => {
                    warn!(
                        "Failed to load labels from {}, using defaults: {}",
                        path, e
                    );
                    Self::default()
                }
            },
        }
    }

    pub fn slider(&self, param: Parameter) -> &SliderText {
        match param {
            Parameter::ProductionVolume => &self.production_volume,
            Parameter::EmissionFactor => &self.emission_factor,
            Parameter::WaterFactor => &self.water_factor,
            Parameter::SubstitutionFactor => &self.substitution_factor,
            Parameter::MarketPrice => &self.market_price,
        }
    }

    /// Download button text for `file_name`.
    pub fn download_text(&self, file_name: &str) -> String {
        self.download_button.replace("{file}", file_name)
    }
}

/// Overlay `overlay` onto `base`, recursing into objects present in both.
fn merge_json(base: &mut serde_json::Value, overlay: serde_json::Value) {
    match (base, overlay) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
