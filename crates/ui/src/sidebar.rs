//! Left sidebar: the five parameter sliders and the version footer.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::{ParameterSpec, DASHBOARD_VERSION};
use simulation::{DashboardLabels, Parameter, SimulationInputs};

const SIDEBAR_WIDTH: f32 = 320.0;

/// Footer line with the `{version}` placeholder filled in.
pub fn version_text(labels: &DashboardLabels) -> String {
    labels.version_footer.replace("{version}", DASHBOARD_VERSION)
}

/// Unit shown after a slider value, `None` for unitless factors.
pub fn slider_suffix(spec: &ParameterSpec) -> Option<String> {
    (!spec.unit.is_empty()).then(|| format!(" {}", spec.unit))
}

pub fn sidebar_ui(
    mut contexts: EguiContexts,
    mut inputs: ResMut<SimulationInputs>,
    labels: Res<DashboardLabels>,
) {
    let mut changed = false;

    egui::SidePanel::left("impact_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(8.0);
            ui.heading(labels.sidebar_header.as_str());
            ui.separator();

            // Writes go through bypass_change_detection so only a real slider
            // move triggers a recompute.
            let values = inputs.bypass_change_detection();
            for param in Parameter::ALL {
                let text = labels.slider(param);
                let spec = param.spec();

                ui.add_space(6.0);
                ui.label(text.label.as_str()).on_hover_text(text.help.as_str());
                let mut slider = egui::Slider::new(param.value_mut(values), spec.min..=spec.max)
                    .step_by(spec.step)
                    .fixed_decimals(param.decimals());
                if let Some(suffix) = slider_suffix(&spec) {
                    slider = slider.suffix(suffix);
                }
                let response = ui.add(slider).on_hover_text(text.help.as_str());
                changed |= response.changed();
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.add_space(8.0);
                ui.small(labels.credits.as_str());
                ui.small(version_text(&labels));
                ui.separator();
            });
        });

    if changed {
        let clamped = inputs.clamped();
        *inputs = clamped;
        debug!("Slider inputs changed: {:?}", clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_suffix_shows_units() {
        assert_eq!(
            slider_suffix(&Parameter::ProductionVolume.spec()).as_deref(),
            Some(" tons/year")
        );
        assert_eq!(
            slider_suffix(&Parameter::MarketPrice.spec()).as_deref(),
            Some(" USD/ton")
        );
        assert_eq!(slider_suffix(&Parameter::SubstitutionFactor.spec()), None);
    }

    #[test]
    fn test_version_text() {
        assert_eq!(
            version_text(&DashboardLabels::english()),
            "Visualizer version: 1.0"
        );
        assert_eq!(
            version_text(&DashboardLabels::spanish()),
            "Versión del Visualizador: 1.0"
        );
    }
}
