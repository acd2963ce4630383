//! Partner logo row.
//!
//! Logos are fetched once at startup on a background thread. The result is
//! handed back through a shared slot that [`upload_fetched_logos`] polls and
//! turns into egui textures. A failure is shown inline and never stops the
//! dashboard.

mod error;
mod fetch;

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use simulation::config::LOGO_URLS;
use simulation::DashboardLabels;

pub use error::LogoError;
pub use fetch::{decode_logo, fetch_logos, LogoImage, FETCH_TIMEOUT};

/// Display width of each logo.
pub const LOGO_WIDTH: f32 = 100.0;

type FetchSlot = Arc<Mutex<Option<Result<Vec<LogoImage>, LogoError>>>>;

#[derive(Default)]
pub enum LogoStatus {
    #[default]
    Idle,
    Loading,
    Ready(Vec<egui::TextureHandle>),
    Failed(LogoError),
}

#[derive(Resource)]
pub struct LogoRow {
    pub sources: Vec<String>,
    pub status: LogoStatus,
    slot: FetchSlot,
}

impl Default for LogoRow {
    fn default() -> Self {
        Self::with_sources(LOGO_URLS.iter().map(|url| url.to_string()).collect())
    }
}

impl LogoRow {
    pub fn with_sources(sources: Vec<String>) -> Self {
        Self {
            sources,
            status: LogoStatus::Idle,
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the background fetch. Does nothing unless idle.
    pub fn begin_fetch(&mut self) {
        if !matches!(self.status, LogoStatus::Idle) {
            return;
        }
        self.status = LogoStatus::Loading;

        let sources = self.sources.clone();
        let slot = self.slot.clone();
        std::thread::spawn(move || {
            let result = fetch_logos(&sources);
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(result);
            }
        });
    }

    /// Take a finished fetch result, if one is waiting.
    pub fn take_result(&mut self) -> Option<Result<Vec<LogoImage>, LogoError>> {
        match self.slot.try_lock() {
            Ok(mut guard) => guard.take(),
            Err(std::sync::TryLockError::WouldBlock) => None,
            Err(std::sync::TryLockError::Poisoned(_)) => Some(Err(LogoError::Unexpected(
                "logo fetch thread panicked".to_string(),
            ))),
        }
    }

    /// Inline error text for a failed fetch, in the current labels.
    pub fn error_text(error: &LogoError, labels: &DashboardLabels) -> String {
        let template = if error.is_network() {
            &labels.logo_network_error
        } else {
            &labels.logo_unexpected_error
        };
        template.replace("{error}", &error.to_string())
    }
}

pub fn start_logo_fetch(mut logos: ResMut<LogoRow>) {
    info!("Fetching {} partner logos", logos.sources.len());
    logos.begin_fetch();
}

pub fn upload_fetched_logos(mut contexts: EguiContexts, mut logos: ResMut<LogoRow>) {
    if !matches!(logos.status, LogoStatus::Loading) {
        return;
    }
    let Some(result) = logos.take_result() else {
        return;
    };

    logos.status = match result {
        Ok(images) => {
            let ctx = contexts.ctx_mut();
            let textures = images
                .into_iter()
                .enumerate()
                .map(|(i, logo)| {
                    let image = egui::ColorImage::from_rgba_unmultiplied(logo.size, &logo.rgba);
                    ctx.load_texture(
                        format!("partner_logo_{i}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    )
                })
                .collect::<Vec<_>>();
            info!("Loaded {} partner logos", textures.len());
            LogoStatus::Ready(textures)
        }
        Err(e) => {
            warn!("Failed to load partner logos: {}", e);
            LogoStatus::Failed(e)
        }
    };
}

/// Logos side by side, each [`LOGO_WIDTH`] wide, or the error in red.
pub fn draw_logo_row(ui: &mut egui::Ui, logos: &LogoRow, labels: &DashboardLabels) {
    match &logos.status {
        LogoStatus::Idle => {}
        LogoStatus::Loading => {
            ui.spinner();
        }
        LogoStatus::Ready(textures) => {
            ui.horizontal(|ui| {
                for texture in textures {
                    let [w, h] = texture.size();
                    let height = LOGO_WIDTH * h as f32 / w.max(1) as f32;
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                            .fit_to_exact_size(egui::vec2(LOGO_WIDTH, height)),
                    );
                    ui.add_space(12.0);
                }
            });
        }
        LogoStatus::Failed(error) => {
            ui.colored_label(
                egui::Color32::from_rgb(200, 30, 30),
                LogoRow::error_text(error, labels),
            );
        }
    }
}
