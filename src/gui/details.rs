//! Details Panel Widget
//! Metadata and photo for the building selected in the bar chart.

use std::sync::mpsc::{channel, Receiver};
use std::thread;

use anyhow::Context as _;
use egui::{Color32, ColorImage, RichText, TextureHandle, TextureOptions};

use crate::charts::image_url_for_rank;
use crate::data::BuildingRecord;

enum PhotoState {
    /// Nothing selected yet.
    Idle,
    Loading,
    Ready(TextureHandle),
    /// Rank outside the asset table.
    NoPhoto,
    Failed(String),
}

/// Right-side panel showing the clicked building.
pub struct DetailsPanel {
    selected: Option<BuildingRecord>,
    photo: PhotoState,
    photo_rx: Option<Receiver<anyhow::Result<ColorImage>>>,
}

impl Default for DetailsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsPanel {
    pub fn new() -> Self {
        Self {
            selected: None,
            photo: PhotoState::Idle,
            photo_rx: None,
        }
    }

    /// Select a building by its record and 1-based rank, starting the photo
    /// fetch for ranks inside the asset table.
    pub fn select(&mut self, record: BuildingRecord, rank: usize) {
        match image_url_for_rank(rank) {
            Some(url) => {
                self.photo = PhotoState::Loading;
                let (tx, rx) = channel();
                self.photo_rx = Some(rx);

                let url = url.to_string();
                thread::spawn(move || {
                    let _ = tx.send(fetch_photo(&url));
                });
            }
            None => {
                log::warn!("no photo asset for rank {} ({})", rank, record.building);
                self.photo = PhotoState::NoPhoto;
                self.photo_rx = None;
            }
        }
        self.selected = Some(record);
    }

    /// Poll the in-flight photo fetch and upload the texture once it lands.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.photo_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(img)) => {
                self.photo = PhotoState::Ready(ctx.load_texture(
                    "building_photo",
                    img,
                    TextureOptions::LINEAR,
                ));
                self.photo_rx = None;
            }
            Ok(Err(e)) => {
                log::error!("photo fetch failed: {:#}", e);
                self.photo = PhotoState::Failed(e.to_string());
                self.photo_rx = None;
            }
            Err(_) => {
                ctx.request_repaint();
            }
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.add_space(5.0);
        ui.label(RichText::new("Building Details").size(16.0).strong());
        ui.separator();

        let Some(building) = &self.selected else {
            ui.add_space(10.0);
            ui.label(RichText::new("Click a bar to see details").color(Color32::GRAY));
            return;
        };

        ui.add_space(8.0);

        match &self.photo {
            PhotoState::Idle => {}
            PhotoState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading photo...");
                });
            }
            PhotoState::Ready(texture) => {
                ui.add(egui::Image::new(texture).max_width(280.0));
            }
            PhotoState::NoPhoto => {
                ui.label(RichText::new("No photo available").color(Color32::GRAY));
            }
            PhotoState::Failed(msg) => {
                ui.colored_label(
                    Color32::from_rgb(220, 53, 69),
                    format!("Photo unavailable: {}", msg),
                );
            }
        }

        ui.add_space(8.0);
        ui.label(RichText::new(&building.building).size(14.0).strong());
        ui.add_space(4.0);

        egui::Grid::new("building_details")
            .min_col_width(70.0)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Height:").strong());
                ui.label(format!("{} ft", building.height_ft));
                ui.end_row();

                ui.label(RichText::new("City:").strong());
                ui.label(&building.city);
                ui.end_row();

                ui.label(RichText::new("Country:").strong());
                ui.label(&building.country);
                ui.end_row();

                ui.label(RichText::new("Floors:").strong());
                ui.label(building.floors.to_string());
                ui.end_row();

                ui.label(RichText::new("Completed:").strong());
                ui.label(building.completed.to_string());
                ui.end_row();
            });
    }
}

/// Fetch and decode one photo on a background thread.
fn fetch_photo(url: &str) -> anyhow::Result<ColorImage> {
    let response = reqwest::blocking::Client::new()
        .get(url)
        .send()
        .context("Failed to request photo")?;

    if !response.status().is_success() {
        anyhow::bail!("photo server returned {}", response.status());
    }

    let bytes = response.bytes().context("Failed to read photo body")?;
    let decoded = image::load_from_memory(&bytes)
        .context("Failed to decode photo")?
        .to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_flat_samples().as_slice(),
    ))
}
