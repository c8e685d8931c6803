//! UrbanScope Main Application
//! Hosts the two load-then-render pipelines and the details panel.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use egui::{Color32, RichText, SidePanel};

use crate::charts::{BarModel, ScatterModel};
use crate::config::AppConfig;
use crate::data::{self, BuildingRecord, CityRecord, DataError};
use crate::gui::{BarView, DetailsPanel, ScatterView};

/// State of one load-then-render pipeline. The view only exists once its
/// data has arrived, so rendering cannot run before loading completes.
enum Pipeline<V> {
    Loading,
    Ready(V),
    Failed(String),
}

/// Main application window.
pub struct UrbanScopeApp {
    scatter: Pipeline<ScatterView>,
    bars: Pipeline<BarView>,
    details: DetailsPanel,

    // Async CSV loading, one channel per pipeline
    cities_rx: Option<Receiver<Result<Vec<CityRecord>, DataError>>>,
    buildings_rx: Option<Receiver<Result<Vec<BuildingRecord>, DataError>>>,
}

impl UrbanScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        // the pipelines are independent; launch both up front
        let cities_rx = spawn_load(config.cities_csv, data::load_cities);
        let buildings_rx = spawn_load(config.buildings_csv, data::load_buildings);

        Self {
            scatter: Pipeline::Loading,
            bars: Pipeline::Loading,
            details: DetailsPanel::new(),
            cities_rx: Some(cities_rx),
            buildings_rx: Some(buildings_rx),
        }
    }

    /// True once both pipelines have finished, successfully or not.
    fn all_settled(&self) -> bool {
        !matches!(self.scatter, Pipeline::Loading) && !matches!(self.bars, Pipeline::Loading)
    }

    /// Check for loading results from the background threads.
    fn poll_pipelines(&mut self) {
        if let Some(rx) = &self.cities_rx {
            if let Ok(result) = rx.try_recv() {
                self.scatter = match result {
                    Ok(cities) => {
                        Pipeline::Ready(ScatterView::new(ScatterModel::build(&cities)))
                    }
                    Err(e) => {
                        log::error!("city pipeline failed: {}", e);
                        Pipeline::Failed(e.to_string())
                    }
                };
                self.cities_rx = None;
            }
        }

        if let Some(rx) = &self.buildings_rx {
            if let Ok(result) = rx.try_recv() {
                self.bars = match result {
                    Ok(buildings) => Pipeline::Ready(BarView::new(BarModel::build(&buildings))),
                    Err(e) => {
                        log::error!("building pipeline failed: {}", e);
                        Pipeline::Failed(e.to_string())
                    }
                };
                self.buildings_rx = None;
            }
        }
    }
}

/// Run one load on a background thread, delivering the result over a channel.
fn spawn_load<T, F>(path: PathBuf, load: F) -> Receiver<Result<Vec<T>, DataError>>
where
    T: Send + 'static,
    F: FnOnce(&Path) -> Result<Vec<T>, DataError> + Send + 'static,
{
    let (tx, rx) = channel();
    thread::spawn(move || {
        let _ = tx.send(load(&path));
    });
    rx
}

/// Render one pipeline's loading/failure states, handing ready views to `draw`.
fn pipeline_ui<V>(
    ui: &mut egui::Ui,
    title: &str,
    pipeline: &mut Pipeline<V>,
    draw: impl FnOnce(&mut egui::Ui, &mut V),
) {
    ui.label(RichText::new(title).size(16.0).strong());
    ui.add_space(6.0);

    match pipeline {
        Pipeline::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading data...");
            });
        }
        Pipeline::Failed(msg) => {
            ui.colored_label(Color32::from_rgb(220, 53, 69), format!("Error: {}", msg));
        }
        Pipeline::Ready(view) => draw(ui, view),
    }
}

impl eframe::App for UrbanScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.poll_pipelines();
        self.details.poll(ctx);

        if !self.all_settled() {
            ctx.request_repaint();
        }

        // Right panel - Building Details
        SidePanel::right("details")
            .min_width(300.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.details.show(ui);
                });
            });

        // Central panel - the two visualizations side by side
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        pipeline_ui(
                            ui,
                            "European Cities by Population",
                            &mut self.scatter,
                            |ui, view| view.show(ui),
                        );
                    });

                    ui.separator();

                    let mut clicked = None;
                    ui.vertical(|ui| {
                        pipeline_ui(ui, "Tallest Buildings", &mut self.bars, |ui, view| {
                            clicked = view.show(ui).map(|i| (view.model.buildings[i].clone(), i + 1));
                        });
                    });

                    if let Some((record, rank)) = clicked {
                        self.details.select(record, rank);
                    }
                });
            });
        });
    }
}
