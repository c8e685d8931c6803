//! Scatter View Widget
//! Interactive population scatter plot with a hover tooltip.

use egui::{Align2, Color32, Id, Pos2, RichText};
use egui_plot::{Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};

use crate::charts::{ScatterModel, LABEL_OFFSET, PLOT_HEIGHT, PLOT_WIDTH};

const CIRCLE_COLOR: Color32 = Color32::BLUE;
const CIRCLE_OPACITY: f32 = 0.5;
const HOVER_COLOR: Color32 = Color32::RED;
const LABEL_SIZE: f32 = 11.0;
const TOOLTIP_FADE_SECS: f32 = 0.2;

/// Population scatter plot with size-by-population circles, labels for the
/// large cities, and a tooltip following the hovered circle.
pub struct ScatterView {
    pub model: ScatterModel,
    hovered: Option<usize>,
    /// Anchor and content of the tooltip, kept while it fades out.
    tooltip: Option<(Pos2, [(String, String); 2])>,
}

impl ScatterView {
    pub fn new(model: ScatterModel) -> Self {
        Self {
            model,
            hovered: None,
            tooltip: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.label(self.model.count_text());
        ui.add_space(4.0);

        let marks = self.model.marks.clone();

        let response = Plot::new("population_plot")
            .width(PLOT_WIDTH as f32)
            .height(PLOT_HEIGHT as f32)
            .show_axes([false, false])
            .show_grid([false, false])
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [0.0, 0.0],
                    [PLOT_WIDTH, PLOT_HEIGHT],
                ));

                // hover detection in screen space against each circle
                let mut hovered = None;
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let pointer = plot_ui.screen_from_plot(pointer);
                    for (i, mark) in marks.iter().enumerate() {
                        let center = plot_ui.screen_from_plot(flip(mark.x, mark.y));
                        if center.distance(pointer) <= mark.radius {
                            hovered = Some(i);
                            break;
                        }
                    }
                }

                let fill = CIRCLE_COLOR.gamma_multiply(CIRCLE_OPACITY);
                for radius in [4.0f32, 8.0] {
                    let circles: PlotPoints = marks
                        .iter()
                        .enumerate()
                        .filter(|(i, m)| m.radius == radius && Some(*i) != hovered)
                        .map(|(_, m)| {
                            let p = flip(m.x, m.y);
                            [p.x, p.y]
                        })
                        .collect();
                    plot_ui.points(Points::new(circles).radius(radius).color(fill).filled(true));
                }

                if let Some(i) = hovered {
                    let mark = &marks[i];
                    let p = flip(mark.x, mark.y);
                    plot_ui.points(
                        Points::new(vec![[p.x, p.y]])
                            .radius(mark.radius)
                            .color(HOVER_COLOR)
                            .filled(true),
                    );
                }

                // name labels above the large cities
                for mark in marks.iter().filter(|m| m.labeled) {
                    plot_ui.text(
                        Text::new(
                            flip(mark.x, mark.y - LABEL_OFFSET),
                            RichText::new(&mark.city).size(LABEL_SIZE),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }

                hovered.map(|i| {
                    let mark = &marks[i];
                    (i, plot_ui.screen_from_plot(flip(mark.x, mark.y)))
                })
            });

        self.hovered = response.inner.map(|(i, _)| i);
        if let Some((i, anchor)) = response.inner {
            self.tooltip = Some((anchor, self.model.marks[i].tooltip_lines()));
        }

        // fade the tooltip out over 200 ms after the cursor leaves
        let opacity = ui.ctx().animate_bool_with_time(
            Id::new("scatter_tooltip"),
            self.hovered.is_some(),
            TOOLTIP_FADE_SECS,
        );
        if opacity > 0.0 {
            if let Some((anchor, lines)) = &self.tooltip {
                let lines = lines.clone();
                let anchor = *anchor;
                egui::show_tooltip_at(
                    ui.ctx(),
                    response.response.layer_id,
                    Id::new("scatter_tooltip_area"),
                    anchor,
                    |ui| {
                        ui.set_opacity(opacity);
                        for (label, value) in &lines {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(label).strong());
                                ui.label(value);
                            });
                        }
                    },
                );
            }
        } else {
            self.tooltip = None;
        }
    }
}

/// CSV coordinates are screen space (y down); the plot's y grows upward.
fn flip(x: f64, y: f64) -> PlotPoint {
    PlotPoint::new(x, PLOT_HEIGHT - y)
}
