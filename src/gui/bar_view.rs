//! Bar View Widget
//! Building height chart with hover highlight and click-to-select bars.

use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Plot, PlotBounds, PlotPoint, Text};

use crate::charts::{
    BarModel, CHART_HEIGHT, CHART_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
};

const BAR_COLOR: Color32 = Color32::from_rgb(128, 0, 128);
const BAR_OPACITY: f32 = 0.75;
const HOVER_COLOR: Color32 = Color32::RED;
const LABEL_SIZE: f32 = 11.0;
/// Name labels sit in the left margin.
const NAME_LABEL_X: f64 = -(MARGIN_LEFT - 5.0);
/// Inset of the white height label from the bar's end.
const HEIGHT_LABEL_INSET: f64 = 4.0;

/// Horizontal bar chart of buildings sorted by height. Returns the index of
/// the clicked bar, which the caller feeds into the details panel.
pub struct BarView {
    pub model: BarModel,
}

impl BarView {
    pub fn new(model: BarModel) -> Self {
        Self { model }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<usize> {
        let model = &self.model;

        let response = Plot::new("height_chart")
            .width((MARGIN_LEFT + CHART_WIDTH + MARGIN_RIGHT) as f32)
            .height((MARGIN_TOP + CHART_HEIGHT + MARGIN_BOTTOM) as f32)
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
                    [-MARGIN_LEFT, -MARGIN_BOTTOM],
                    [CHART_WIDTH + MARGIN_RIGHT, CHART_HEIGHT + MARGIN_TOP],
                ));

                // hover hit-test in chart coordinates (model y grows downward)
                let hovered = plot_ui
                    .pointer_coordinate()
                    .and_then(|p| model.mark_at(p.x, CHART_HEIGHT - p.y));

                let clicked = plot_ui.response().clicked().then_some(hovered).flatten();

                let bars: Vec<Bar> = model
                    .marks
                    .iter()
                    .enumerate()
                    .map(|(i, mark)| {
                        let fill = if hovered == Some(i) {
                            HOVER_COLOR
                        } else {
                            BAR_COLOR.gamma_multiply(BAR_OPACITY)
                        };
                        let center = CHART_HEIGHT - (mark.y + mark.band / 2.0);
                        Bar::new(center, mark.width.max(0.0))
                            .width(mark.band)
                            .fill(fill)
                            .stroke(Stroke::NONE)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).horizontal());

                for (mark, building) in model.marks.iter().zip(&model.buildings) {
                    let center = CHART_HEIGHT - (mark.y + mark.band / 2.0);

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(NAME_LABEL_X, center),
                            RichText::new(&building.building).size(LABEL_SIZE),
                        )
                        .anchor(Align2::LEFT_CENTER),
                    );

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(mark.width.max(0.0) - HEIGHT_LABEL_INSET, center),
                            RichText::new(&mark.height_label)
                                .size(LABEL_SIZE)
                                .color(Color32::WHITE),
                        )
                        .anchor(Align2::RIGHT_CENTER),
                    );
                }

                clicked
            });

        response.inner
    }
}
