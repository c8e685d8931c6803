//! Charts module - view models and scales

mod assets;
mod bars;
mod scale;
mod scatter;

pub use assets::{image_url_for_rank, RANK_IMAGE_URLS};
pub use bars::{
    BarMark, BarModel, CHART_HEIGHT, CHART_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT,
    MARGIN_TOP,
};
pub use scale::{BandScale, LinearScale};
pub use scatter::{CityMark, ScatterModel, LABEL_OFFSET, LARGE_POPULATION, PLOT_HEIGHT, PLOT_WIDTH};
