//! Bar Model Module
//! Maps building records onto the height bar chart.

use std::cmp::Ordering;

use crate::charts::{BandScale, LinearScale};
use crate::data::BuildingRecord;

/// Chart margins inside the 500x500 outer box.
pub const MARGIN_TOP: f64 = 75.0;
pub const MARGIN_RIGHT: f64 = 150.0;
pub const MARGIN_BOTTOM: f64 = 50.0;
pub const MARGIN_LEFT: f64 = 70.0;

/// Inner chart area.
pub const CHART_WIDTH: f64 = 500.0 - MARGIN_LEFT - MARGIN_RIGHT;
pub const CHART_HEIGHT: f64 = 500.0 - MARGIN_TOP - MARGIN_BOTTOM;

/// Fractional padding between bands.
pub const BAND_PADDING: f64 = 0.25;

/// One rendered bar, in chart coordinates (y grows downward).
#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    /// 1-based position in the height-descending order.
    pub rank: usize,
    /// Top edge of the bar.
    pub y: f64,
    /// Bar thickness (the band width).
    pub band: f64,
    /// Rendered length: `CHART_WIDTH - scale(height_m)`. Kept unclamped so
    /// length strictly follows `height_m`; the view clamps at zero.
    pub width: f64,
    /// White label at the bar's end.
    pub height_label: String,
}

/// View model for the building height chart: records sorted descending by
/// `height_ft`, with one bar per record.
#[derive(Debug, Clone)]
pub struct BarModel {
    pub buildings: Vec<BuildingRecord>,
    pub marks: Vec<BarMark>,
    band_scale: BandScale,
}

impl BarModel {
    pub fn build(buildings: &[BuildingRecord]) -> Self {
        let mut sorted = buildings.to_vec();
        // stable: equal heights keep their input order
        sorted.sort_by(|a, b| {
            b.height_ft
                .partial_cmp(&a.height_ft)
                .unwrap_or(Ordering::Equal)
        });

        let names: Vec<String> = sorted.iter().map(|b| b.building.clone()).collect();
        let band_scale = BandScale::new(names, (0.0, CHART_HEIGHT), BAND_PADDING);

        let max_m = sorted.iter().map(|b| b.height_m).fold(0.0, f64::max);
        let size_scale = LinearScale::new((0.0, max_m), (CHART_HEIGHT, 0.0));

        let marks = sorted
            .iter()
            .enumerate()
            .map(|(i, b)| BarMark {
                rank: i + 1,
                y: band_scale.position(&b.building).unwrap_or(0.0),
                band: band_scale.bandwidth(),
                width: CHART_WIDTH - size_scale.scale(b.height_m),
                height_label: format!("{} ft", b.height_ft),
            })
            .collect();

        Self {
            buildings: sorted,
            marks,
            band_scale,
        }
    }

    /// Index of the bar under a chart coordinate, if the point lies inside a
    /// drawn bar.
    pub fn mark_at(&self, x: f64, y: f64) -> Option<usize> {
        let i = self.band_scale.band_at(y)?;
        let mark = &self.marks[i];
        (x >= 0.0 && x <= mark.width).then_some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(name: &str, height_ft: f64, height_m: f64) -> BuildingRecord {
        BuildingRecord {
            building: name.to_string(),
            city: "City".to_string(),
            country: "Country".to_string(),
            height_ft,
            height_m,
            floors: 100,
            completed: 2010,
        }
    }

    #[test]
    fn sorts_descending_by_height_ft() {
        let model = BarModel::build(&[
            building("A", 800.0, 244.0),
            building("B", 1200.0, 366.0),
        ]);

        let order: Vec<&str> = model.buildings.iter().map(|b| b.building.as_str()).collect();
        assert_eq!(order, ["B", "A"]);
        assert_eq!(model.marks[0].rank, 1);
        assert_eq!(model.marks[1].rank, 2);
    }

    #[test]
    fn equal_heights_keep_input_order() {
        let model = BarModel::build(&[
            building("First", 1739.0, 530.0),
            building("Second", 1739.0, 530.0),
            building("Taller", 2000.0, 610.0),
        ]);

        let order: Vec<&str> = model.buildings.iter().map(|b| b.building.as_str()).collect();
        assert_eq!(order, ["Taller", "First", "Second"]);
    }

    #[test]
    fn order_follows_feet_even_when_meters_disagree() {
        // height_ft and height_m need not be rank-consistent
        let model = BarModel::build(&[
            building("X", 1000.0, 310.0),
            building("Y", 990.0, 312.0),
        ]);

        let by_ft: Vec<&str> = model.buildings.iter().map(|b| b.building.as_str()).collect();
        assert_eq!(by_ft, ["X", "Y"]);

        let mut by_m = model.buildings.clone();
        by_m.sort_by(|a, b| b.height_m.partial_cmp(&a.height_m).unwrap());
        let by_m: Vec<&str> = by_m.iter().map(|b| b.building.as_str()).collect();
        assert_eq!(by_m, ["Y", "X"]);
        assert_ne!(by_ft, by_m);
    }

    #[test]
    fn bar_width_decreases_with_rank_in_meters() {
        let model = BarModel::build(&[
            building("A", 2717.0, 828.0),
            building("B", 2073.0, 632.0),
            building("C", 1776.0, 541.0),
        ]);

        // rank 1 has the largest width, and the tallest bar spans the chart
        assert!((model.marks[0].width - CHART_WIDTH).abs() < 1e-9);
        assert!(model.marks[0].width > model.marks[1].width);
        assert!(model.marks[1].width > model.marks[2].width);
    }

    #[test]
    fn height_labels_carry_the_feet_value() {
        let model = BarModel::build(&[building("A", 2717.0, 828.0)]);
        assert_eq!(model.marks[0].height_label, "2717 ft");
    }

    #[test]
    fn mark_at_hits_bars_and_rejects_gaps() {
        let model = BarModel::build(&[
            building("A", 2717.0, 828.0),
            building("B", 2073.0, 632.0),
        ]);

        let first = &model.marks[0];
        let mid_y = first.y + first.band / 2.0;
        assert_eq!(model.mark_at(first.width / 2.0, mid_y), Some(0));

        // beyond the bar's end
        assert_eq!(model.mark_at(first.width + 1.0, mid_y), None);
        // in the padding gap between the two bands
        let gap_y = first.y + first.band + 1e-3;
        assert_eq!(model.mark_at(1.0, gap_y), None);
    }
}
