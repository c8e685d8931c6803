// End-to-end load -> model pipeline over the shipped datasets, headless.

use std::path::Path;

use urbanscope::charts::{
    image_url_for_rank, BarModel, ScatterModel, CHART_WIDTH, LARGE_POPULATION,
};
use urbanscope::data::{load_buildings, load_cities, DataError};

fn data_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn scatter_pipeline_renders_the_eu_subset() {
    let cities = load_cities(&data_path("cities.csv")).expect("cities should load");
    let eu_count = cities.iter().filter(|c| c.eu).count();

    let model = ScatterModel::build(&cities);
    assert_eq!(model.count(), eu_count);
    assert_eq!(model.count_text(), format!("Number of cities: {}", eu_count));
    assert!(model.count() < cities.len(), "non-EU cities must be filtered out");

    for mark in &model.marks {
        if mark.population >= LARGE_POPULATION {
            assert_eq!(mark.radius, 8.0, "{} should be large", mark.city);
            assert!(mark.labeled, "{} should be labeled", mark.city);
        } else {
            assert_eq!(mark.radius, 4.0, "{} should be small", mark.city);
            assert!(!mark.labeled, "{} should not be labeled", mark.city);
        }
    }

    // London is not in the EU subset despite its population
    assert!(model.marks.iter().all(|m| m.city != "London"));
}

#[test]
fn bar_pipeline_sorts_and_maps_ranks_to_photos() {
    let buildings = load_buildings(&data_path("buildings.csv")).expect("buildings should load");
    let model = BarModel::build(&buildings);

    assert_eq!(model.buildings.len(), 10);
    assert_eq!(model.buildings[0].building, "Burj Khalifa");

    // total descending order by height_ft
    for pair in model.buildings.windows(2) {
        assert!(pair[0].height_ft >= pair[1].height_ft);
    }

    // the 1739 ft tie keeps file order
    let guangzhou = model
        .buildings
        .iter()
        .position(|b| b.building == "Guangzhou CTF Finance Centre")
        .unwrap();
    let tianjin = model
        .buildings
        .iter()
        .position(|b| b.building == "Tianjin CTF Finance Centre")
        .unwrap();
    assert!(guangzhou < tianjin);

    // widths shrink with rank; the tallest bar spans the chart
    assert!((model.marks[0].width - CHART_WIDTH).abs() < 1e-9);
    for pair in model.marks.windows(2) {
        assert!(pair[0].width >= pair[1].width);
    }

    // every bar resolves to its photo; an eleventh building would not
    for mark in &model.marks {
        assert!(image_url_for_rank(mark.rank).is_some());
    }
    assert_eq!(image_url_for_rank(model.marks.len() + 1), None);
}

#[test]
fn clicking_the_tallest_bar_selects_the_first_photo() {
    let buildings = load_buildings(&data_path("buildings.csv")).expect("buildings should load");
    let model = BarModel::build(&buildings);

    let first = &model.marks[0];
    let hit = model
        .mark_at(first.width / 2.0, first.y + first.band / 2.0)
        .expect("the tallest bar should be clickable");
    assert_eq!(model.buildings[hit].building, "Burj Khalifa");
    assert_eq!(
        image_url_for_rank(model.marks[hit].rank),
        image_url_for_rank(1)
    );
}

#[test]
fn missing_file_is_a_load_failure() {
    let err = load_cities(&data_path("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, DataError::Csv(_)));
}
