use approx::assert_abs_diff_eq;
use pitch_chart::core::{
    PlotAxes, PlottedPoint, StrikeZoneGeometry, ZoneId, ZoneScheme, classify, zone_bounds,
    zone_center,
};

fn standard(x: f64, y: f64) -> Option<u8> {
    classify(
        PlottedPoint::new(x, y),
        ZoneScheme::Standard13,
        StrikeZoneGeometry::default(),
    )
    .map(ZoneId::get)
}

fn rh7(x: f64, y: f64) -> Option<u8> {
    classify(
        PlottedPoint::new(x, y),
        ZoneScheme::Rh7,
        StrikeZoneGeometry::default(),
    )
    .map(ZoneId::get)
}

fn bounds(zone: u8) -> pitch_chart::core::DomainRect {
    let zone = ZoneId::new(zone, ZoneScheme::Standard13).expect("known zone");
    zone_bounds(zone, ZoneScheme::Standard13, StrikeZoneGeometry::default()).expect("grid zone")
}

#[test]
fn center_of_strike_zone_is_zone_five() {
    assert_eq!(standard(0.0, 12.0), Some(5));
}

#[test]
fn grid_is_numbered_left_to_right_top_to_bottom() {
    let columns = [-5.5, 0.0, 5.5];
    let rows = [20.0, 12.0, 4.0];
    let mut expected = 1;
    for y in rows {
        for x in columns {
            assert_eq!(standard(x, y), Some(expected), "point ({x}, {y})");
            expected += 1;
        }
    }
}

#[test]
fn outside_regions_use_fixed_ids() {
    assert_eq!(standard(-15.0, 12.0), Some(11));
    assert_eq!(standard(0.0, -8.0), Some(12));
    assert_eq!(standard(0.0, 30.0), Some(13));
    assert_eq!(standard(15.0, 12.0), Some(14));
}

#[test]
fn boundary_points_belong_to_lower_indexed_zone() {
    let first_column_edge = bounds(1).right;
    assert_eq!(standard(first_column_edge, 20.0), Some(1));

    let second_column_edge = bounds(2).right;
    assert_eq!(standard(second_column_edge, 20.0), Some(2));

    let first_row_edge = bounds(1).bottom;
    assert_eq!(standard(0.0, first_row_edge), Some(2));

    let second_row_edge = bounds(4).bottom;
    assert_eq!(standard(0.0, second_row_edge), Some(5));
}

#[test]
fn strike_zone_edges_are_inside_the_grid() {
    assert_eq!(standard(-8.5, 12.0), Some(4));
    assert_eq!(standard(8.5, 12.0), Some(6));
    assert_eq!(standard(0.0, 24.0), Some(2));
    assert_eq!(standard(0.0, 0.0), Some(8));
}

#[test]
fn pitcher_view_clicks_still_number_from_batter_perspective() {
    let geometry = StrikeZoneGeometry::default();
    let pitcher_view = PlotAxes::strike_zone_default()
        .view_config(true)
        .expect("valid axes");
    let batter_view = PlotAxes::strike_zone_default()
        .view_config(false)
        .expect("valid axes");

    let zone_one_center = PlottedPoint::new(-17.0 / 3.0, 20.0);
    let batter_pointer = batter_view.to_pointer(zone_one_center);
    let pitcher_pointer = pitcher_view.to_pointer(zone_one_center);

    assert!(batter_pointer.x < 200.0);
    assert!(pitcher_pointer.x > 200.0);

    for (view, pointer) in [(batter_view, batter_pointer), (pitcher_view, pitcher_pointer)] {
        let domain = view.to_domain(pointer).expect("inside plot");
        let zone = classify(domain, ZoneScheme::Standard13, geometry).map(ZoneId::get);
        assert_eq!(zone, Some(1));
    }

    let screen_left_top = batter_pointer;
    let domain = pitcher_view
        .to_domain(screen_left_top)
        .expect("inside plot");
    let zone = classify(domain, ZoneScheme::Standard13, geometry).map(ZoneId::get);
    assert_eq!(zone, Some(3));
}

#[test]
fn rh7_layout_and_partial_coverage() {
    assert_eq!(rh7(-5.5, 20.0), Some(1));
    assert_eq!(rh7(0.0, 20.0), Some(2));
    assert_eq!(rh7(5.5, 20.0), Some(3));
    assert_eq!(rh7(-5.5, 12.0), Some(4));
    assert_eq!(rh7(5.5, 12.0), Some(4));
    assert_eq!(rh7(-5.5, 4.0), Some(5));
    assert_eq!(rh7(5.5, 4.0), Some(7));
    assert_eq!(rh7(-15.0, 12.0), None);
    assert_eq!(rh7(0.0, 30.0), None);
}

#[test]
fn zone_centers_map_back_into_their_zones() {
    let geometry = StrikeZoneGeometry::default();
    for scheme in [ZoneScheme::Standard13, ZoneScheme::Rh7] {
        for &id in scheme.zone_ids() {
            let zone = ZoneId::new(id, scheme).expect("known zone");
            let center = zone_center(zone, scheme, geometry).expect("every zone has a center");
            assert_eq!(classify(center, scheme, geometry), Some(zone), "{scheme:?} {id}");
        }
    }
}

#[test]
fn zone_five_center_and_outside_bounds() {
    let geometry = StrikeZoneGeometry::default();
    let five = ZoneId::new(5, ZoneScheme::Standard13).expect("zone 5");
    let center = zone_center(five, ZoneScheme::Standard13, geometry).expect("center");
    assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(center.y, 12.0, epsilon = 1e-9);

    assert!(zone_bounds(ZoneId::OUTSIDE_LEFT, ZoneScheme::Standard13, geometry).is_none());

    let band = ZoneId::new(4, ZoneScheme::Rh7).expect("zone 4");
    let band = zone_bounds(band, ZoneScheme::Rh7, geometry).expect("band bounds");
    assert_abs_diff_eq!(band.left, -8.5, epsilon = 1e-12);
    assert_abs_diff_eq!(band.right, 8.5, epsilon = 1e-12);
}

#[test]
fn non_finite_points_are_not_classified() {
    assert_eq!(standard(f64::NAN, 12.0), None);
    assert_eq!(standard(0.0, f64::INFINITY), None);
}
