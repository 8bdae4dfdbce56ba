use pitch_chart::core::{PlottedPoint, StrikeZoneGeometry, ZoneScheme, classify};
use proptest::prelude::*;

proptest! {
    #[test]
    fn standard13_is_total_over_the_plot(
        x in -20.0f64..=20.0,
        y in -12.0f64..=36.0
    ) {
        let geometry = StrikeZoneGeometry::default();
        let point = PlottedPoint::new(x, y);
        let zone = classify(point, ZoneScheme::Standard13, geometry);

        prop_assert!(zone.is_some());
        let zone = zone.expect("classified").get();
        if geometry.rect.contains(point) {
            prop_assert!((1..=9).contains(&zone));
        } else {
            prop_assert!((11..=14).contains(&zone));
        }
    }

    #[test]
    fn rh7_only_classifies_inside_the_strike_zone(
        x in -20.0f64..=20.0,
        y in -12.0f64..=36.0
    ) {
        let geometry = StrikeZoneGeometry::default();
        let point = PlottedPoint::new(x, y);
        let zone = classify(point, ZoneScheme::Rh7, geometry);

        if geometry.rect.contains(point) {
            prop_assert!(zone.is_some_and(|zone| (1..=7).contains(&zone.get())));
        } else {
            prop_assert!(zone.is_none());
        }
    }
}
