//! Unit tests for eld-route.
//!
//! Planner tests use hand-made endpoints and summaries so that distances are
//! exact and independent of the haversine figures of real city pairs.

#[cfg(test)]
mod helpers {
    use chrono::NaiveDate;
    use eld_core::{Coordinate, PlanAnchor, TripRequest};

    use crate::{Located, Resolution, RouteEndpoints};

    pub fn anchor() -> PlanAnchor {
        let now = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        PlanAnchor::at(now)
    }

    pub fn trip() -> TripRequest {
        TripRequest::new("Yard", "Shipper Dock", "Receiver Dock", 20.0)
    }

    fn matched(lat: f64, lon: f64) -> Located {
        Located { coordinate: Coordinate::new(lat, lon), resolution: Resolution::Matched("test".into()) }
    }

    /// Pickup at (30, -100), dropoff at (40, -80): fractions map to round
    /// numbers.
    pub fn endpoints() -> RouteEndpoints {
        RouteEndpoints {
            current: matched(29.0, -101.0),
            pickup:  matched(30.0, -100.0),
            dropoff: matched(40.0, -80.0),
        }
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

// ── Locator ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod locator {
    use eld_core::Coordinate;

    use crate::locator::US_CENTROID;
    use crate::{Gazetteer, GazetteerEntry, Geocoder, Resolution};

    #[test]
    fn default_table_has_24_cities() {
        assert_eq!(Gazetteer::default().len(), 24);
    }

    #[test]
    fn case_insensitive_substring() {
        let g = Gazetteer::us_major_cities();
        let hit = g.locate("downtown DALLAS, tx 75201");
        assert_eq!(hit.resolution, Resolution::Matched("Dallas".into()));
        assert_eq!(hit.coordinate, Coordinate::new(32.7767, -96.7970));
        assert!(hit.is_resolved());
    }

    #[test]
    fn multi_word_names() {
        let g = Gazetteer::us_major_cities();
        assert_eq!(
            g.locate("san antonio, TX").resolution,
            Resolution::Matched("San Antonio".into())
        );
        assert_eq!(g.locate("Las Vegas Strip").resolution, Resolution::Matched("Las Vegas".into()));
    }

    #[test]
    fn first_table_entry_wins() {
        // Both cities occur; New York precedes Chicago in the table.
        let g = Gazetteer::us_major_cities();
        let hit = g.locate("Chicago via New York");
        assert_eq!(hit.resolution, Resolution::Matched("New York".into()));
    }

    #[test]
    fn unknown_falls_back_to_centroid() {
        let g = Gazetteer::us_major_cities();
        let miss = g.locate("Mobile, AL");
        assert_eq!(miss.resolution, Resolution::Fallback);
        assert_eq!(miss.coordinate, US_CENTROID);
        assert!(!miss.is_resolved());
    }

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(Gazetteer::us_major_cities().locate("").resolution, Resolution::Fallback);
    }

    #[test]
    fn empty_name_never_matches() {
        let g = Gazetteer::new(
            vec![
                GazetteerEntry::new("", Coordinate::new(0.0, 0.0)),
                GazetteerEntry::new("Mobile", Coordinate::new(30.6954, -88.0399)),
            ],
            US_CENTROID,
        );
        assert_eq!(g.locate("Mobile, AL").resolution, Resolution::Matched("Mobile".into()));
        assert_eq!(g.locate("Biloxi").resolution, Resolution::Fallback);
    }

    #[test]
    fn custom_fallback() {
        let fallback = Coordinate::new(1.0, 2.0);
        let g = Gazetteer::us_major_cities().with_fallback(fallback);
        assert_eq!(g.locate("Atlantis").coordinate, fallback);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{Geocoder, Resolution, RouteError, load_gazetteer_csv, load_gazetteer_reader};

    const CSV: &str = "\
name,latitude,longitude\n\
Mobile,30.6954,-88.0399\n\
Montgomery,32.3792,-86.3077\n\
";

    #[test]
    fn loads_in_file_order() {
        let g = load_gazetteer_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.entries()[0].name, "Mobile");
        assert_eq!(g.entries()[1].name, "Montgomery");
        assert_eq!(g.locate("Port of Mobile").resolution, Resolution::Matched("Mobile".into()));
    }

    #[test]
    fn header_only_is_empty_error() {
        let err = load_gazetteer_reader(Cursor::new("name,latitude,longitude\n")).unwrap_err();
        assert!(matches!(err, RouteError::EmptyGazetteer));
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "name,latitude,longitude\nMobile,north,-88.0\n";
        assert!(matches!(load_gazetteer_reader(Cursor::new(csv)), Err(RouteError::Parse(_))));
    }

    #[test]
    fn out_of_range_latitude_rejected() {
        let csv = "name,latitude,longitude\nNowhere,95.0,0.0\n";
        let err = load_gazetteer_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("row 2"), "got {err}");
    }

    #[test]
    fn blank_name_rejected() {
        let csv = "name,latitude,longitude\n  ,30.0,-88.0\n";
        assert!(matches!(load_gazetteer_reader(Cursor::new(csv)), Err(RouteError::Parse(_))));
    }

    #[test]
    fn loads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.csv");
        std::fs::File::create(&path).unwrap().write_all(CSV.as_bytes()).unwrap();
        assert_eq!(load_gazetteer_csv(&path).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_gazetteer_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, RouteError::Io(_)));
    }
}

// ── Estimator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimate {
    use eld_core::{Coordinate, DEFAULT_AVERAGE_SPEED_MPH, PlannerConfig};

    use crate::{DistanceEstimator, GreatCircleEstimator, RouteSummary};

    #[test]
    fn naive_hours_is_distance_over_55() {
        for miles in [0.0, 1.0, 55.0, 439.9, 500.0, 1200.0, 2777.7] {
            let s = RouteSummary::from_distance(miles, 55.0);
            assert_eq!(s.naive_driving_hours, miles / 55.0);
        }
    }

    #[test]
    fn great_circle_matches_haversine() {
        let dallas = Coordinate::new(32.7767, -96.7970);
        let atlanta = Coordinate::new(33.7490, -84.3880);
        let s = GreatCircleEstimator::default().estimate(dallas, atlanta);
        assert_eq!(s.total_distance_miles, dallas.distance_miles(atlanta));
        assert_eq!(s.naive_driving_hours, s.total_distance_miles / 55.0);
        assert!((s.total_distance_miles - 721.0).abs() < 5.0, "got {}", s.total_distance_miles);
    }

    #[test]
    fn default_speed_matches_planner_default() {
        assert_eq!(
            GreatCircleEstimator::default().average_speed_mph,
            PlannerConfig::default().average_speed_mph
        );
        assert_eq!(GreatCircleEstimator::default().average_speed_mph, DEFAULT_AVERAGE_SPEED_MPH);
    }

    #[test]
    fn naive_hours_not_capped() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        let s = GreatCircleEstimator::default().estimate(nyc, la);
        assert!(s.naive_driving_hours > 40.0);
    }

    #[test]
    fn same_point_is_zero() {
        let p = Coordinate::new(39.7392, -104.9903);
        let s = GreatCircleEstimator::default().estimate(p, p);
        assert_eq!(s.total_distance_miles, 0.0);
        assert_eq!(s.naive_driving_hours, 0.0);
    }
}

// ── Stop planner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use chrono::Duration;
    use eld_core::{PlannerConfig, StopKind, duration_hours, hours};

    use super::helpers::{anchor, approx, endpoints, trip};
    use crate::{RouteSummary, Stop, fuel_stop_count, plan_stops};

    fn plan(miles: f64) -> Vec<Stop> {
        let cfg = PlannerConfig::default();
        let summary = RouteSummary::from_distance(miles, cfg.average_speed_mph);
        plan_stops(&trip(), &summary, &endpoints(), &anchor(), &cfg)
    }

    fn kinds(stops: &[Stop]) -> Vec<StopKind> {
        stops.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn zero_distance_is_pickup_then_dropoff() {
        let stops = plan(0.0);
        assert_eq!(kinds(&stops), [StopKind::Pickup, StopKind::Dropoff]);
        let now = anchor().now;
        assert_eq!(stops[0].scheduled_arrival, now + Duration::hours(1));
        assert_eq!(stops[1].scheduled_arrival, now + Duration::hours(3));
    }

    #[test]
    fn pickup_and_dropoff_fields() {
        let stops = plan(300.0);
        let pickup = &stops[0];
        assert_eq!(pickup.location, "Shipper Dock");
        assert_eq!(pickup.coordinate, endpoints().pickup.coordinate);
        assert_eq!(pickup.duration_minutes, 60);
        assert_eq!(pickup.order, 0);

        let dropoff = stops.last().unwrap();
        assert_eq!(dropoff.kind, StopKind::Dropoff);
        assert_eq!(dropoff.location, "Receiver Dock");
        assert_eq!(dropoff.coordinate, endpoints().dropoff.coordinate);
        assert_eq!(dropoff.duration_minutes, 60);
        // now + 2h + 300/55 h + 1h
        assert_eq!(
            dropoff.scheduled_arrival,
            anchor().now + Duration::hours(2) + hours(300.0 / 55.0 + 1.0)
        );
    }

    #[test]
    fn exactly_eight_hours_has_no_break() {
        // 440 / 55 == 8.0 exactly; the threshold is strict.
        assert_eq!(kinds(&plan(440.0)), [StopKind::Pickup, StopKind::Dropoff]);
    }

    #[test]
    fn five_hundred_miles_has_break_but_no_fuel() {
        let stops = plan(500.0);
        assert_eq!(
            kinds(&stops),
            [StopKind::Pickup, StopKind::MandatoryBreak, StopKind::Dropoff]
        );
        let brk = &stops[1];
        assert_eq!(brk.location, "Mandatory Rest Break");
        assert_eq!(brk.duration_minutes, 30);
        assert_eq!(brk.scheduled_arrival, anchor().now + Duration::hours(10));
        // Fixed 0.6 of (30,-100)→(40,-80).
        assert!(approx(brk.coordinate.lat, 36.0));
        assert!(approx(brk.coordinate.lon, -88.0));
    }

    #[test]
    fn break_precedes_fuel_stop_by_arrival() {
        let stops = plan(1200.0);
        assert_eq!(
            kinds(&stops),
            [StopKind::Pickup, StopKind::MandatoryBreak, StopKind::FuelStop, StopKind::Dropoff]
        );
        let fuel = &stops[2];
        assert_eq!(fuel.location, "Fuel Stop 1");
        assert_eq!(fuel.duration_minutes, 30);
        let after_departure = fuel.scheduled_arrival - (anchor().now + Duration::hours(2));
        assert!((duration_hours(after_departure) - 1000.0 / 55.0).abs() < 1e-5);
        let frac = 1000.0 / 1200.0;
        assert!(approx(fuel.coordinate.lat, 30.0 + 10.0 * frac));
        assert!(approx(fuel.coordinate.lon, -100.0 + 20.0 * frac));
    }

    #[test]
    fn fast_estimate_keeps_fuel_stops_before_dropoff() {
        // Summary at 110 mph against a 55 mph config.
        let cfg = PlannerConfig::default();
        let summary = RouteSummary::from_distance(2000.0, 110.0);
        let stops = plan_stops(&trip(), &summary, &endpoints(), &anchor(), &cfg);

        assert_eq!(
            kinds(&stops),
            [
                StopKind::Pickup,
                StopKind::MandatoryBreak,
                StopKind::FuelStop,
                StopKind::FuelStop,
                StopKind::Dropoff,
            ]
        );
        for w in stops.windows(2) {
            assert!(w[0].scheduled_arrival <= w[1].scheduled_arrival, "{:?} then {:?}", w[0].kind, w[1].kind);
        }
        // Halfway through an 18.18h run.
        let departure = anchor().now + Duration::hours(2);
        let first_fuel = duration_hours(stops[2].scheduled_arrival - departure);
        assert!((first_fuel - 1000.0 / 110.0).abs() < 1e-5);
    }

    #[test]
    fn fuel_stops_numbered_from_one() {
        let stops = plan(2500.0);
        let fuel: Vec<&str> = stops
            .iter()
            .filter(|s| s.kind == StopKind::FuelStop)
            .map(|s| s.location.as_str())
            .collect();
        assert_eq!(fuel, ["Fuel Stop 1", "Fuel Stop 2"]);
    }

    #[test]
    fn fuel_count_is_floor_of_thousands() {
        let cfg = PlannerConfig::default();
        assert_eq!(fuel_stop_count(0.0, &cfg), 0);
        assert_eq!(fuel_stop_count(999.99, &cfg), 0);
        assert_eq!(fuel_stop_count(1000.0, &cfg), 1);
        assert_eq!(fuel_stop_count(2999.0, &cfg), 2);
    }

    #[test]
    fn invariants_hold_across_distances() {
        let mut miles = 0.0;
        while miles <= 6_000.0 {
            let stops = plan(miles);
            let naive = miles / 55.0;

            let fuel = stops.iter().filter(|s| s.kind == StopKind::FuelStop).count();
            assert_eq!(fuel, (miles / 1000.0).floor() as usize, "fuel count at {miles}");

            let has_break = stops.iter().any(|s| s.kind == StopKind::MandatoryBreak);
            assert_eq!(has_break, naive > 8.0, "break presence at {miles}");

            for (i, s) in stops.iter().enumerate() {
                assert_eq!(s.order as usize, i, "order at {miles}");
                assert!(s.duration_minutes > 0);
            }
            for w in stops.windows(2) {
                assert!(
                    w[0].scheduled_arrival <= w[1].scheduled_arrival,
                    "arrivals out of order at {miles}: {:?} then {:?}",
                    w[0].kind,
                    w[1].kind
                );
            }
            assert_eq!(stops.first().map(|s| s.kind), Some(StopKind::Pickup));
            assert_eq!(stops.last().map(|s| s.kind), Some(StopKind::Dropoff));

            miles += 137.5;
        }
    }

    #[test]
    fn identical_inputs_identical_output() {
        assert_eq!(plan(1750.0), plan(1750.0));
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use super::helpers::endpoints;
    use crate::route_geometry;

    #[test]
    fn longitude_first_in_trip_order() {
        let g = route_geometry(&endpoints());
        assert_eq!(g, vec![[-101.0, 29.0], [-100.0, 30.0], [-80.0, 40.0]]);
    }
}
