use std::fs;

use neo_impact_calculator::catalog::{
    AsteroidRecord, AsteroidSource, Catalog, CatalogError, CloseApproach, FieldValue, load_feed,
    parse_feed,
};
use neo_impact_calculator::impact::{ComputationError, compute_impact};

const FEED_A: &str = r#"{
  "element_count": 2,
  "near_earth_objects": {
    "2029-04-14": [
      {
        "name": "(2023 NT1)",
        "neo_reference_id": "54373793",
        "is_potentially_hazardous_asteroid": false,
        "estimated_diameter": {
          "meters": { "estimated_diameter_min": 24.5, "estimated_diameter_max": 54.8 }
        },
        "close_approach_data": [
          {
            "close_approach_date": "2023-07-13",
            "relative_velocity": { "kilometers_per_second": "22.84" },
            "miss_distance": { "kilometers": "60000.0" }
          }
        ]
      }
    ],
    "2029-04-13": [
      {
        "name": "99942 Apophis (2004 MN4)",
        "neo_reference_id": "2000042",
        "is_potentially_hazardous_asteroid": true,
        "estimated_diameter": {
          "meters": { "estimated_diameter_min": "320.0", "estimated_diameter_max": "400.0" }
        },
        "close_approach_data": [
          {
            "close_approach_date": "2029-04-13",
            "relative_velocity": { "kilometers_per_second": "7.42" },
            "miss_distance": { "kilometers": "38017.0" }
          },
          {
            "close_approach_date": "2036-03-27",
            "relative_velocity": { "kilometers_per_second": "5.10" },
            "miss_distance": { "kilometers": "not-measured" }
          }
        ]
      }
    ]
  }
}"#;

const FEED_MIXED: &str = r#"{
  "near_earth_objects": {
    "2029-04-13": [
      {
        "name": "99942 Apophis",
        "neo_reference_id": "2000042",
        "is_potentially_hazardous_asteroid": true,
        "estimated_diameter": {
          "meters": { "estimated_diameter_min": "320.0", "estimated_diameter_max": "400.0" }
        },
        "close_approach_data": [
          {
            "relative_velocity": { "kilometers_per_second": "7.42" },
            "miss_distance": { "kilometers": "31000.0" }
          }
        ]
      },
      {
        "name": "Shapeless",
        "neo_reference_id": "1",
        "estimated_diameter": "n/a",
        "close_approach_data": null
      },
      {
        "name": "Odd Velocity",
        "neo_reference_id": 2,
        "estimated_diameter": { "meters": { "estimated_diameter_min": 10, "estimated_diameter_max": [] } },
        "close_approach_data": [ { "relative_velocity": "fast", "miss_distance": 5 } ]
      },
      "not an object",
      42
    ]
  }
}"#;

const FEED_B: &str = r#"{
  "near_earth_objects": {
    "2024-06-29": [
      {
        "name": "2024 MK",
        "neo_reference_id": "54460045",
        "estimated_diameter": { "meters": { "estimated_diameter_min": "120.0" } },
        "close_approach_data": []
      },
      {
        "name": "(2023 NT1)",
        "neo_reference_id": "54373793",
        "close_approach_data": [
          { "miss_distance": { "kilometers": "59000.5" } }
        ]
      }
    ]
  }
}"#;

#[test]
fn feeds_flatten_by_date_in_ascending_order() {
    let records = parse_feed(FEED_A).expect("feed a");
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["99942 Apophis (2004 MN4)", "(2023 NT1)"]);

    let apophis = &records[0];
    assert_eq!(apophis.catalog_id, "2000042");
    assert!(apophis.is_potentially_hazardous);
    assert_eq!(apophis.diameter_min_m, Some(FieldValue::from("320.0")));
    assert_eq!(apophis.close_approaches.len(), 2);
    assert_eq!(
        apophis.close_approaches[1].date.map(|d| d.to_string()),
        Some("2036-03-27".to_string())
    );

    let nt1 = &records[1];
    assert_eq!(nt1.diameter_max_m.as_ref().and_then(|v| v.as_f64()), Some(54.8));
}

#[test]
fn absent_fields_stay_absent() {
    let records = parse_feed(FEED_B).expect("feed b");
    let mk = &records[0];
    assert!(!mk.is_potentially_hazardous);
    assert!(mk.diameter_min_m.is_some());
    assert!(mk.diameter_max_m.is_none());
    assert!(mk.close_approaches.is_empty());

    let nt1 = &records[1];
    assert!(nt1.diameter_min_m.is_none());
    assert!(nt1.close_approaches[0].relative_velocity_km_s.is_none());
}

#[test]
fn malformed_records_do_not_discard_their_neighbours() {
    let records = parse_feed(FEED_MIXED).expect("mixed feed");
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["99942 Apophis", "Shapeless", "Odd Velocity"]);

    let shapeless = &records[1];
    assert!(shapeless.diameter_min_m.is_none());
    assert!(shapeless.close_approaches.is_empty());

    let odd = &records[2];
    assert_eq!(odd.catalog_id, "2");
    assert_eq!(odd.close_approaches.len(), 1);
    assert!(odd.close_approaches[0].relative_velocity_km_s.is_none());
    assert!(odd.close_approaches[0].miss_distance_km.is_none());

    let catalog = Catalog::new(records);
    let apophis = catalog.lookup("99942 apophis").expect("apophis survives");
    assert!(compute_impact(&apophis, 3000.0).is_ok());

    let shapeless = catalog.lookup("shapeless").expect("resolvable");
    assert_eq!(
        compute_impact(&shapeless, 3000.0).unwrap_err(),
        ComputationError::MissingField {
            field: "diameter_min_m"
        }
    );
    let odd = catalog.lookup("odd-velocity").expect("resolvable");
    assert!(matches!(
        compute_impact(&odd, 3000.0).unwrap_err(),
        ComputationError::InvalidNumericFormat {
            field: "diameter_max_m",
            ..
        }
    ));
}

#[test]
fn mixed_feed_files_load_every_object_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mixed.json");
    fs::write(&path, FEED_MIXED).unwrap();
    assert_eq!(Catalog::load_feeds([&path]).len(), 3);
}

#[test]
fn malformed_json_is_an_error_for_single_feeds() {
    assert!(matches!(parse_feed("{ not json"), Err(CatalogError::Json(_))));
    assert!(matches!(
        load_feed("does/not/exist.json"),
        Err(CatalogError::Io(_))
    ));
}

#[test]
fn feed_directories_load_sorted_and_skip_bad_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("2.json"), FEED_B).unwrap();
    fs::write(dir.path().join("1.json"), FEED_A).unwrap();
    fs::write(dir.path().join("3.json"), "{ broken").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let catalog = Catalog::load_feeds([dir.path().to_path_buf(), dir.path().join("missing.json")]);
    let names: Vec<_> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["99942 Apophis (2004 MN4)", "(2023 NT1)", "2024 MK", "(2023 NT1)"]
    );
    assert!(catalog.find("2000042").is_some());
}

#[test]
fn missing_feeds_yield_an_empty_catalog() {
    let catalog = Catalog::load_feeds(["no/such/feed.json"]);
    assert!(catalog.is_empty());
}

#[test]
fn nearest_ranking_uses_closest_parseable_pass_per_name() {
    let mut records = parse_feed(FEED_A).expect("feed a");
    records.extend(parse_feed(FEED_B).expect("feed b"));
    let catalog = Catalog::new(records);

    let ranking = catalog.nearest_approaches(5);
    let summary: Vec<_> = ranking
        .iter()
        .map(|entry| (entry.name.as_str(), entry.miss_distance_km))
        .collect();
    // 2024 MK has no approaches; NT1 keeps its closer second sighting.
    assert_eq!(
        summary,
        vec![
            ("99942 Apophis (2004 MN4)", 38017.0),
            ("(2023 NT1)", 59000.5)
        ]
    );

    assert_eq!(
        ranking[0].approach_date.map(|d| d.to_string()),
        Some("2029-04-13".to_string())
    );
    assert_eq!(ranking[1].approach_date, None);

    assert_eq!(catalog.nearest_approaches(1).len(), 1);
    assert!(catalog.nearest_approaches(0).is_empty());
}

#[test]
fn unnamed_records_rank_as_unknown() {
    let catalog = Catalog::new(vec![
        AsteroidRecord::new("", "1", false, 1.0, 1.0)
            .with_approach(CloseApproach::new(1.0, 700.0))
            .with_approach(CloseApproach::new(1.0, 500.0).on("2030-01-02".parse().unwrap())),
        AsteroidRecord::new("Far", "2", false, 1.0, 1.0)
            .with_approach(CloseApproach::new(1.0, 900.0)),
    ]);
    let ranking = catalog.nearest_approaches(5);
    assert_eq!(ranking[0].name, "UNKNOWN");
    assert_eq!(ranking[0].miss_distance_km, 500.0);
    assert_eq!(
        ranking[0].approach_date.map(|d| d.to_string()),
        Some("2030-01-02".to_string())
    );
    assert_eq!(ranking[1].name, "Far");
}
