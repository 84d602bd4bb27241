use neo_impact_calculator::catalog::{
    AsteroidRecord, AsteroidSource, Catalog, CloseApproach, LookupError,
};

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        AsteroidRecord::new("99942 Apophis", "2000042", true, "320.0", "400.0")
            .with_approach(CloseApproach::new("7.42", "31000.0")),
        AsteroidRecord::new("(2002 AZ1)", "3102787", false, 40.0, 90.0)
            .with_approach(CloseApproach::new(11.2, 125000.0)),
        AsteroidRecord::new("433 Eros", "2000433", false, 16000.0, 34000.0)
            .with_approach(CloseApproach::new("5.9", "150000.0")),
    ])
}

#[test]
fn apophis_identifier_variants_resolve_to_same_record() {
    let catalog = sample_catalog();
    let expected = catalog.find("99942 Apophis").expect("apophis").clone();
    for identifier in ["99942 Apophis", "99942 APOPHIS", "(99942 Apophis)", "2000042"] {
        let record = catalog.lookup(identifier).expect(identifier);
        assert_eq!(record, expected, "identifier {identifier:?}");
    }
}

#[test]
fn unknown_identifier_reports_original_text() {
    let catalog = sample_catalog();
    let err = catalog.lookup("nonexistent-xyz").unwrap_err();
    assert_eq!(
        err,
        LookupError::NotFound {
            identifier: "nonexistent-xyz".to_string()
        }
    );
    assert!(err.to_string().contains("nonexistent-xyz"));
}

#[test]
fn parenthesised_catalog_names_match_bare_input() {
    let catalog = sample_catalog();
    let record = catalog.lookup("2002 az1").expect("az1");
    assert_eq!(record.catalog_id, "3102787");
    let record = catalog.lookup("2002-AZ1").expect("hyphenated az1");
    assert_eq!(record.catalog_id, "3102787");
}

#[test]
fn catalog_ids_are_compared_verbatim() {
    let catalog = Catalog::new(vec![AsteroidRecord::new(
        "Test Object",
        "abc-1",
        false,
        1.0,
        2.0,
    )]);
    // Normalization rewrites the hyphen, so the id no longer matches.
    assert!(catalog.lookup("abc-1").is_err());
    assert!(catalog.lookup("ABC 1").is_err());
}

#[test]
fn lookup_is_exact_but_search_matches_fragments() {
    let catalog = sample_catalog();
    assert!(catalog.lookup("Apophis").is_err());

    let hits: Vec<_> = catalog.search("apophis").iter().map(|r| r.name.clone()).collect();
    assert_eq!(hits, vec!["99942 Apophis".to_string()]);
    assert_eq!(catalog.search("2").len(), 2);
    assert!(catalog.search("  ").is_empty());
}

#[test]
fn builtin_catalog_contains_apophis() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 1);
    let record = catalog.lookup("(99942 apophis)").expect("builtin apophis");
    assert!(record.is_potentially_hazardous);
    assert_eq!(record.close_approaches.len(), 1);
    assert!(std::ptr::eq(catalog, Catalog::builtin()));
}

#[test]
fn sources_work_behind_trait_objects() {
    let catalog = sample_catalog();
    let source: &dyn AsteroidSource = &catalog;
    assert_eq!(source.lookup("433 EROS").expect("eros").catalog_id, "2000433");
}
