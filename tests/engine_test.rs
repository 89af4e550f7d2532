use historic_sites::{
    build_chart_spec, classify, county_counts, top_n, year_counts, CsvFileSource, LocalStorage,
    SiteError, StoreLoader,
};
use tempfile::TempDir;

const DATASET: &str = "\
Resource Name,National Register Number,National Register Date,County,Latitude,Longitude
Smith House,01NR001,1980-05-01,Albany,42.65,-73.75
Smith House,01NR001,1980-05-01,Albany,42.65,-73.75
Old Bridge,02NR002,1990-01-01,Albany,42.66,-73.76
Broadway Historic District,03NR003,1985-03-15,Erie,42.89,-78.88
Wilson Farm,04NR004,1990-07-04,Erie,42.90,-78.87
";

async fn load_store(csv: &str) -> historic_sites::Result<historic_sites::RecordStore> {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("places.csv"), csv).unwrap();

    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let source = CsvFileSource::new(storage, "places.csv".to_string());
    StoreLoader::new(source).run().await
}

#[tokio::test]
async fn test_end_to_end_queries_over_file_dataset() {
    let store = load_store(DATASET).await.unwrap();

    // Duplicate Smith House row is dropped at load
    assert_eq!(store.len(), 4);

    // Exact lookup: hit and miss
    let hit = store.find_by_register_number("02NR002").unwrap();
    assert_eq!(hit.name, "Old Bridge");
    assert!(store.find_by_register_number("99NR999").is_none());

    // Categorization over the same snapshot
    let homes = classify(&store, "Home").unwrap();
    assert_eq!(homes.len(), 1);
    assert_eq!(homes[0].name, "Smith House");

    let bridges = classify(&store, "Bridge").unwrap();
    assert_eq!(bridges.len(), 1);
    assert_eq!(bridges[0].name, "Old Bridge");

    let districts = classify(&store, "Historic District").unwrap();
    assert_eq!(districts.len(), 1);

    let all = classify(&store, "All").unwrap();
    assert_eq!(all.len(), store.len());

    // County aggregation: counts sum to the store size
    let counts = county_counts(&store);
    assert_eq!(
        counts,
        vec![("Albany".to_string(), 2), ("Erie".to_string(), 2)]
    );
    assert_eq!(store.unique_counties(), vec!["Albany", "Erie"]);

    let top = top_n(&counts, 1).unwrap();
    assert_eq!(top.len(), 1);
    assert!(top[0].1 >= counts.iter().map(|(_, n)| *n).min().unwrap());

    // Year aggregation over the county-scoped subset
    let albany = store.county_records("Albany");
    let years = year_counts(&albany);
    assert_eq!(years, vec![(1980, 1), (1990, 1)]);
    let total: u64 = years.iter().map(|(_, n)| n).sum();
    assert_eq!(total as usize, albany.len());

    // Chart spec built from the county mapping
    let spec = build_chart_spec(
        &counts,
        "Number of Historical Sites Per County",
        "County Name",
        "Number of Historical Sites",
        "tab:blue",
        "navy",
    );
    assert_eq!(spec.labels, vec!["Albany", "Erie"]);
    assert_eq!(spec.values, vec![2, 2]);
    assert_eq!(spec.label_font_size, 15.0);
}

#[tokio::test]
async fn test_unknown_county_yields_empty_chart() {
    let store = load_store(DATASET).await.unwrap();

    let subset = store.county_records("Yates");
    let years = year_counts(&subset);
    let spec = build_chart_spec(&years, "t", "Year", "Sites", "cornflowerblue", "navy");

    assert!(spec.labels.is_empty());
    assert!(spec.values.is_empty());
}

#[tokio::test]
async fn test_unparseable_date_fails_whole_load() {
    let bad = "\
Resource Name,National Register Number,National Register Date,County,Latitude,Longitude
Smith House,01NR001,1980-05-01,Albany,42.65,-73.75
Old Bridge,02NR002,never,Albany,42.66,-73.76
";

    let err = load_store(bad).await.unwrap_err();
    assert!(matches!(err, SiteError::LoadError { .. }));
}

#[tokio::test]
async fn test_missing_column_fails_whole_load() {
    let bad = "\
Resource Name,County,Latitude,Longitude
Smith House,Albany,42.65,-73.75
";

    let err = load_store(bad).await.unwrap_err();
    assert!(matches!(err, SiteError::CsvError(_)));
}

#[tokio::test]
async fn test_missing_dataset_file_fails_load() {
    let dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let source = CsvFileSource::new(storage, "nope.csv".to_string());

    let err = StoreLoader::new(source).run().await.unwrap_err();
    assert!(matches!(err, SiteError::IoError(_)));
}
