use clap::Parser;
use historic_sites::domain::ports::Storage;
use historic_sites::utils::{logger, validation::Validate};
use historic_sites::{
    build_chart_spec, category_labels, classify, county_counts, mean_position, top_n, year_counts,
    CliConfig, Command, CsvFileSource, HttpCsvSource, LocalStorage, RecordStore, Result, Settings,
    StoreLoader,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting historic-sites");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &settings).await {
        tracing::error!(
            "Query failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            historic_sites::utils::error::ErrorSeverity::Low => 0,
            historic_sites::utils::error::ErrorSeverity::Medium => 2,
            historic_sites::utils::error::ErrorSeverity::High => 1,
            historic_sites::utils::error::ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_settings(config: &CliConfig) -> Result<Settings> {
    let mut settings = match &config.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    if let Some(dataset) = &config.dataset {
        settings.dataset.source = dataset.clone();
    }

    settings.validate()?;
    Ok(settings)
}

async fn run(config: &CliConfig, settings: &Settings) -> Result<()> {
    let source = &settings.dataset.source;

    // The store is a one-shot immutable snapshot; every query below is a
    // pure read over it.
    let store = if historic_sites::utils::validation::is_remote_source(source) {
        StoreLoader::new(HttpCsvSource::new(source.clone())).run().await?
    } else {
        let storage = LocalStorage::new(".".to_string());
        StoreLoader::new(CsvFileSource::new(storage, source.clone())).run().await?
    };

    let output = match &config.command {
        Command::Lookup { register_number } => lookup(&store, register_number)?,
        Command::Category { label } => category(&store, label)?,
        Command::Counties { top } => counties(&store, settings, *top)?,
        Command::Years { county } => years(&store, settings, county)?,
    };

    emit(config, output).await
}

fn lookup(store: &RecordStore, register_number: &str) -> Result<String> {
    match store.find_by_register_number(register_number) {
        Some(record) => {
            tracing::info!(
                "{} was registered in {}",
                record.name,
                record.register_date
            );
            Ok(serde_json::to_string_pretty(record)?)
        }
        None => {
            // A miss is a normal outcome, not an error path
            tracing::warn!("No site with register number {}", register_number);
            Ok(serde_json::to_string_pretty(&json!({
                "error": "Not a valid National Register Number. Please try again.",
                "register_number": register_number,
            }))?)
        }
    }
}

fn category(store: &RecordStore, label: &str) -> Result<String> {
    let records = classify(store, label)?;
    tracing::info!(
        "Category '{}' matched {} of {} sites (known labels: {})",
        label,
        records.len(),
        store.len(),
        category_labels().join(", ")
    );

    // Map points plus a viewport center for the rendering collaborator
    let points: Vec<_> = records
        .iter()
        .map(|record| {
            json!({
                "name": record.name,
                "register_number": record.register_number,
                "latitude": record.latitude,
                "longitude": record.longitude,
            })
        })
        .collect();

    let center = mean_position(&records).map(|(lat, lon)| json!({ "latitude": lat, "longitude": lon }));

    Ok(serde_json::to_string_pretty(&json!({
        "category": label,
        "center": center,
        "points": points,
    }))?)
}

fn counties(store: &RecordStore, settings: &Settings, top: Option<usize>) -> Result<String> {
    let counts = county_counts(store);

    let counts = match top {
        Some(n) => {
            tracing::info!("Including the top {} counties", n);
            top_n(&counts, n)?
        }
        None => counts,
    };

    let spec = build_chart_spec(
        &counts,
        "Number of Historical Sites Per County",
        "County Name",
        "Number of Historical Sites",
        &settings.charts.county.color,
        &settings.charts.county.edge_color,
    );

    Ok(serde_json::to_string_pretty(&spec)?)
}

fn years(store: &RecordStore, settings: &Settings, county: &str) -> Result<String> {
    historic_sites::utils::validation::validate_non_empty_string("county", county)?;

    let subset = store.county_records(county);
    tracing::info!("{} County has {} historical sites", county, subset.len());

    let counts = year_counts(&subset);
    let spec = build_chart_spec(
        &counts,
        &format!(
            "Number of Historical Sites Registered Per Year for {} County.",
            county
        ),
        "Year",
        "Number of Historical Sites Registered",
        &settings.charts.year.color,
        &settings.charts.year.edge_color,
    );

    Ok(serde_json::to_string_pretty(&spec)?)
}

async fn emit(config: &CliConfig, output: String) -> Result<()> {
    match &config.out {
        Some(path) => {
            historic_sites::utils::validation::validate_path("out", path)?;
            let storage = LocalStorage::new(".".to_string());
            storage.write_file(path, output.as_bytes()).await?;
            tracing::info!("Result written to {}", path);
        }
        None => println!("{}", output),
    }
    Ok(())
}
