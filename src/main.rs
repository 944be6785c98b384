use clap::{Arg, Command};
use dancesift::classifier_test::run_corpus_checks;
use dancesift::{Config, EventRecord, EventSifter};
use log::LevelFilter;
use std::process;

fn main() {
    let matches = Command::new("dancesift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Multilingual street-dance event classifier")
        .long_about(
            "Decides whether crawled social-network event records describe a \
             street/club dance event, across 15+ languages and scripts, with \
             a verdict, a match score and the matched evidence terms.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Load the corpus, compile every pattern and run smoke checks")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("test-record")
                .long("test-record")
                .value_name("FILE")
                .help("Classify a JSON event record file and print the result")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .value_name("STRING")
                .help("Classify an ad-hoc text and print the result")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("highlight")
                .long("highlight")
                .help("Also print the text with matched evidence highlighted")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-match detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        let config = Config::default();
        if let Err(e) = config.to_file(generate_path) {
            eprintln!("Error generating configuration: {e}");
            process::exit(1);
        }
        println!("Default configuration written to {generate_path}");
        return;
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration {path}: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let sifter = match EventSifter::from_config(&config) {
        Ok(sifter) => sifter,
        Err(e) => {
            eprintln!("Error building keyword corpus: {e}");
            process::exit(1);
        }
    };

    if matches.get_flag("test-config") {
        test_config(&sifter);
        return;
    }

    if let Some(record_file) = matches.get_one::<String>("test-record") {
        test_record(&sifter, record_file, matches.get_flag("highlight"));
        return;
    }

    if let Some(text) = matches.get_one::<String>("text") {
        classify_text(&sifter, text, matches.get_flag("highlight"));
        return;
    }

    eprintln!("Nothing to do: pass --test-config, --test-record or --text");
    process::exit(2);
}

fn test_config(sifter: &EventSifter) {
    println!("Corpus categories:");
    for (name, count) in sifter.corpus_summary() {
        println!("  {name}: {count} fragments");
    }

    let results = run_corpus_checks(sifter);
    println!(
        "{} categories, {} fragments compiled",
        results.total_categories, results.total_fragments
    );
    if results.valid {
        println!("All smoke checks passed");
    } else {
        for failure in &results.smoke_failures {
            eprintln!("Smoke check failed: {failure}");
        }
        process::exit(1);
    }
}

fn test_record(sifter: &EventSifter, record_file: &str, highlight: bool) {
    let content = match std::fs::read_to_string(record_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {record_file}: {e}");
            process::exit(1);
        }
    };
    let record: EventRecord = match serde_json::from_str(&content) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error parsing {record_file} as an event record: {e}");
            process::exit(1);
        }
    };

    let result = sifter.classify(&record);
    print_result(sifter, &result.search_text.clone(), result, highlight);
}

fn classify_text(sifter: &EventSifter, text: &str, highlight: bool) {
    let normalized = text.to_lowercase();
    let result = sifter.classify_text(&normalized);
    print_result(sifter, &normalized, result, highlight);
}

fn print_result(
    sifter: &EventSifter,
    search_text: &str,
    result: dancesift::ClassifiedEvent,
    highlight: bool,
) {
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing result: {e}");
            process::exit(1);
        }
    }
    if highlight {
        println!();
        println!("{}", sifter.highlight(search_text));
    }
}
