use clap::Parser;
use nounlist::{Cli, NounList, NounListError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create NounList instance
    let nounlist = match NounList::from_cli(&cli) {
        Ok(nounlist) => nounlist,
        Err(e) => {
            print_startup_error(&e);
            return 2;
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&cli, &nounlist);
    }

    // Execute main extraction workflow
    match nounlist.extract_nouns(&cli.source) {
        Ok(report) => {
            // Display final report based on output format
            nounlist.output_formatter().print_extraction_report(&report);
            0
        }
        Err(e) => {
            nounlist.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                NounListError::Config { .. } => 2,
                NounListError::InvalidPattern { .. } => 2,
                NounListError::InvalidPath { .. } => 2,
                NounListError::SourceUnreadable { .. } => 3,
                NounListError::NoNounsFound { .. } => 6,
                NounListError::DestinationUnwritable { .. } => 7,
                _ => 1, // General error
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "nounlist.toml".to_string());

    match NounList::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  nounlist <dictionary-file> --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(cli: &Cli, nounlist: &NounList) -> i32 {
    let formatter = nounlist.output_formatter();

    formatter.info("DRY RUN MODE - No files will be written");
    formatter.print_separator();

    // Validate the source dictionary
    if cli.source.is_file() {
        formatter.success(&format!("Source dictionary found: {}", cli.source.display()));
    } else {
        formatter.error(&format!(
            "Source dictionary not found: {}",
            cli.source.display()
        ));
        return 1;
    }

    // Display configuration that would be used
    formatter.info("Configuration that would be used:");
    let config = nounlist.config();

    println!("  Marker: {}", config.filter.marker);
    println!("  Noun length: {}", config.filter.noun_length);
    if !config.filter.exclude_patterns.is_empty() {
        println!(
            "  Exclude patterns: {}",
            config.filter.exclude_patterns.join(", ")
        );
    }
    println!("  Destination: {}", config.output.destination.display());
    println!("  Generate report: {}", config.output.generate_report);

    formatter.print_separator();

    formatter.info("Extraction plan:");
    println!("  Read:  {}", cli.source.display());
    println!("  Write: {}", config.output.destination.display());

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to perform actual extraction");

    0
}

fn print_startup_error(error: &NounListError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
