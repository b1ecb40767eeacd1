use clap::Parser;
use linkding_import::application::{
    EnrichService, EnrichmentPolicy, ImportOptions, ImportService, UploadService,
};
use linkding_import::cli::{format_bookmark_list, format_summary, Cli};
use linkding_import::domain::Dialect;
use linkding_import::error::ImportError;
use linkding_import::infrastructure::{Config, LinkdingClient, OpenAiSuggester};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ImportError> {
    // Validate selectors before touching the input file
    let dialect = Dialect::from_str(&cli.format)?;
    let policy = EnrichmentPolicy::from_str(&cli.on_enrich_error)?;

    let config = cli.apply_overrides(Config::resolve(cli.config.as_deref())?);
    if config.uses_placeholders() && !cli.dry_run {
        tracing::warn!(
            api_url = %config.api_url,
            "LINKDING_API_URL or LINKDING_API_TOKEN is unset; using placeholder values"
        );
    }

    let enricher = if cli.enrich {
        let api_key = config.openai_api_key.clone().ok_or_else(|| {
            ImportError::Config("--enrich requires OPENAI_API_KEY to be set".to_string())
        })?;
        let suggester =
            OpenAiSuggester::new(api_key, &config.openai_base_url, &config.openai_model)?;
        Some(EnrichService::new(suggester, policy))
    } else {
        None
    };

    let client = LinkdingClient::new(&config.api_url, &config.api_token)?;
    let service = ImportService::new(UploadService::new(client, config.delay()), enricher);

    let options = ImportOptions {
        file: cli.file,
        dialect,
        failed_output: config.failed_output,
    };

    if cli.dry_run {
        let (bookmarks, _) = service.prepare(&options)?;
        println!("{}", format_bookmark_list(&bookmarks).trim_end());
        return Ok(());
    }

    let summary = service.execute(&options)?;
    print!("{}", format_summary(&summary));
    Ok(())
}
