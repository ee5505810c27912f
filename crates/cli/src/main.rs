use crate::{
    commands::{Commands, SharedArgs},
    env::{EnvManager, Settings},
    error::CliError,
};
use clap::Parser;
use compiler::TableCompiler;
use connectors::{
    charsets::snapshot::write_snapshot,
    sdi::{Ibd2Sdi, SdiExtractor, read_documents, read_table},
};
use model::core::charset::CharsetCatalog;
use std::{path::Path, sync::Arc, time::Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod batch;
mod commands;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "sdi2ddl",
    version,
    about = "Rebuild MySQL CREATE TABLE statements from serialized dictionary information"
)]
struct Cli {
    #[command(flatten)]
    shared: SharedArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so `ast` and `compile` output can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let started = Instant::now();

    let env = EnvManager::load(cli.shared.env_file.as_deref())?;
    let settings = Settings::resolve(&cli.shared, &env)?;

    match cli.command {
        Commands::Sdi => extract_sdi(&settings).await?,
        Commands::Sql => generate_sql(&settings).await?,
        Commands::Charsets { output } => {
            let catalog = load_catalog(&settings).await?;
            match output {
                Some(path) => {
                    write_snapshot(&catalog, &path).await?;
                    info!("Wrote {} collations to {}", catalog.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&catalog)?),
            }
        }
        Commands::Ast { file } => {
            let catalog = load_catalog(&settings).await?;
            let table = read_table(&file).await?;
            let definition = TableCompiler::new(&catalog).decode(&table)?;
            println!("{}", serde_json::to_string_pretty(&definition)?);
        }
        Commands::Compile { file } => {
            let catalog = load_catalog(&settings).await?;
            let table = read_table(&file).await?;
            let compiled = TableCompiler::new(&catalog).compile(&table)?;
            println!("{}", compiled.create_table);
            if let Some(foreign_keys) = compiled.foreign_keys {
                println!("\n{foreign_keys}");
            }
        }
    }

    info!("Finished in {:.2?}", started.elapsed());
    Ok(())
}

async fn load_catalog(settings: &Settings) -> Result<CharsetCatalog, CliError> {
    let source = settings.charset_source()?;
    let catalog = source.load().await?;
    if catalog.is_empty() {
        warn!("The collation catalog from {} is empty", source.describe());
    }
    Ok(catalog)
}

async fn extract_sdi(settings: &Settings) -> Result<(), CliError> {
    let extractor = SdiExtractor {
        ibd2sdi: Ibd2Sdi::new(&settings.ibd2sdi),
        backup_dir: settings.backup_dir()?.to_path_buf(),
        output_dir: settings.output_dir()?.to_path_buf(),
        databases: settings.databases.clone(),
    };

    let summary = extractor.run().await?;
    info!(
        "SDI extraction done: {} copied, {} extracted, {} without table, {} failed",
        summary.copied, summary.extracted, summary.empty, summary.failed
    );
    if summary.failed > 0 {
        warn!("{} tablespace(s) could not be read, see the errors above", summary.failed);
    }
    Ok(())
}

async fn generate_sql(settings: &Settings) -> Result<(), CliError> {
    let output_dir: &Path = settings.output_dir()?;
    let catalog = Arc::new(load_catalog(settings).await?);

    let documents = read_documents(output_dir, &settings.databases).await?;
    let outcome = batch::compile_documents(documents, catalog, settings.jobs).await?;
    let summary = output::write_scripts(output_dir, &outcome.tables).await?;

    info!(
        "SQL generation done: {} table(s) in {} database(s), {} foreign key script(s), {} skipped",
        summary.tables, summary.databases, summary.foreign_key_scripts, outcome.skipped
    );

    if outcome.failed > 0 {
        return Err(CliError::CompileFailures(outcome.failed));
    }
    Ok(())
}
