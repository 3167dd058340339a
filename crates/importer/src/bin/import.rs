use clap::{Parser, Subcommand};
use importer::{SeedFile, SeedLoader, SeedValidator};
use std::path::PathBuf;
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "trivia-import")]
#[command(about = "Trivia category and question seeder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load categories and questions from a JSON seed file
    Seed {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("trivia_import={},importer={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Seed {
            file,
            validate_only,
        } => {
            handle_seed(file, validate_only, cli.database_url.as_deref()).await?;
        }
    }

    Ok(())
}

async fn handle_seed(
    file: PathBuf,
    validate_only: bool,
    database_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading seed file from: {}", file.display());

    let json_content = tokio::fs::read_to_string(&file).await?;
    let seed = SeedFile::from_json(&json_content)?;

    tracing::info!(
        "Loaded {} categories and {} questions",
        seed.categories.len(),
        seed.questions.len()
    );

    tracing::info!("Validating seed file...");
    let validation_report = SeedValidator::validate(&seed)?;
    validation_report.log_warnings();
    tracing::info!("Validation successful");

    if validate_only {
        return Ok(());
    }

    let database_url =
        database_url.ok_or("DATABASE_URL or --database-url is required to import")?;

    tracing::info!("Connecting to database...");
    let db = Database::new(database_url, 5).await?;

    tracing::info!("Running database migrations");
    db.run_migrations().await?;

    let loader = SeedLoader::new(db.pool());
    let summary = loader.import_to_database(&seed).await?;

    tracing::info!(
        "Import completed: {} categories, {} questions",
        summary.categories,
        summary.questions
    );

    Ok(())
}
