use clap::Args;
use stacks_app::{database, migrator};

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    migrator::apply(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let versions = migrator::applied_versions(&pool)
        .await
        .map_err(|error| format!("failed to read migration ledger: {error}"))?;

    println!("database is at version {}", versions.last().copied().unwrap_or(0));

    Ok(())
}
