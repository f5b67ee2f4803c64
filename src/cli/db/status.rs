use clap::Args;
use stacks_app::{database, migrator};

#[derive(Debug, Args)]
pub(crate) struct StatusArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: StatusArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let applied = migrator::applied_versions(&pool)
        .await
        .map_err(|error| format!("failed to read migration ledger: {error}"))?;

    if applied.is_empty() {
        println!("no migrations applied");
    }

    for migration in migrator::MIGRATOR.iter() {
        // Down migrations share the version of their up counterpart.
        if migration.migration_type.is_down_migration() {
            continue;
        }

        let state = if applied.contains(&migration.version) {
            "applied"
        } else {
            "pending"
        };

        println!(
            "{:>4} {} [{state}]",
            migration.version, migration.description
        );
    }

    Ok(())
}
