use clap::Args;
use stacks_app::{database, migrator};

#[derive(Debug, Args)]
pub(crate) struct RevertArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Version to revert down to (kept); reverts everything when omitted
    #[arg(long)]
    target: Option<i64>,
}

pub(crate) async fn run(args: RevertArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match args.target {
        Some(target) => {
            migrator::revert_to(&pool, target)
                .await
                .map_err(|error| format!("failed to revert migrations: {error}"))?;

            println!("reverted database to version {target}");
        }
        None => {
            migrator::revert_all(&pool)
                .await
                .map_err(|error| format!("failed to revert migrations: {error}"))?;

            println!("reverted all migrations");
        }
    }

    Ok(())
}
