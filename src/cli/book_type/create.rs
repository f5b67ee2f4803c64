use clap::Args;
use stacks_app::{
    database::{self, Db},
    domain::book_types::{BookTypesService, PgBookTypesService, data::NewBookType},
};

#[derive(Debug, Args)]
pub(crate) struct CreateBookTypeArgs {
    /// Book type display name
    #[arg(long)]
    name: String,

    /// Full text description
    #[arg(long)]
    description: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateBookTypeArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgBookTypesService::new(Db::new(pool));

    let book_type = service
        .create_book_type(NewBookType {
            name: args.name,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create book type: {error}"))?;

    println!("book_type_id: {}", book_type.id);
    println!("book_type_name: {}", book_type.name);

    Ok(())
}
