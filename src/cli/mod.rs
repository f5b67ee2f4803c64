use clap::{Parser, Subcommand};

mod book_type;
mod db;

#[derive(Debug, Parser)]
#[command(name = "stacks-app", about = "Stacks CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    BookType(book_type::BookTypeCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::BookType(command) => book_type::run(command).await,
        }
    }
}
