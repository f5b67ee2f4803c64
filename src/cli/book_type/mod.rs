use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct BookTypeCommand {
    #[command(subcommand)]
    command: BookTypeSubcommand,
}

#[derive(Debug, Subcommand)]
enum BookTypeSubcommand {
    Create(create::CreateBookTypeArgs),
}

pub(crate) async fn run(command: BookTypeCommand) -> Result<(), String> {
    match command.command {
        BookTypeSubcommand::Create(args) => create::run(args).await,
    }
}
