use async_trait::async_trait;
use clap::ArgMatches;

use crate::{
    ApiClient,
    commands::{
        Command,
        helpers::{base_url_arg, board_size_arg, get_api_client_args, get_words, words_arg},
    },
};

pub struct LayoutCommand;

#[async_trait]
impl Command for LayoutCommand {
    fn create(&self) -> clap::Command {
        clap::Command::new("layout")
            .about("Prints the board layout computed by the server for the given words.")
            .long_flag("layout")
            .arg(base_url_arg())
            .arg(words_arg())
            .arg(board_size_arg())
            .arg_required_else_help(true)
    }

    fn name(&self) -> String {
        "layout".to_owned()
    }

    async fn execute(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let api_client = ApiClient::new(get_api_client_args(args)?)?;
        let words = get_words(args);
        let board_size = args.get_one::<usize>("board-size").copied();

        let layout = api_client.layout(&words, board_size).await?;

        for row in &layout.rows {
            let cells: Vec<String> = row.chars().map(String::from).collect();
            println!("{}", cells.join(" "));
        }

        for placed in &layout.placed {
            println!(
                "{} at ({}, {}) {}",
                placed.word, placed.row, placed.col, placed.direction
            );
        }

        for word in &layout.skipped {
            eprintln!("Could not place '{word}'");
        }

        Ok(())
    }
}
