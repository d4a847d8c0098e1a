use async_trait::async_trait;
use clap::{Arg, ArgAction, ArgMatches};
use std::path::PathBuf;

use crate::{
    ApiClient,
    commands::{
        Command,
        helpers::{
            base_url_arg, board_size_arg, get_api_client_args, get_path_from_str, get_words,
            words_arg,
        },
    },
};

struct RenderBoardCommandArgs {
    words: Vec<String>,
    board_size: Option<usize>,
    validate: bool,
    output: PathBuf,
}

impl TryFrom<&ArgMatches> for RenderBoardCommandArgs {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> Result<Self, Self::Error> {
        let output = args
            .get_one::<String>("output")
            .ok_or_else(|| anyhow::anyhow!("Output path is required"))?;

        Ok(Self {
            words: get_words(args),
            board_size: args.get_one::<usize>("board-size").copied(),
            validate: args.get_flag("validate"),
            output: get_path_from_str(output)?,
        })
    }
}

pub struct RenderBoardCommand;

impl RenderBoardCommand {
    async fn render_and_save(
        &self,
        api_client: ApiClient,
        args: RenderBoardCommandArgs,
    ) -> anyhow::Result<()> {
        let png = api_client
            .render_board(&args.words, args.board_size, args.validate)
            .await?;

        if let Some(parent) = args.output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&args.output, &png).await?;

        println!(
            "Board written to {} ({} bytes)",
            args.output.display(),
            png.len()
        );

        Ok(())
    }
}

#[async_trait]
impl Command for RenderBoardCommand {
    fn create(&self) -> clap::Command {
        clap::Command::new("render-board")
            .about("Renders the given words as a Scrabble board image and saves it as PNG.")
            .long_flag("render-board")
            .arg(base_url_arg())
            .arg(words_arg())
            .arg(board_size_arg())
            .arg(
                Arg::new("validate")
                    .long("validate")
                    .action(ArgAction::SetTrue)
                    .help("Drop words missing from the server dictionary"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .default_value("scrabble_board.png")
                    .action(ArgAction::Set)
                    .help("Where to write the PNG image"),
            )
            .arg_required_else_help(true)
    }

    fn name(&self) -> String {
        "render-board".to_owned()
    }

    async fn execute(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let api_client = ApiClient::new(get_api_client_args(args)?)?;
        let command_args = RenderBoardCommandArgs::try_from(args)?;

        self.render_and_save(api_client, command_args).await
    }
}
