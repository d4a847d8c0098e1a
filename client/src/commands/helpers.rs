use clap::{Arg, ArgAction, ArgMatches, value_parser};
use reqwest::Url;
use std::path::PathBuf;
use uuid::Uuid;

use crate::ApiClientArgs;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub fn get_path_from_str(input: &str) -> anyhow::Result<PathBuf> {
    let path = match input.strip_prefix('~') {
        Some(rest) => {
            let home = home::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home dir"))?;
            home.join(rest.trim_start_matches('/'))
        }
        None => PathBuf::from(input),
    };

    Ok(path)
}

pub fn base_url_arg() -> Arg {
    Arg::new("base-url")
        .long("base-url")
        .short('u')
        .default_value(DEFAULT_BASE_URL)
        .action(ArgAction::Set)
        .help("Base URL of the Scrabble Board server")
}

pub fn words_arg() -> Arg {
    Arg::new("words")
        .long("words")
        .short('w')
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append)
        .help("Words to lay out, in placement order")
}

pub fn board_size_arg() -> Arg {
    Arg::new("board-size")
        .long("board-size")
        .short('b')
        .value_parser(value_parser!(usize))
        .action(ArgAction::Set)
        .help("Width and height of the board (server default when omitted)")
}

pub fn get_words(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("words")
        .map(|words| words.cloned().collect())
        .unwrap_or_default()
}

pub fn get_api_client_args(args: &ArgMatches) -> anyhow::Result<ApiClientArgs> {
    let base_url = args
        .get_one::<String>("base-url")
        .map(String::as_str)
        .unwrap_or(DEFAULT_BASE_URL);

    Ok(ApiClientArgs {
        base_url: Url::parse(base_url)?,
        correlation_id: Uuid::new_v4(),
    })
}
