use async_trait::async_trait;
use clap::ArgMatches;

use crate::{
    ApiClient,
    commands::{
        Command,
        helpers::{base_url_arg, get_api_client_args, get_words, words_arg},
    },
};

pub struct ValidateWordsCommand;

#[async_trait]
impl Command for ValidateWordsCommand {
    fn create(&self) -> clap::Command {
        clap::Command::new("validate-words")
            .about("Checks the given words against the server dictionary.")
            .long_flag("validate-words")
            .arg(base_url_arg())
            .arg(words_arg())
            .arg_required_else_help(true)
    }

    fn name(&self) -> String {
        "validate-words".to_owned()
    }

    async fn execute(&self, args: &ArgMatches) -> anyhow::Result<()> {
        let api_client = ApiClient::new(get_api_client_args(args)?)?;
        let words = get_words(args);

        let result = api_client.validate_words(&words).await?;

        println!("Valid words: {}", result.valid.join(", "));
        println!("Invalid words: {}", result.invalid.join(", "));

        Ok(())
    }
}
