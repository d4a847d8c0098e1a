// Each subcommand builds its own clap definition and is looked up by name,
// so adding a command only means registering it in `get_commands`.
mod helpers;
mod layout;
mod render_board;
mod validate_words;

pub use layout::LayoutCommand;
pub use render_board::RenderBoardCommand;
pub use validate_words::ValidateWordsCommand;

use async_trait::async_trait;
use clap::ArgMatches;
use std::collections::HashMap;

#[async_trait]
pub trait Command {
    async fn execute(&self, args: &ArgMatches) -> anyhow::Result<()>;

    fn create(&self) -> clap::Command;

    fn name(&self) -> String;
}

pub fn get_commands() -> HashMap<String, Box<dyn Command>> {
    let mut result = HashMap::new();

    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(RenderBoardCommand),
        Box::new(LayoutCommand),
        Box::new(ValidateWordsCommand),
    ];

    for command in commands {
        result.insert(command.name(), command);
    }

    result
}
