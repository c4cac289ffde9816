mod extract;

use crate::Cli;
use crate::CommandResult;
use extract::ExtractCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlsubset")]
pub(crate) enum CommandEnum {
    Extract(Box<ExtractCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Extract(cmd) => cmd.run(cli).await
        }
    }
}
