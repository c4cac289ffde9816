use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExtractCmd {
    #[arg(
        help="Path to the source schema SDL file.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Path to the query file the subset is derived from.",
        long,
        short='q',
    )]
    query: PathBuf,

    #[arg(
        help="Write the pruned schema to this file instead of stdout.",
        long,
        short='o',
    )]
    out: Option<PathBuf>,

    #[arg(
        help="Print the field and argument allow-lists as JSON to stderr.",
        long,
    )]
    emit_allow_lists: bool,
}

#[inherent::inherent]
impl RunnableCommand for ExtractCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema_text = match read_input(self.schema.as_path()) {
            Ok(text) => text,
            Err(err) => return CommandResult::stderr(format_args!("{err:#}")),
        };
        let query_text = match read_input(self.query.as_path()) {
            Ok(text) => text,
            Err(err) => return CommandResult::stderr(format_args!("{err:#}")),
        };

        log::debug!(
            "Extracting a subset of {:?} for the query in {:?}...",
            self.schema,
            self.query,
        );
        let extraction =
            match graphql_subset::extract(&schema_text, &query_text) {
                Ok(extraction) => extraction,
                Err(err) => {
                    return CommandResult::stderr(format_args!("{err}"));
                },
            };

        if self.emit_allow_lists {
            match serde_json::to_string_pretty(&serde_json::json!({
                "field_allow_list": extraction.field_allow_list,
                "argument_allow_list": extraction.argument_allow_list,
            })) {
                Ok(rendered) => eprintln!("{rendered}"),
                Err(err) => log::warn!("Failed to render allow-lists: {err}"),
            }
        }

        let sdl = extraction.document.to_sdl();
        match &self.out {
            Some(out_path) => {
                if let Err(err) = std::fs::write(out_path, sdl.as_bytes())
                    .with_context(|| format!(
                        "Failed to write the pruned schema to {out_path:?}"
                    ))
                {
                    return CommandResult::stderr(format_args!("{err:#}"));
                }
                log::info!("Wrote the pruned schema to {out_path:?}.");
                CommandResult::silent_success()
            },

            None => CommandResult::stdout(format_args!("{sdl}")),
        }
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:?}"))
}
