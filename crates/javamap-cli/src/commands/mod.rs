//! Command dispatch.

mod generate;

use miette::Result;

use crate::cli::Cli;

/// Route a parsed CLI invocation. `javamap` currently exposes a single
/// operation, so dispatch is a direct call rather than a match.
pub async fn dispatch(cli: Cli) -> Result<()> {
    generate::exec(cli).await
}
