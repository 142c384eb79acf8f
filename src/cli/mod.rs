use anyhow::Result;

use crate::core::sync_registry;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
pub mod report;

/// Run one sync from parsed arguments on a single-threaded runtime.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let options = args.into_options()?;

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(sync_registry(&options))?;

    report::print(&outcome, &options.registry_file);

    Ok(ExitStatus::from(&outcome))
}
