mod build;
mod dataset;

use build::run_build;
use dataset::run_dataset;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Build(args) => run_build(args, ctx),
        Command::Dataset(args) => run_dataset(args, ctx),
    }
}
