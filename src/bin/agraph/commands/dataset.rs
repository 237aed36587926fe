use anyhow::{Context, Result};
use log::info;

use atom_graph::GraphDataset;
use atom_graph::dataset::Origin;

use crate::cli::DatasetArgs;
use crate::config::build_graph_config;
use crate::display::{Context as DisplayContext, Progress, print_dataset_summary};

const TOTAL_STEPS: u8 = 1;

pub fn run_dataset(args: DatasetArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_graph_config(&args.graph)?;
    let root = args.root.display().to_string();

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Preparing dataset");
    let dataset = if args.force {
        info!("forcing rebuild of {root}");
        GraphDataset::process(&args.root, config)
    } else {
        GraphDataset::open(&args.root, config)
    }
    .with_context(|| format!("Failed to prepare dataset at {root}"))?;

    let substeps = match dataset.origin() {
        Origin::Cache => vec![format!(
            "Reuse {} (settings unchanged)",
            dataset.processed_path().display()
        )],
        Origin::Processed => vec![
            format!("Read {}", dataset.raw_path().display()),
            format!("Write {}", dataset.processed_path().display()),
        ],
    };
    progress.complete_step("Preparing dataset", &substeps);
    progress.finish();

    if ctx.interactive {
        print_dataset_summary(&dataset);
    }

    Ok(())
}
