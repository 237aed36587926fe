use anyhow::{Context, Result, bail};
use log::info;

use atom_graph::io::{Format, GraphArtifact, read_atoms, write_graph};
use atom_graph::{Graph, GraphConfig, build_graph};

use crate::cli::BuildArgs;
use crate::config::build_graph_config;
use crate::display::{Context as DisplayContext, Progress, print_graph_summary};
use crate::io::{create_output, display_name, open_input, stdin_is_tty, stdout_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_build(args: BuildArgs, ctx: DisplayContext) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: agraph build -i <FILE> or pipe a CSV table via stdin."
        );
    }
    if args.out.is_none() && stdout_is_tty() {
        bail!(
            "No output file specified and stdout is a terminal.\n\nUsage: agraph build -o <FILE> or redirect stdout."
        );
    }

    let config = build_graph_config(&args.graph)?;
    let input_name = display_name(args.input.as_deref(), "stdin");
    let output_name = display_name(args.out.as_deref(), "stdout");

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading atom table");
    let input = open_input(args.input.as_deref())?;
    let records = read_atoms(input)
        .with_context(|| format!("Failed to read atom table from {input_name}"))?;
    info!("read {} atom records from {input_name}", records.len());
    progress.complete_step(
        "Reading atom table",
        &[format!("Parse {} ({} rows)", Format::Csv, records.len())],
    );

    progress.step("Building bond graph");
    let graph = build_graph(&records, &config).context("Graph construction failed")?;
    progress.complete_step("Building bond graph", &build_substeps(&graph, &config));

    progress.step("Writing graph artifact");
    let artifact = GraphArtifact::from_graph(&graph, &config);
    let output = create_output(args.out.as_deref())?;
    write_graph(output, &artifact)
        .with_context(|| format!("Failed to write graph artifact to {output_name}"))?;
    info!("wrote graph artifact to {output_name}");
    progress.complete_step(
        "Writing graph artifact",
        &[format!("{} → {output_name}", Format::Json)],
    );

    progress.finish();

    if ctx.interactive {
        print_graph_summary(&graph, &config, Some(records.len()));
    }

    Ok(())
}

fn build_substeps(graph: &Graph, config: &GraphConfig) -> Vec<String> {
    let symbols: Vec<String> = config
        .vocabulary
        .symbols()
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut steps = vec![
        format!("Filter to [{}], {} nodes", symbols.join(", "), graph.node_count()),
        "Center coordinates on centroid".to_string(),
    ];
    if graph.has_placeholder_edge() {
        steps.push(format!(
            "No bonds within {} Å (placeholder edge emitted)",
            config.threshold
        ));
    } else {
        steps.push(format!(
            "Bond within {} Å, {} directed edges",
            config.threshold,
            graph.edge_count()
        ));
    }
    steps
}
