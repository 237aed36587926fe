use std::io::{self, Write};

use atom_graph::{Graph, GraphConfig, GraphDataset};

use crate::util::text::truncate;

const INDENT: &str = "      ";
const TABLE_WIDTH: usize = 56;

pub fn print_graph_summary(graph: &Graph, config: &GraphConfig, atoms_read: Option<usize>) {
    let mut out = io::stderr().lock();

    let mut rows = Vec::new();
    if let Some(read) = atoms_read {
        rows.push(("Atoms Read", read.to_string()));
        rows.push(("Dropped", read.saturating_sub(graph.node_count()).to_string()));
    }
    rows.push(("Nodes", graph.node_count().to_string()));
    rows.push((
        "Edges",
        if graph.has_placeholder_edge() {
            "1 (placeholder)".to_string()
        } else {
            graph.edge_count().to_string()
        },
    ));
    if !graph.has_placeholder_edge() {
        let degrees = graph.out_degrees();
        let isolated = degrees.iter().filter(|&&d| d == 0).count();
        let max = degrees.iter().copied().max().unwrap_or(0);
        rows.push(("Isolated Nodes", isolated.to_string()));
        rows.push(("Max Out-Degree", max.to_string()));
    }
    rows.push(("Threshold", format!("{}", config.threshold)));
    rows.push(("Feature Width", (config.vocabulary.len() + 3).to_string()));
    print_kv_table(&mut out, "Graph Summary", &rows);

    print_element_table(&mut out, graph, config);
}

pub fn print_dataset_summary(dataset: &GraphDataset) {
    {
        let mut out = io::stderr().lock();
        let rows = vec![
            ("Root", dataset.root().display().to_string()),
            ("Graphs", dataset.len().to_string()),
            ("Origin", format!("{:?}", dataset.origin())),
        ];
        print_kv_table(&mut out, "Dataset", &rows);
    }

    print_graph_summary(dataset.data(), dataset.config(), None);
}

fn print_element_table(out: &mut impl Write, graph: &Graph, config: &GraphConfig) {
    let symbols = config.vocabulary.symbols();
    let mut nodes = vec![0usize; symbols.len()];
    let mut initiated = vec![0usize; symbols.len()];

    let types: Vec<Option<usize>> = graph.nodes.iter().map(|n| n.type_index()).collect();
    for t in types.iter().flatten() {
        nodes[*t] += 1;
    }
    if !graph.has_placeholder_edge() {
        // Initiated bonds appear as (i, j), (j, i) pairs starting at even offsets.
        for pair in graph.edges.chunks(2) {
            if let Some(Some(t)) = types.get(pair[0].source) {
                initiated[*t] += 1;
            }
        }
    }

    let header = ["Element", "Nodes", "Bonds Initiated"];
    let rows: Vec<[String; 3]> = symbols
        .iter()
        .enumerate()
        .map(|(i, sym)| [sym.to_string(), nodes[i].to_string(), initiated[i].to_string()])
        .collect();
    print_grid(out, "Element Breakdown", &header, &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let grid: Vec<[String; 2]> = rows
        .iter()
        .map(|(k, v)| [k.to_string(), v.clone()])
        .collect();
    print_grid(out, title, &["Metric", "Value"], &grid);
}

/// Draws a boxed table whose first column is left-aligned and the rest
/// right-aligned, splitting [`TABLE_WIDTH`] evenly after the first column.
fn print_grid<const N: usize>(
    out: &mut impl Write,
    title: &str,
    header: &[&str; N],
    rows: &[[String; N]],
) {
    let first_w = 16usize;
    let rest = N.saturating_sub(1).max(1);
    let other_w = (TABLE_WIDTH - first_w - 3 * N).max(6 * rest) / rest;
    let widths: Vec<usize> = (0..N)
        .map(|i| if i == 0 { first_w } else { other_w })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{INDENT}{left}{}{right}", segments.join(mid))
    };
    let line = |cells: &[String]| {
        let formatted: Vec<String> = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &w))| {
                let cell = truncate(cell, w);
                if i == 0 {
                    format!(" {cell:<w$} ")
                } else {
                    format!(" {cell:>w$} ")
                }
            })
            .collect();
        format!("{INDENT}│{}│", formatted.join("│"))
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "{INDENT}{}", truncate(title, TABLE_WIDTH));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    let _ = writeln!(out, "{}", line(&header));
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));
    for row in rows {
        let _ = writeln!(out, "{}", line(row));
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}
