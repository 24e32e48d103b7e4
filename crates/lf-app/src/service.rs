//! The end-to-end analysis pipeline.
//!
//! `run_analysis` takes a topology description and produces a fully rounded
//! [`AnalysisReport`]: build the graph, solve for maximum flow, attribute
//! origin -> destination contributions, scan for bottlenecks, and assemble
//! the rows with human-readable node names.

use std::fs;
use std::path::Path;

use lf_analysis::{analyze, attribute, AnalyzerConfig};
use lf_core::NodeId;
use lf_graph::{Graph, Topology};
use lf_solver::{solve, SolverConfig};

use crate::error::{AppError, AppResult};
use crate::report::{
    round_report, AnalysisReport, AttributionRow, BottleneckRow, EdgeFlowRow, FlowTotalRow,
    LowCapacityRow,
};

/// Load a topology from a JSON or YAML file, chosen by extension
/// (`.yaml`/`.yml` parse as YAML, everything else as JSON).
pub fn load_topology(path: &Path) -> AppResult<Topology> {
    let text = fs::read_to_string(path).map_err(|source| AppError::TopologyFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let topology = if is_yaml {
        serde_yaml::from_str(&text)?
    } else {
        serde_json::from_str(&text)?
    };
    Ok(topology)
}

/// Run the full pipeline on a topology description.
///
/// `solver` defaults when `None`; the analyzer config is always explicit so
/// front ends surface their thresholds.
pub fn run_analysis(
    topology: &Topology,
    solver: Option<SolverConfig>,
    analyzer: &AnalyzerConfig,
) -> AppResult<AnalysisReport> {
    let graph = topology.build()?;
    tracing::info!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "network built"
    );

    let assignment = solve(&graph, solver)?;
    tracing::info!(
        total = assignment.total(),
        augmentations = assignment.augmentations(),
        "maximum flow solved"
    );

    let attribution = attribute(&graph, &assignment);
    let bottlenecks = analyze(&graph, &assignment, &attribution, analyzer);

    let name = |id: NodeId| node_name(&graph, id);

    let edge_flows = graph
        .edges()
        .iter()
        .filter(|e| e.is_bounded())
        .map(|e| {
            let flow = assignment.flow(e.id);
            EdgeFlowRow {
                from: name(e.from),
                to: name(e.to),
                capacity: e.capacity,
                flow,
                saturated: flow == e.capacity,
            }
        })
        .collect();

    let attribution_rows = attribution
        .pairs()
        .map(|(origin, destination, amount)| AttributionRow {
            origin: name(origin),
            destination: name(destination),
            amount,
        })
        .collect();

    let low_capacity = bottlenecks
        .low_capacity
        .iter()
        .map(|b| LowCapacityRow {
            from: name(b.from),
            to: name(b.to),
            capacity: b.capacity,
            saturated: b.saturated,
        })
        .collect();

    let bottleneck_rows = bottlenecks
        .saturated
        .iter()
        .map(|r| BottleneckRow {
            from: name(r.from),
            to: name(r.to),
            capacity: r.capacity,
            recommended_capacity: r.recommended_capacity,
        })
        .collect();

    let top_origin = bottlenecks.top_origin.map(|(id, amount)| FlowTotalRow {
        name: name(id),
        amount,
    });

    let bottom_destinations = bottlenecks
        .bottom_destinations
        .iter()
        .map(|&(id, amount)| FlowTotalRow {
            name: name(id),
            amount,
        })
        .collect();

    let mut report = AnalysisReport {
        total_flow: assignment.total(),
        edge_flows,
        attribution: attribution_rows,
        low_capacity,
        bottlenecks: bottleneck_rows,
        top_origin,
        bottom_destinations,
    };
    round_report(&mut report);
    Ok(report)
}

fn node_name(graph: &Graph, id: NodeId) -> String {
    graph
        .node(id)
        .map(|n| n.name.clone())
        .unwrap_or_else(|| format!("node {}", id))
}
