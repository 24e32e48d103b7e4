//! Serializable analysis report and its text rendering.
//!
//! Every numeric value is rounded to 2 decimal places when the report is
//! assembled, so serialized output and rendered text compare exactly across
//! runs.

use serde::{Deserialize, Serialize};

use lf_core::{round2, Real};

/// One bounded edge with its solved flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeFlowRow {
    pub from: String,
    pub to: String,
    pub capacity: Real,
    pub flow: Real,
    pub saturated: bool,
}

/// One (origin, destination) attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionRow {
    pub origin: String,
    pub destination: String,
    pub amount: Real,
}

/// One low-capacity route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowCapacityRow {
    pub from: String,
    pub to: String,
    pub capacity: Real,
    pub saturated: bool,
}

/// One saturated bottleneck with its recommended upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckRow {
    pub from: String,
    pub to: String,
    pub capacity: Real,
    pub recommended_capacity: Real,
}

/// A named flow total (top origin, bottom destinations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowTotalRow {
    pub name: String,
    pub amount: Real,
}

/// The complete output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_flow: Real,
    pub edge_flows: Vec<EdgeFlowRow>,
    pub attribution: Vec<AttributionRow>,
    pub low_capacity: Vec<LowCapacityRow>,
    pub bottlenecks: Vec<BottleneckRow>,
    pub top_origin: Option<FlowTotalRow>,
    pub bottom_destinations: Vec<FlowTotalRow>,
}

/// Render the report as plain text, in the shape of the classic logistics
/// summary: attribution table, total, then the four numbered findings.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let rule = "-".repeat(60);

    out.push_str("Flow by origin and destination:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<15} {:<15} {:>25}\n",
        "Origin", "Destination", "Attributed Flow (units)"
    ));
    out.push_str(&rule);
    out.push('\n');
    for row in &report.attribution {
        out.push_str(&format!(
            "{:<15} {:<15} {:>25.2}\n",
            row.origin, row.destination, row.amount
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Total maximum flow: {:.2} units\n\n",
        report.total_flow
    ));

    out.push_str("Edge flows:\n");
    for row in &report.edge_flows {
        out.push_str(&format!(
            "   {} -> {}: {:.2} of {:.2}{}\n",
            row.from,
            row.to,
            row.flow,
            row.capacity,
            if row.saturated { " (saturated)" } else { "" }
        ));
    }
    out.push('\n');

    out.push_str("Findings:\n");
    if let Some(top) = &report.top_origin {
        out.push_str(&format!(
            "1. Origin with the largest flow: {} ({:.2} units)\n",
            top.name, top.amount
        ));
    } else {
        out.push_str("1. No origin carried any flow\n");
    }

    out.push_str("2. Routes with the lowest capacity:\n");
    for row in &report.low_capacity {
        out.push_str(&format!(
            "   {} -> {}: {:.2} units\n",
            row.from, row.to, row.capacity
        ));
    }

    out.push_str("3. Destinations with the least received flow:\n");
    for row in &report.bottom_destinations {
        out.push_str(&format!("   {}: {:.2} units\n", row.name, row.amount));
    }

    out.push_str("4. Saturated bottlenecks (100% utilization):\n");
    for row in &report.bottlenecks {
        out.push_str(&format!(
            "   {} -> {}: capacity {:.2} units\n",
            row.from, row.to, row.capacity
        ));
    }

    out.push_str("\nRecommendations:\n");
    for row in &report.bottlenecks {
        out.push_str(&format!(
            "   Increase capacity of {} -> {} from {:.2} to {:.2} units\n",
            row.from, row.to, row.capacity, row.recommended_capacity
        ));
    }

    out
}

/// Round every numeric field in place. Called once at assembly time.
pub(crate) fn round_report(report: &mut AnalysisReport) {
    report.total_flow = round2(report.total_flow);
    for row in &mut report.edge_flows {
        row.capacity = round2(row.capacity);
        row.flow = round2(row.flow);
    }
    for row in &mut report.attribution {
        row.amount = round2(row.amount);
    }
    for row in &mut report.low_capacity {
        row.capacity = round2(row.capacity);
    }
    for row in &mut report.bottlenecks {
        row.capacity = round2(row.capacity);
        row.recommended_capacity = round2(row.recommended_capacity);
    }
    if let Some(top) = &mut report.top_origin {
        top.amount = round2(top.amount);
    }
    for row in &mut report.bottom_destinations {
        row.amount = round2(row.amount);
    }
}
