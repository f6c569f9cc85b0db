//! Result rendering — textual report and JSON export.
//!
//! Presentation layer only: the core contract is the `Vec<ConditioningSet>`
//! returned by the search. The report lists each back-door path with its
//! per-edge causal direction and one sorted id list per adjustment set.

use std::io::Write;

use crate::Result;
use crate::dag::Dag;
use crate::model::{ConditioningSet, Path, VarId};

/// Write a human-readable adjustment report.
pub fn render_report(dag: &Dag, sets: &[ConditioningSet], writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "// backdoor-rs adjustment report")?;
    writeln!(writer, "// Treatment: {}", label(dag, dag.treatment()))?;
    writeln!(writer, "// Outcome: {}", label(dag, dag.outcome()))?;
    writeln!(writer)?;

    let backdoor = dag.backdoor_paths();
    writeln!(writer, "Back-door paths: {}", backdoor.len())?;
    for path in &backdoor {
        writeln!(writer, "  {}", format_path(dag, path))?;
    }
    writeln!(writer)?;

    writeln!(writer, "Minimal adjustment sets: {}", sets.len())?;
    for set in sets {
        writeln!(writer, "  {set}")?;
    }
    Ok(())
}

/// Write adjustment sets as a JSON array of sorted id arrays.
pub fn export_json(sets: &[ConditioningSet], writer: &mut dyn Write) -> Result<()> {
    let ids: Vec<Vec<usize>> = sets.iter().map(ConditioningSet::ids).collect();
    serde_json::to_writer(&mut *writer, &ids)?;
    writeln!(writer)?;
    Ok(())
}

/// Format a path with per-edge causal direction: `0 <- 2 -> 1`.
fn format_path(dag: &Dag, path: &Path) -> String {
    let nodes = path.nodes();
    let mut out = String::new();
    for (i, &node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(if dag.has_edge(nodes[i - 1], node) { " -> " } else { " <- " });
        }
        out.push_str(&node.to_string());
    }
    out
}

fn label(dag: &Dag, id: VarId) -> String {
    match dag.variable(id).and_then(|v| v.name.as_deref()) {
        Some(name) => format!("{id} ({name})"),
        None => id.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn confounded() -> Dag {
        Dag::from_edges(3, &[(2, 0), (2, 1), (0, 1)], 0, 1).unwrap()
    }

    #[test]
    fn test_render_report_lists_paths_and_sets() {
        let dag = confounded();
        let sets = dag.minimal_adjustment_sets();
        let mut out = Vec::new();
        render_report(&dag, &sets, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("// Treatment: 0"));
        assert!(text.contains("Back-door paths: 1"));
        assert!(text.contains("0 <- 2 -> 1"));
        assert!(text.contains("Minimal adjustment sets: 1"));
        assert!(text.contains("  [2]"));
    }

    #[test]
    fn test_render_report_uses_names() {
        let dag = Dag::from_json(
            r#"{"variables": 3, "edges": [[2, 0], [2, 1], [0, 1]],
                "treatment": 0, "outcome": 1, "names": {"0": "smoking"}}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        render_report(&dag, &[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("// Treatment: 0 (smoking)"));
    }

    #[test]
    fn test_export_json_shape() {
        let dag = confounded();
        let sets = dag.minimal_adjustment_sets();
        let mut out = Vec::new();
        export_json(&sets, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[[2]]\n");
    }

    #[test]
    fn test_export_json_empty_collection() {
        let mut out = Vec::new();
        export_json(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
