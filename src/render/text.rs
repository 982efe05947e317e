use crate::Result;
use crate::model::{NodeIdx, ProfileNode, ProfileTree};
use crate::render::units::format_value;
use crate::schema::StatIndex;
use std::fmt::Write;

const LAST: &str = "└── ";
const BRANCH: &str = "├── ";
const BLANK_GUIDE: &str = "    ";
const BAR_GUIDE: &str = "│   ";

/// Render the full text report: query header followed by the profile forest.
///
/// Rendering is pure; calling it twice on the same inputs gives the same text.
pub fn render_text_report(
    query_id: &str,
    stats: &StatIndex,
    tree: &ProfileTree,
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Query ID: {query_id}")?;
    writeln!(out)?;

    let n = tree.roots.len();
    for (i, &root) in tree.roots.iter().enumerate() {
        render_node(&mut out, tree, stats, root, "", i + 1 == n)?;
    }
    Ok(out)
}

fn render_node(
    out: &mut String,
    tree: &ProfileTree,
    stats: &StatIndex,
    idx: NodeIdx,
    prefix: &str,
    is_last: bool,
) -> Result<()> {
    let node = tree.node(idx);
    let connector = if is_last { LAST } else { BRANCH };
    writeln!(out, "{prefix}{connector}[{}] {}", node.name, node.title)?;

    let child_prefix = format!("{prefix}{}", if is_last { BLANK_GUIDE } else { BAR_GUIDE });

    if let Some(line) = stats_line(node, stats) {
        writeln!(out, "{child_prefix}  {line}")?;
    }

    if !node.errors.is_empty() {
        writeln!(out, "{child_prefix}  ERRORS: {:?}", node.errors)?;
    }

    let n = node.children.len();
    for (i, &child) in node.children.iter().enumerate() {
        render_node(out, tree, stats, child, &child_prefix, i + 1 == n)?;
    }
    Ok(())
}

/// Non-zero statistics with a registered descriptor, joined by ", ".
fn stats_line(node: &ProfileNode, stats: &StatIndex) -> Option<String> {
    let parts: Vec<String> = node
        .statistics
        .iter()
        .zip(0i64..)
        .filter(|&(&value, _)| value != 0)
        .filter_map(|(&value, pos)| {
            stats
                .get(&pos)
                .map(|desc| format!("{}: {}", desc.display_name, format_value(value, &desc.unit)))
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_tree;
    use crate::schema::stats::StatDescriptor;
    use crate::schema::{RawProfile, Unit};
    use pretty_assertions::assert_eq;

    fn raw(id: i64, parent_id: Option<i64>, name: &str, title: &str) -> RawProfile {
        RawProfile {
            id,
            name: name.into(),
            parent_id,
            title: title.into(),
            labels: vec![],
            statistics: vec![],
            errors: vec![],
        }
    }

    fn desc(name: &str, display_name: &str, index: i64, unit: Unit) -> StatDescriptor {
        StatDescriptor {
            name: name.into(),
            display_name: display_name.into(),
            index,
            unit,
            plain_statistics: true,
        }
    }

    fn stat_index(descs: Vec<StatDescriptor>) -> StatIndex {
        descs.into_iter().map(|d| (d.index, d)).collect()
    }

    #[test]
    fn single_root_without_stats() {
        let tree = build_tree(vec![raw(1, None, "Scan", "TableScan")]);
        let text = render_text_report("q1", &StatIndex::new(), &tree).unwrap();
        assert_eq!(text, "Query ID: q1\n\n└── [Scan] TableScan\n");
    }

    #[test]
    fn zero_and_unregistered_stats_are_skipped() {
        let mut scan = raw(1, None, "Scan", "TableScan");
        scan.statistics = vec![0, 5, 0, 7];
        let tree = build_tree(vec![scan]);
        let stats = stat_index(vec![desc("OutputRows", "Rows", 1, Unit::Rows)]);

        let text = render_text_report("q", &stats, &tree).unwrap();
        assert_eq!(text, "Query ID: q\n\n└── [Scan] TableScan\n      Rows: 5\n");
    }

    #[test]
    fn nested_tree_with_guides_stats_and_errors() {
        let mut join = raw(2, Some(1), "HashJoin", "join");
        join.statistics = vec![1_500_000, 2048];
        let mut scan_a = raw(3, Some(2), "TableScan", "t1");
        scan_a.errors = vec!["io error".into(), "retry".into()];
        let scan_b = raw(4, Some(2), "TableScan", "t2");
        let filter = raw(5, Some(1), "Filter", "a > 1");
        let other_root = raw(6, None, "Exchange", "merge");

        let tree = build_tree(vec![
            raw(1, None, "EvalScalar", "project"),
            join,
            scan_a,
            scan_b,
            filter,
            other_root,
        ]);
        let stats = stat_index(vec![
            desc("CpuTime", "cpu time", 0, Unit::NanoSeconds),
            desc("MemoryUsage", "memory", 1, Unit::Bytes),
        ]);

        let expected = "\
Query ID: q2

├── [EvalScalar] project
│   ├── [HashJoin] join
│   │     cpu time: 1.50ms, memory: 2 KB
│   │   ├── [TableScan] t1
│   │   │     ERRORS: [\"io error\", \"retry\"]
│   │   └── [TableScan] t2
│   └── [Filter] a > 1
└── [Exchange] merge
";
        assert_eq!(render_text_report("q2", &stats, &tree).unwrap(), expected);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut scan = raw(2, Some(1), "Scan", "t");
        scan.statistics = vec![42];
        let tree = build_tree(vec![raw(1, None, "Sort", "s"), scan]);
        let stats = stat_index(vec![desc("Rows", "rows", 0, Unit::Rows)]);

        let first = render_text_report("q", &stats, &tree).unwrap();
        let second = render_text_report("q", &stats, &tree).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_index_descriptor_never_matches() {
        let mut scan = raw(1, None, "Scan", "TableScan");
        scan.statistics = vec![9, 4];
        let tree = build_tree(vec![scan]);
        let stats = stat_index(vec![
            desc("Odd", "odd", -1, Unit::Rows),
            desc("OutputRows", "output rows", 1, Unit::Rows),
        ]);

        let text = render_text_report("q", &stats, &tree).unwrap();
        assert_eq!(text, "Query ID: q\n\n└── [Scan] TableScan\n      output rows: 4\n");
    }

    #[test]
    fn empty_forest_prints_only_header() {
        let text = render_text_report("empty", &StatIndex::new(), &ProfileTree::default()).unwrap();
        assert_eq!(text, "Query ID: empty\n\n");
    }
}
