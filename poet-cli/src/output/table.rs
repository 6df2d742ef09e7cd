//! Table output formatting using the `tabled` crate

use poet_core::Edge;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment, Modify},
};

/// Format graph edges as a rounded table with a right-aligned weight column.
pub fn edge_table(edges: &[Edge<String>]) -> String {
    if edges.is_empty() {
        return "(no edges)".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Source", "Target", "Weight"]);
    for edge in edges {
        builder.push_record([
            edge.source.clone(),
            edge.target.clone(),
            edge.weight.to_string(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_table_rows() {
        let edges = vec![
            Edge::new("hello,".to_string(), "goodbye!".to_string(), 1),
            Edge::new("hello,".to_string(), "hello,".to_string(), 12),
        ];
        let table = edge_table(&edges);

        assert!(table.contains("Source"));
        assert!(table.contains("goodbye!"));
        assert!(table.contains("12"));
        assert!(table.starts_with('╭'));
    }

    #[test]
    fn test_edge_table_empty() {
        assert_eq!(edge_table(&[]), "(no edges)");
    }
}
