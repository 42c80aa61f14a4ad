use std::{collections::HashMap, path::Path};

use common::{
    chart::{BarChart, SERIES_COLORS, Series},
    error::ReportError,
    record::{Record, parse_token, read_records},
    report::Report,
};
use itertools::Itertools;
use tracing::debug;

pub const INPUT: &str = "loadbalance_results.txt";
pub const OUTPUT: &str = "loadbalance.png";

/// One line of `loadbalance_results.txt`: a node id and the number of keys
/// it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeKeyCount {
    pub node: String,
    pub keys: u64,
}

impl Record for NodeKeyCount {
    const COLUMNS: usize = 2;

    fn from_tokens(tokens: &[&str]) -> Result<Self, String> {
        Ok(Self {
            node: tokens[0].to_owned(),
            keys: parse_token(tokens[1], "key count")?,
        })
    }
}

/// Collapses duplicate node ids (the later line wins) and orders nodes
/// lexicographically by id.
pub fn dedupe_sorted(records: Vec<NodeKeyCount>) -> Vec<NodeKeyCount> {
    let mut by_node = HashMap::new();
    for record in records {
        by_node.insert(record.node, record.keys);
    }
    by_node
        .into_iter()
        .sorted()
        .map(|(node, keys)| NodeKeyCount { node, keys })
        .collect()
}

/// Key distribution across storage nodes, one bar per node.
#[derive(Debug, Default, Clone)]
pub struct LoadBalance;

impl Report for LoadBalance {
    fn name(&self) -> &'static str {
        "load balance results"
    }

    fn generate(&self, dir: &Path) -> Result<(), ReportError> {
        let records: Vec<NodeKeyCount> = read_records(&dir.join(INPUT))?;
        let nodes = dedupe_sorted(records);
        debug!("{} unique nodes", nodes.len());
        chart(dir, &nodes).render()
    }
}

fn chart(dir: &Path, nodes: &[NodeKeyCount]) -> BarChart {
    BarChart {
        filepath: dir.join(OUTPUT),
        title: "Key Distribution Across Storage Nodes".to_owned(),
        x_desc: "Storage Node",
        y_desc: "Number of Keys",
        categories: nodes.iter().map(|n| n.node.clone()).collect(),
        series: vec![Series {
            name: "Keys",
            color: SERIES_COLORS[0],
            values: nodes.iter().map(|n| n.keys as f64).collect(),
        }],
        rotate_x_labels: true,
    }
}
