use std::path::Path;

use common::{
    chart::{BarChart, SERIES_COLORS, Series},
    error::ReportError,
    record::{Record, parse_token, read_records},
    report::Report,
};

pub const INPUT: &str = "throughput_results.txt";
pub const OUTPUT: &str = "concurrent_throughput.png";

/// One line of `throughput_results.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcurrentRecord {
    pub replicas: u32,
    pub threads: u32,
    pub throughput: f64,
}

impl Record for ConcurrentRecord {
    const COLUMNS: usize = 3;

    fn from_tokens(tokens: &[&str]) -> Result<Self, String> {
        Ok(Self {
            replicas: parse_token(tokens[0], "replica count")?,
            threads: parse_token(tokens[1], "thread count")?,
            throughput: parse_token(tokens[2], "throughput")?,
        })
    }
}

/// Aggregate throughput of concurrent clients, one bar per replica count in
/// file order. The title carries the client thread count of the run.
#[derive(Debug, Default, Clone)]
pub struct Concurrent;

impl Report for Concurrent {
    fn name(&self) -> &'static str {
        "concurrent results"
    }

    fn generate(&self, dir: &Path) -> Result<(), ReportError> {
        let records: Vec<ConcurrentRecord> = read_records(&dir.join(INPUT))?;
        chart(dir, &records).render()
    }
}

fn chart(dir: &Path, records: &[ConcurrentRecord]) -> BarChart {
    let threads = records.first().map(|r| r.threads).unwrap_or_default();
    BarChart {
        filepath: dir.join(OUTPUT),
        title: format!("GTStore Concurrent Performance ({threads} clients, mixed read/write)"),
        x_desc: "Number of Replicas",
        y_desc: "Throughput (Ops/s)",
        categories: records.iter().map(|r| r.replicas.to_string()).collect(),
        series: vec![Series {
            name: "Throughput",
            color: SERIES_COLORS[0],
            values: records.iter().map(|r| r.throughput).collect(),
        }],
        rotate_x_labels: false,
    }
}
