use std::path::Path;

use common::{
    chart::{BarChart, SERIES_COLORS, Series},
    error::ReportError,
    record::{Record, parse_token, read_records},
    report::Report,
};

pub const INPUT: &str = "single_client_results.txt";
pub const OUTPUT: &str = "single_client_throughput.png";

/// One line of `single_client_results.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleClientRecord {
    pub replicas: u32,
    pub overall: f64,
    pub put: f64,
    pub get: f64,
}

impl Record for SingleClientRecord {
    const COLUMNS: usize = 4;

    fn from_tokens(tokens: &[&str]) -> Result<Self, String> {
        Ok(Self {
            replicas: parse_token(tokens[0], "replica count")?,
            overall: parse_token(tokens[1], "total throughput")?,
            put: parse_token(tokens[2], "put throughput")?,
            get: parse_token(tokens[3], "get throughput")?,
        })
    }
}

/// Mixed-workload throughput of a single client: one bar group per replica
/// count, PUT, GET and Overall side by side.
#[derive(Debug, Default, Clone)]
pub struct SingleClient;

impl Report for SingleClient {
    fn name(&self) -> &'static str {
        "single client results"
    }

    fn generate(&self, dir: &Path) -> Result<(), ReportError> {
        let records: Vec<SingleClientRecord> = read_records(&dir.join(INPUT))?;
        chart(dir, &records).render()
    }
}

fn chart(dir: &Path, records: &[SingleClientRecord]) -> BarChart {
    BarChart {
        filepath: dir.join(OUTPUT),
        title: "GTStore Single Client Performance (PUT vs GET vs Overall)".to_owned(),
        x_desc: "Number of Replicas",
        y_desc: "Throughput (Ops/s)",
        categories: records.iter().map(|r| r.replicas.to_string()).collect(),
        series: vec![
            Series {
                name: "PUT",
                color: SERIES_COLORS[0],
                values: records.iter().map(|r| r.put).collect(),
            },
            Series {
                name: "GET",
                color: SERIES_COLORS[1],
                values: records.iter().map(|r| r.get).collect(),
            },
            Series {
                name: "Overall",
                color: SERIES_COLORS[2],
                values: records.iter().map(|r| r.overall).collect(),
            },
        ],
        rotate_x_labels: false,
    }
}
