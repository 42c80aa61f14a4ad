pub mod concurrent;
pub mod loadbalance;
pub mod single_client;

use common::report::Report;

/// The three reports in their fixed execution order.
pub fn all() -> Vec<Box<dyn Report>> {
    vec![
        Box::new(single_client::SingleClient),
        Box::new(concurrent::Concurrent),
        Box::new(loadbalance::LoadBalance),
    ]
}
