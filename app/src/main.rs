use std::path::Path;

use eyre::Result;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());

    let mut env_filter = EnvFilter::new(format!("benchplot={log_level}"));
    for module in ["common", "reports"] {
        env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .init();

    if let Err(err) = common::report::run_reports(Path::new("."), &reports::all()) {
        error!("{err:#?}");
        return Err(err.into());
    }

    Ok(())
}
