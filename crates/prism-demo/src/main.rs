use anyhow::Result;

use prism_engine::device::ContextConfig;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::triangle::TriangleApp;
use prism_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("prism demo starting");

    Runtime::run(
        RuntimeConfig::default(),
        ContextConfig::default(),
        TriangleApp::default(),
    )
}
