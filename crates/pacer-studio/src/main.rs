mod pulse;

use pacer_engine::config::DriverConfig;
use pacer_engine::device::GpuInit;
use pacer_engine::logging::{LoggingConfig, init_logging};
use pacer_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::pulse::PulseClient;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "pacer studio".to_string(),
        initial_size: LogicalSize::new(960.0, 540.0),
        driver: DriverConfig::default().target_fps(60.0),
    };

    Runtime::run(config, GpuInit::default(), |surface| {
        Ok(PulseClient::new(surface))
    })
}
