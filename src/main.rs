mod config;
mod device;
mod driver;
mod dump;
mod error;
mod input;
mod keys;
mod orientation;
mod report;
mod shutdown;
mod sink;
mod usb;

use std::time::Duration;

use clap::Parser;

use config::{Cli, Command, Config};
use device::DeviceProfile;
use driver::Driver;
use sink::UinputSink;
use usb::UsbTablet;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Some(Command::Dump) => "warn",
        None => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let profile = DeviceProfile::current();
    let config = Config::load(&cli, profile)?;
    let shutdown = shutdown::install()?;

    let mut tablet = UsbTablet::open(config.vendor_id, config.product_id, profile)?;

    if let Some(Command::Dump) = cli.command {
        return Ok(dump::run_dump(&mut tablet, shutdown)?);
    }

    log::info!(
        "moons-pad starting (device={:04x}:{:04x}, name={}, area={}x{}, pressure={}, orientation={})",
        config.vendor_id,
        config.product_id,
        config.xinput_name,
        config.max_x,
        config.max_y,
        config.max_pressure,
        config.orientation()
    );

    log::info!("Creating uinput devices");
    let pen_sink = UinputSink::new(input::create_pen_device(&config)?, "Pen");
    let pad_sink = UinputSink::new(input::create_pad_device(&config)?, "Pad");

    // Give udev/libinput time to attach before sending events.
    std::thread::sleep(Duration::from_secs(1));
    log::info!("Forwarding started");

    Driver::new(tablet, pen_sink, pad_sink, &config, shutdown).run()?;

    println!("Tablet driver stopped");
    Ok(())
}
