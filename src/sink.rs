//! Destinations for decoded events.

use std::io;

use evdevil::event::InputEvent;
use evdevil::uinput::UinputDevice;

/// A virtual input device accepting event batches.
///
/// Events passed to `write` are held until `synchronize` closes the report.
pub trait EventSink {
    fn write(&mut self, events: &[InputEvent]) -> io::Result<()>;
    fn synchronize(&mut self) -> io::Result<()>;
}

/// uinput-backed sink. The device is destroyed when this is dropped.
pub struct UinputSink {
    device: UinputDevice,
    pending: Vec<InputEvent>,
    label: &'static str,
}

impl UinputSink {
    pub fn new(device: UinputDevice, label: &'static str) -> Self {
        if let Ok(name) = device.sysname() {
            log::info!(
                "{} device ready: /sys/devices/virtual/input/{}",
                label,
                name.to_string_lossy()
            );
        }
        Self {
            device,
            pending: Vec::with_capacity(8),
            label,
        }
    }
}

impl EventSink for UinputSink {
    fn write(&mut self, events: &[InputEvent]) -> io::Result<()> {
        self.pending.extend_from_slice(events);
        Ok(())
    }

    fn synchronize(&mut self) -> io::Result<()> {
        self.device.writer().write_events(&self.pending)?.finish()?;
        self.pending.clear();
        Ok(())
    }
}

impl Drop for UinputSink {
    fn drop(&mut self) {
        log::info!("Releasing {} device", self.label);
    }
}
