//! USB access to the tablet's report endpoint.

use std::time::Duration;

use rusb::{Device, DeviceHandle, GlobalContext};

use crate::device::DeviceProfile;
use crate::error::DriverError;
use crate::report::Report;

/// How long one read waits before giving the loop a chance to check for shutdown.
const READ_TIMEOUT: Duration = Duration::from_millis(250);

/// Something that hands out one report per call.
pub trait ReportSource {
    /// `Ok(None)` when nothing usable arrived within the poll interval.
    fn next_report(&mut self) -> Result<Option<Report>, DriverError>;
}

/// The tablet with its data interface claimed from the kernel.
///
/// Kernel drivers detached in `open` are reattached on drop.
pub struct UsbTablet {
    handle: DeviceHandle<GlobalContext>,
    interface: u8,
    endpoint: u8,
    detached: Vec<u8>,
    buf: Vec<u8>,
}

impl UsbTablet {
    pub fn open(vendor_id: u16, product_id: u16, profile: &DeviceProfile) -> Result<Self, DriverError> {
        let not_found = DriverError::DeviceNotFound { vendor_id, product_id };
        let mut handle = rusb::open_device_with_vid_pid(vendor_id, product_id).ok_or(not_found)?;
        log::info!("Found {} at {:04x}:{:04x}", profile.name, vendor_id, product_id);

        // The tablet sometimes re-enumerates on reset, leaving the old handle stale.
        match handle.reset() {
            Ok(()) => {}
            Err(rusb::Error::NotFound) => {
                log::debug!("Device re-enumerated after reset, reopening");
                handle = rusb::open_device_with_vid_pid(vendor_id, product_id)
                    .ok_or(DriverError::DeviceNotFound { vendor_id, product_id })?;
            }
            Err(e) => return Err(e.into()),
        }

        let mut detached = Vec::new();
        for iface in 0..profile.interface_count {
            if handle.kernel_driver_active(iface).unwrap_or(false) {
                handle.detach_kernel_driver(iface)?;
                log::debug!("Detached kernel driver from interface {}", iface);
                detached.push(iface);
            }
        }

        handle.set_active_configuration(1)?;

        let (endpoint, packet_size) = find_endpoint(&handle.device(), profile.data_interface)?;
        handle.claim_interface(profile.data_interface)?;
        log::info!(
            "Reading interface {} endpoint 0x{:02x} ({} byte packets)",
            profile.data_interface,
            endpoint,
            packet_size
        );

        Ok(Self {
            handle,
            interface: profile.data_interface,
            endpoint,
            detached,
            buf: vec![0u8; packet_size],
        })
    }
}

fn find_endpoint(device: &Device<GlobalContext>, interface: u8) -> Result<(u8, usize), DriverError> {
    let config = device.active_config_descriptor()?;
    config
        .interfaces()
        .find(|i| i.number() == interface)
        .and_then(|i| i.descriptors().next())
        .and_then(|d| d.endpoint_descriptors().next())
        .map(|ep| (ep.address(), usize::from(ep.max_packet_size())))
        .ok_or(DriverError::NoEndpoint(interface))
}

impl ReportSource for UsbTablet {
    fn next_report(&mut self) -> Result<Option<Report>, DriverError> {
        match self.handle.read_interrupt(self.endpoint, &mut self.buf, READ_TIMEOUT) {
            Ok(n) => {
                let report = Report::from_bytes(&self.buf[..n]);
                if report.is_none() {
                    log::debug!("Dropping short report ({} bytes)", n);
                }
                Ok(report)
            }
            Err(rusb::Error::Timeout) | Err(rusb::Error::Interrupted) => Ok(None),
            Err(e) => Err(DriverError::from_read(e)),
        }
    }
}

impl Drop for UsbTablet {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(self.interface) {
            log::debug!("Failed to release interface {}: {}", self.interface, e);
        }
        for &iface in &self.detached {
            if let Err(e) = self.handle.attach_kernel_driver(iface) {
                log::debug!("Failed to reattach kernel driver to interface {}: {}", iface, e);
            }
        }
        log::info!("USB device released");
    }
}
