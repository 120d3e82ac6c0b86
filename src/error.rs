//! Error types for configuration and the forward loop.

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown key name '{0}'")]
    UnknownKey(String),
    #[error("empty action binding")]
    EmptyAction,
    #[error("actions.tablet_buttons needs exactly 4 entries, got {0}")]
    ButtonCount(usize),
}

#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error("no USB device with id {vendor_id:04x}:{product_id:04x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },
    #[error("interface {0} has no endpoint")]
    NoEndpoint(u8),
    #[error("device has been disconnected")]
    DeviceDisconnected,
    #[error("USB read failed: {0}")]
    Read(#[source] rusb::Error),
    #[error("USB setup failed: {0}")]
    Usb(#[from] rusb::Error),
    #[error("failed to write to uinput device: {0}")]
    Sink(#[from] io::Error),
}

impl DriverError {
    /// Classify an error from an interrupt read.
    pub fn from_read(err: rusb::Error) -> Self {
        match err {
            rusb::Error::NoDevice => DriverError::DeviceDisconnected,
            other => DriverError::Read(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_classification() {
        assert!(matches!(
            DriverError::from_read(rusb::Error::NoDevice),
            DriverError::DeviceDisconnected
        ));
        assert!(matches!(
            DriverError::from_read(rusb::Error::Pipe),
            DriverError::Read(rusb::Error::Pipe)
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(DriverError::DeviceDisconnected.to_string(), "device has been disconnected");
        let e = DriverError::DeviceNotFound { vendor_id: 0x08f2, product_id: 0x6811 };
        assert_eq!(e.to_string(), "no USB device with id 08f2:6811");
    }
}
