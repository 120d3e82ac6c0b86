use evdevil::event::Abs;
use evdevil::uinput::{AbsSetup, UinputDevice};
use evdevil::{AbsInfo, Bus, InputId};

use crate::config::Config;
use crate::orientation::Orientation;
use crate::report::Report;

/// One decoded pen position report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenSample {
    pub x: u32,
    pub y: u32,
    pub pressure: u32,
    pub touching: bool,
}

/// Decodes pen reports with an orientation fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct PenDecoder {
    orientation: Orientation,
    max_x: u32,
    max_y: u32,
}

impl PenDecoder {
    pub fn new(config: &Config) -> Self {
        Self {
            orientation: config.orientation(),
            max_x: config.max_x,
            max_y: config.max_y,
        }
    }

    /// `touch` is the classifier's flag for byte[1] == 192, which means the
    /// pen is hovering. Contact is its inverse.
    ///
    /// Pressure is passed through unclamped.
    pub fn decode(&self, report: &Report, touch: bool) -> PenSample {
        let (x, y) = self.orientation.decode_axes(report, self.max_x, self.max_y);
        PenSample {
            x,
            y,
            pressure: report.word(6, 7),
            touching: !touch,
        }
    }
}

// libinput requires resolution on X/Y to accept the device as a tablet.
pub fn create_pen_device(config: &Config) -> Result<UinputDevice, Box<dyn std::error::Error + Send + Sync>> {
    let axes = [
        AbsSetup::new(
            Abs::X,
            AbsInfo::new(0, config.max_x as i32).with_resolution(config.resolution_x as i32),
        ),
        AbsSetup::new(
            Abs::Y,
            AbsInfo::new(0, config.max_y as i32).with_resolution(config.resolution_y as i32),
        ),
        AbsSetup::new(Abs::PRESSURE, AbsInfo::new(0, config.max_pressure as i32)),
    ];

    let device = UinputDevice::builder()?
        .with_input_id(InputId::new(Bus::from_raw(0x03), config.vendor_id, config.product_id, 0x3))?
        .with_abs_axes(axes)?
        .with_keys(config.pen_keys.iter().copied())?
        .build(&config.xinput_name)?;

    Ok(device)
}
