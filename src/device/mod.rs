mod t503;

pub use t503::T503;

/// Built-in parameters for a supported tablet model.
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    pub name: &'static str,

    // USB identity
    pub vendor_id: u16,
    pub product_id: u16,

    // Interface carrying pen and button reports; 0 and 1 are keyboard/mouse emulation
    pub data_interface: u8,
    // Interfaces the kernel HID driver may hold
    pub interface_count: u8,

    // Pen digitizer ranges
    pub pen_x_max: u32,
    pub pen_y_max: u32,
    pub pen_pressure_max: u32,
    pub pen_resolution_x: u32,
    pub pen_resolution_y: u32,

    pub xinput_name: &'static str,

    // Default bindings for the four pad buttons
    pub tablet_buttons: [&'static str; 4],
    // Default pen-side actions, name -> key
    pub pen_actions: &'static [(&'static str, &'static str)],
}

impl DeviceProfile {
    pub fn current() -> &'static Self {
        &T503
    }
}
