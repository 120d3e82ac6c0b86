use super::DeviceProfile;

/// 10moons T503 (USB 08f2:6811).
pub const T503: DeviceProfile = DeviceProfile {
    name: "10moons T503",

    vendor_id: 0x08f2,
    product_id: 0x6811,

    data_interface: 2,
    interface_count: 3,

    pen_x_max: 4095,
    pen_y_max: 2047,
    pen_pressure_max: 1023,
    pen_resolution_x: 160,
    pen_resolution_y: 160,

    xinput_name: "10moons-pen",

    tablet_buttons: ["KEY_LEFTCTRL+KEY_Z", "KEY_E", "KEY_B", "KEY_LEFTCTRL+KEY_SPACE"],
    pen_actions: &[("pen", "BTN_TOOL_PEN"), ("stylus", "BTN_STYLUS")],
};
