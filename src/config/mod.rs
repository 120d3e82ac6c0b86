mod cli;
mod file;

pub use cli::{Cli, Command};

use evdevil::event::Key;

use crate::device::DeviceProfile;
use crate::error::ConfigError;
use crate::keys;
use crate::orientation::Orientation;

use file::FileConfig;

/// Number of physical buttons on the pad.
pub const BUTTON_COUNT: usize = 4;

/// Merged configuration from CLI args, TOML file and the device profile.
///
/// Immutable once loaded; every action identifier is already resolved to keys.
#[derive(Debug, Clone)]
pub struct Config {
    pub vendor_id: u16,
    pub product_id: u16,
    pub xinput_name: String,
    pub max_x: u32,
    pub max_y: u32,
    pub max_pressure: u32,
    pub resolution_x: u32,
    pub resolution_y: u32,
    pub swap_axis: bool,
    pub swap_directions: bool,
    /// Keys pressed together for each pad button, in slot order.
    pub button_bindings: [Vec<Key>; BUTTON_COUNT],
    /// Pen-side keys declared under `[actions]`, always including BTN_TOUCH.
    pub pen_keys: Vec<Key>,
}

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli, device: &DeviceProfile) -> Result<Self, ConfigError> {
        let file_config = match cli.config.as_ref() {
            Some(path) => file::load_from_path(path)?,
            None => file::load_from_default_paths().unwrap_or_default(),
        };
        Self::resolve(cli, file_config, device)
    }

    fn resolve(cli: &Cli, file: FileConfig, device: &DeviceProfile) -> Result<Self, ConfigError> {
        let button_bindings = match file.actions.tablet_buttons {
            Some(ref list) => resolve_buttons(list.iter().map(String::as_str))?,
            None => resolve_buttons(device.tablet_buttons.iter().copied())?,
        };

        let mut pen_keys = vec![Key::BTN_TOUCH];
        if file.actions.other.is_empty() {
            for (_, action) in device.pen_actions {
                push_unique(&mut pen_keys, keys::parse_chord(action)?);
            }
        } else {
            for binding in file.actions.other.values() {
                for chord in binding.chords() {
                    push_unique(&mut pen_keys, keys::parse_chord(chord)?);
                }
            }
        }

        Ok(Self {
            vendor_id: cli.vendor_id.or(file.vendor_id).unwrap_or(device.vendor_id),
            product_id: cli.product_id.or(file.product_id).unwrap_or(device.product_id),
            xinput_name: cli
                .name
                .clone()
                .or(file.xinput_name)
                .unwrap_or_else(|| device.xinput_name.into()),
            max_x: file.pen.max_x.unwrap_or(device.pen_x_max),
            max_y: file.pen.max_y.unwrap_or(device.pen_y_max),
            max_pressure: file.pen.max_pressure.unwrap_or(device.pen_pressure_max),
            resolution_x: file.pen.resolution_x.unwrap_or(device.pen_resolution_x),
            resolution_y: file.pen.resolution_y.unwrap_or(device.pen_resolution_y),
            swap_axis: cli.swap_axis || file.settings.swap_axis,
            swap_directions: cli.swap_directions || file.settings.swap_directions,
            button_bindings,
            pen_keys,
        })
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_flags(self.swap_directions, self.swap_axis)
    }

    /// Every key any pad button can press, deduplicated.
    pub fn button_keys(&self) -> Vec<Key> {
        let mut out = Vec::new();
        for binding in &self.button_bindings {
            push_unique(&mut out, binding.iter().copied());
        }
        out
    }

    pub fn pad_name(&self) -> String {
        format!("{} Pad", self.xinput_name)
    }
}

fn resolve_buttons<'a>(
    actions: impl ExactSizeIterator<Item = &'a str>,
) -> Result<[Vec<Key>; BUTTON_COUNT], ConfigError> {
    let len = actions.len();
    let parsed = actions
        .map(keys::parse_chord)
        .collect::<Result<Vec<_>, _>>()?;
    parsed.try_into().map_err(|_| ConfigError::ButtonCount(len))
}

fn push_unique(out: &mut Vec<Key>, keys: impl IntoIterator<Item = Key>) {
    for key in keys {
        if !out.contains(&key) {
            out.push(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::T503;
    use clap::Parser;
    use std::path::Path;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("moons-pad").chain(args.iter().copied()))
    }

    fn file_config(toml: &str) -> FileConfig {
        file::parse(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_defaults_from_profile() {
        let cfg = Config::resolve(&cli(&[]), FileConfig::default(), &T503).unwrap();
        assert_eq!(cfg.vendor_id, 0x08f2);
        assert_eq!(cfg.product_id, 0x6811);
        assert_eq!(cfg.max_x, 4095);
        assert_eq!(cfg.xinput_name, "10moons-pen");
        assert_eq!(cfg.pad_name(), "10moons-pen Pad");
        assert_eq!(cfg.orientation(), Orientation::Native);
        assert_eq!(cfg.button_bindings[0], vec![Key::KEY_LEFTCTRL, Key::KEY_Z]);
        assert_eq!(cfg.pen_keys, vec![Key::BTN_TOUCH, Key::BTN_TOOL_PEN, Key::BTN_STYLUS]);
    }

    #[test]
    fn test_file_values_and_cli_overrides() {
        let file = file_config(
            r#"
vendor_id = 1
xinput_name = "from-file"
[pen]
max_x = 1000
[settings]
swap_directions = true
"#,
        );
        let cfg = Config::resolve(&cli(&["--vendor-id", "2", "--swap-axis"]), file, &T503).unwrap();
        assert_eq!(cfg.vendor_id, 2);
        assert_eq!(cfg.xinput_name, "from-file");
        assert_eq!(cfg.max_x, 1000);
        assert_eq!(cfg.max_y, 2047);
        assert_eq!(cfg.orientation(), Orientation::SwappedReversed);
    }

    #[test]
    fn test_button_keys_deduplicated() {
        let file = file_config(
            r#"
[actions]
tablet_buttons = ["KEY_LEFTCTRL+KEY_Z", "KEY_LEFTCTRL+KEY_Y", "KEY_B", "KEY_B"]
"#,
        );
        let cfg = Config::resolve(&cli(&[]), file, &T503).unwrap();
        assert_eq!(
            cfg.button_keys(),
            vec![Key::KEY_LEFTCTRL, Key::KEY_Z, Key::KEY_Y, Key::KEY_B]
        );
    }

    #[test]
    fn test_pen_actions_flattened() {
        let file = file_config(
            r#"
[actions]
eraser = "BTN_TOOL_RUBBER"
stylus = ["BTN_STYLUS", "BTN_STYLUS2+KEY_LEFTSHIFT"]
"#,
        );
        let cfg = Config::resolve(&cli(&[]), file, &T503).unwrap();
        assert_eq!(
            cfg.pen_keys,
            vec![
                Key::BTN_TOUCH,
                Key::BTN_TOOL_RUBBER,
                Key::BTN_STYLUS,
                Key::BTN_STYLUS2,
                Key::KEY_LEFTSHIFT
            ]
        );
    }

    #[test]
    fn test_wrong_button_count() {
        let file = file_config("[actions]\ntablet_buttons = [\"KEY_A\", \"KEY_B\"]\n");
        let err = Config::resolve(&cli(&[]), file, &T503).unwrap_err();
        assert!(matches!(err, ConfigError::ButtonCount(2)));
    }

    #[test]
    fn test_unknown_action_key() {
        let file = file_config(
            "[actions]\ntablet_buttons = [\"KEY_A\", \"KEY_B\", \"KEY_C\", \"KEY_BOGUS\"]\n",
        );
        let err = Config::resolve(&cli(&[]), file, &T503).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(ref k) if k == "KEY_BOGUS"));
    }
}
