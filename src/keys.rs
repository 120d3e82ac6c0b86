//! Resolve action identifiers such as `KEY_LEFTCTRL+KEY_Z` to evdev key codes.

use evdevil::event::Key;

use crate::error::ConfigError;

/// Look up a single key name, e.g. `KEY_E` or `BTN_STYLUS`.
pub fn parse_key(name: &str) -> Result<Key, ConfigError> {
    let name = name.trim();
    name.parse::<Key>()
        .map_err(|_| ConfigError::UnknownKey(name.to_string()))
}

/// Parse a `+`-joined chord into its keys, in order.
pub fn parse_chord(action: &str) -> Result<Vec<Key>, ConfigError> {
    if action.trim().is_empty() {
        return Err(ConfigError::EmptyAction);
    }
    action.split('+').map(parse_key).collect()
}
