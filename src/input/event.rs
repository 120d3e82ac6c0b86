//! Build evdev event batches from decoded pen samples and button transitions.

use evdevil::event::{Abs, AbsEvent, EventType, InputEvent, Key, KeyEvent, KeyState};

use crate::config::BUTTON_COUNT;

use super::buttons::ButtonTransition;
use super::pen::PenSample;

pub const EV_KEY: u16 = 0x01;
#[cfg(test)]
pub const EV_ABS: u16 = 0x03;

/// Build a key event (EV_KEY) with a raw value: 0 up, 1 down, 2 repeat.
pub fn key_event(code: u16, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_KEY), code, value)
}

/// ABS_X, ABS_Y, ABS_PRESSURE, then BTN_TOUCH. The caller adds the SYN_REPORT.
pub fn pen_events(sample: &PenSample) -> [InputEvent; 4] {
    let touch = if sample.touching {
        KeyState::PRESSED
    } else {
        KeyState::RELEASED
    };
    [
        AbsEvent::new(Abs::X, sample.x as i32).into(),
        AbsEvent::new(Abs::Y, sample.y as i32).into(),
        AbsEvent::new(Abs::PRESSURE, sample.pressure as i32).into(),
        KeyEvent::new(Key::BTN_TOUCH, touch).into(),
    ]
}

/// One key event per key bound to the transition's slot, in binding order.
pub fn button_events(
    transition: &ButtonTransition,
    bindings: &[Vec<Key>; BUTTON_COUNT],
) -> Vec<InputEvent> {
    let value = transition.phase.value();
    bindings[transition.slot.index()]
        .iter()
        .map(|key| key_event(key.raw(), value))
        .collect()
}
