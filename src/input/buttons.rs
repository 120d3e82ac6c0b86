//! Pad button decoding.
//!
//! The tablet only reports which button is down right now, never edges. Every
//! report matching a button yields a press; the first report matching none
//! yields a release for the button that was down.

use evdevil::event::Key;
use evdevil::uinput::UinputDevice;
use evdevil::{Bus, InputId};

use crate::config::Config;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSlot {
    Slot0,
    Slot1,
    Slot2,
    Slot3,
}

impl ButtonSlot {
    pub fn index(self) -> usize {
        match self {
            ButtonSlot::Slot0 => 0,
            ButtonSlot::Slot1 => 1,
            ButtonSlot::Slot2 => 2,
            ButtonSlot::Slot3 => 3,
        }
    }

    /// First match wins.
    pub fn from_report(report: &Report) -> Option<Self> {
        if report.byte(1) == 2 {
            Some(ButtonSlot::Slot0)
        } else if report.byte(1) == 4 {
            Some(ButtonSlot::Slot1)
        } else if report.byte(3) == 44 {
            Some(ButtonSlot::Slot2)
        } else if report.byte(3) == 43 {
            Some(ButtonSlot::Slot3)
        } else {
            None
        }
    }
}

/// Key value written for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    Released,
    Pressed,
    /// Auto-repeat, left to the input subsystem. Never produced by the pad.
    #[allow(dead_code)]
    Held,
}

impl ButtonPhase {
    pub fn value(self) -> i32 {
        match self {
            ButtonPhase::Released => 0,
            ButtonPhase::Pressed => 1,
            ButtonPhase::Held => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTransition {
    pub slot: ButtonSlot,
    pub phase: ButtonPhase,
}

#[derive(Debug, Default)]
pub struct ButtonStateMachine {
    active_slot: Option<ButtonSlot>,
}

impl ButtonStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_slot(&self) -> Option<ButtonSlot> {
        self.active_slot
    }

    /// Process one button report.
    ///
    /// Repeated presses of the same button are not suppressed; the sink
    /// relies on them.
    pub fn step(&mut self, report: &Report) -> Option<ButtonTransition> {
        match ButtonSlot::from_report(report) {
            Some(slot) => {
                self.active_slot = Some(slot);
                Some(ButtonTransition { slot, phase: ButtonPhase::Pressed })
            }
            None => self.active_slot.take().map(|slot| ButtonTransition {
                slot,
                phase: ButtonPhase::Released,
            }),
        }
    }
}

pub fn create_pad_device(config: &Config) -> Result<UinputDevice, Box<dyn std::error::Error + Send + Sync>> {
    let keys: Vec<Key> = config.button_keys();
    let device = UinputDevice::builder()?
        .with_input_id(InputId::new(Bus::from_raw(0x03), config.vendor_id, config.product_id, 0x3))?
        .with_keys(keys)?
        .build(&config.pad_name())?;

    Ok(device)
}
