mod buttons;
mod event;
mod pen;

pub use buttons::{create_pad_device, ButtonStateMachine};
pub use event::{button_events, pen_events};
pub use pen::{create_pen_device, PenDecoder};

#[cfg(test)]
pub use event::{EV_ABS, EV_KEY};
