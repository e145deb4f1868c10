pub mod keyboard;
pub mod pointer;

use gallery_core::input::{walk_intent, HeldDirections};
use gallery_core::MoveIntent;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_desktop_look, wire_touch_controls, InputWiring};

/// Directions held by each input source.
#[derive(Default, Clone, Copy, Debug)]
pub struct Controls {
    pub keys: HeldDirections,
    pub joystick: HeldDirections,
}

impl Controls {
    pub fn intent(&self, can_walk: bool) -> MoveIntent {
        walk_intent(self.keys, self.joystick, can_walk)
    }
}
