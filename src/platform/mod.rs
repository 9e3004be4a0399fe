//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Device classification (picks the control scheme once at startup)
//! - Physical key translation
//! - Frame scheduling and input listener lifetime

mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::ManualPlatform;

use crate::consts::TOUCH_VIEWPORT_MAX_WIDTH;
use crate::sim::{ControlScheme, LogicalKey};

/// Coarse device class, supplied once by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Touch,
}

impl DeviceClass {
    /// Narrow viewports are treated as phones/tablets
    pub fn from_viewport_width(width: f64) -> Self {
        if width <= TOUCH_VIEWPORT_MAX_WIDTH {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn control_scheme(&self) -> ControlScheme {
        match self {
            DeviceClass::Desktop => ControlScheme::Keyboard,
            DeviceClass::Touch => ControlScheme::Touch,
        }
    }
}

/// Map a DOM `KeyboardEvent.key` value onto a logical key
pub fn logical_key(key: &str) -> Option<LogicalKey> {
    match key {
        "ArrowLeft" => Some(LogicalKey::LaneLeft),
        "ArrowRight" => Some(LogicalKey::LaneRight),
        " " | "Spacebar" => Some(LogicalKey::Fire),
        _ => None,
    }
}

/// Input as delivered by a platform listener, already mapped to logical keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(LogicalKey),
    KeyUp(LogicalKey),
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
}

/// Opaque id of a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// External scheduler and input-listener host for the game driver
pub trait FramePlatform {
    /// Ask for one callback at the next display refresh
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Withdraw a callback that has not fired yet
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// Start delivering input events for the scheme
    fn attach_input(&mut self, scheme: ControlScheme);
    /// Stop delivering input events for the scheme
    fn detach_input(&mut self, scheme: ControlScheme);
}
