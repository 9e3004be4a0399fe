//! Manually pumped frame scheduler for native runs and tests

use super::{FrameHandle, FramePlatform};
use crate::sim::ControlScheme;

/// Holds at most one pending frame; the owner fires it with [`take_frame`](Self::take_frame)
#[derive(Debug, Default)]
pub struct ManualPlatform {
    next_handle: i32,
    pending: Option<FrameHandle>,
    attached: Option<ControlScheme>,
    requested: u32,
    cancelled: u32,
}

impl ManualPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the pending frame, if any
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn attached_scheme(&self) -> Option<ControlScheme> {
        self.attached
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl FramePlatform for ManualPlatform {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(handle);
        self.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled += 1;
    }

    fn attach_input(&mut self, scheme: ControlScheme) {
        log::debug!("Input attached ({})", scheme.as_str());
        self.attached = Some(scheme);
    }

    fn detach_input(&mut self, scheme: ControlScheme) {
        log::debug!("Input detached ({})", scheme.as_str());
        self.attached = None;
    }
}
