//! Frame-driven session driver
//!
//! [`Game`] owns the session and the two platform resources that only exist
//! while a run is live: the pending animation-frame request and the input
//! listeners for the active control scheme. Both are released on game over,
//! on `stop()`, and when the `Game` is dropped.

use crate::platform::{FrameHandle, FramePlatform, InputEvent};
use crate::sim::{GameEvent, Session, SessionStatus, Snapshot, TickOutcome, tick};

/// Receives gameplay notifications (audio, VFX). Implementations must not
/// panic on failure; the simulation never waits on or inspects them.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// No listener attached
impl EventSink for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Collects events, handy for tests and replays
impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

pub struct Game<P: FramePlatform, S: EventSink = ()> {
    session: Session,
    platform: P,
    sink: S,
    pending_frame: Option<FrameHandle>,
    input_attached: bool,
}

impl<P: FramePlatform, S: EventSink> Game<P, S> {
    pub fn new(session: Session, platform: P, sink: S) -> Self {
        Self {
            session,
            platform,
            sink,
            pending_frame: None,
            input_attached: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access for input forwarding
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session)
    }

    pub fn is_frame_pending(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Start (or restart) a run and schedule its first frame
    pub fn start(&mut self) {
        self.release();
        self.session.start();
        self.attach_input();
        self.arm();
    }

    /// Abandon the run and return to Idle
    pub fn stop(&mut self) {
        self.release();
        self.session.stop();
        log::info!("Session stopped");
    }

    /// Record a platform input event; it takes effect on the next tick
    pub fn handle_input(&mut self, event: InputEvent) {
        let session = &mut self.session;
        match event {
            InputEvent::KeyDown(key) => session.key_down(key),
            InputEvent::KeyUp(key) => session.key_up(key),
            InputEvent::TouchStart { x } => session.touch_start(x),
            InputEvent::TouchMove { x } => session.touch_move(x),
            InputEvent::TouchEnd => session.touch_end(),
        }
    }

    /// Scheduler callback: run one tick and re-arm while still Active
    pub fn on_frame(&mut self, timestamp: f64) -> TickOutcome {
        self.pending_frame = None;

        let outcome = tick(&mut self.session, timestamp);
        for event in self.session.drain_events() {
            self.sink.on_event(&event);
        }

        match outcome {
            TickOutcome::Running => self.arm(),
            TickOutcome::GameOver => {
                self.detach_input();
                log::info!("Final score: {}", self.session.score);
            }
            TickOutcome::Skipped => {}
        }
        outcome
    }

    fn arm(&mut self) {
        if self.session.status != SessionStatus::Active || self.pending_frame.is_some() {
            return;
        }
        self.pending_frame = self.platform.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("Frame request failed; simulation paused");
        }
    }

    fn attach_input(&mut self) {
        if !self.input_attached {
            self.platform.attach_input(self.session.input.scheme());
            self.input_attached = true;
        }
    }

    fn detach_input(&mut self) {
        if self.input_attached {
            self.platform.detach_input(self.session.input.scheme());
            self.input_attached = false;
        }
    }

    fn release(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.platform.cancel_frame(handle);
        }
        self.detach_input();
    }
}

impl<P: FramePlatform, S: EventSink> Drop for Game<P, S> {
    fn drop(&mut self) {
        self.release();
    }
}
