//! Browser frame scheduling and input listeners

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, KeyboardEvent, TouchEvent, Window};

use super::{FrameHandle, FramePlatform, InputEvent, logical_key};
use crate::sim::ControlScheme;

type Listener = Closure<dyn FnMut(Event)>;

/// `requestAnimationFrame` scheduler plus keyboard/touch listeners.
///
/// Listeners are registered on `attach_input` and removed again on
/// `detach_input`, so a stopped session never receives events.
pub struct WebPlatform {
    window: Window,
    /// Element that receives touch gestures (the playfield canvas)
    touch_target: EventTarget,
    frame_callback: Option<Closure<dyn FnMut(f64)>>,
    input_handler: Option<Rc<dyn Fn(InputEvent)>>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl WebPlatform {
    pub fn new(window: Window, touch_target: EventTarget) -> Self {
        Self {
            window,
            touch_target,
            frame_callback: None,
            input_handler: None,
            listeners: Vec::new(),
        }
    }

    /// Wire the callbacks that route frames and input back into the game
    pub fn install(
        &mut self,
        on_frame: impl FnMut(f64) + 'static,
        on_input: impl Fn(InputEvent) + 'static,
    ) {
        self.frame_callback = Some(Closure::new(on_frame));
        self.input_handler = Some(Rc::new(on_input));
    }

    fn listen(&mut self, target: EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) {
        let closure = Listener::new(handler);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Failed to add {} listener", kind);
            return;
        }
        self.listeners.push((target, kind, closure));
    }

    fn remove_listeners(&mut self) {
        for (target, kind, closure) in self.listeners.drain(..) {
            if target
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Failed to remove {} listener", kind);
            }
        }
    }

    fn attach_keyboard(&mut self, on_input: Rc<dyn Fn(InputEvent)>) {
        let target: EventTarget = self.window.clone().into();

        let handler = on_input.clone();
        self.listen(target.clone(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(key) = logical_key(&event.key()) {
                event.prevent_default();
                handler(InputEvent::KeyDown(key));
            }
        });

        self.listen(target, "keyup", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(key) = logical_key(&event.key()) {
                on_input(InputEvent::KeyUp(key));
            }
        });
    }

    fn attach_touch(&mut self, on_input: Rc<dyn Fn(InputEvent)>) {
        let target = self.touch_target.clone();

        let handler = on_input.clone();
        self.listen(target.clone(), "touchstart", move |event| {
            event.prevent_default();
            if let Some(x) = first_touch_x(&event) {
                handler(InputEvent::TouchStart { x });
            }
        });

        let handler = on_input.clone();
        self.listen(target.clone(), "touchmove", move |event| {
            event.prevent_default();
            if let Some(x) = first_touch_x(&event) {
                handler(InputEvent::TouchMove { x });
            }
        });

        self.listen(target, "touchend", move |event| {
            event.prevent_default();
            on_input(InputEvent::TouchEnd);
        });
    }
}

fn first_touch_x(event: &Event) -> Option<f32> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_x() as f32)
}

impl FramePlatform for WebPlatform {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.frame_callback.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.window.cancel_animation_frame(handle.0).is_err() {
            log::warn!("cancelAnimationFrame failed for {:?}", handle);
        }
    }

    fn attach_input(&mut self, scheme: ControlScheme) {
        let Some(on_input) = self.input_handler.clone() else {
            log::warn!("No input handler installed");
            return;
        };
        match scheme {
            ControlScheme::Keyboard => self.attach_keyboard(on_input),
            ControlScheme::Touch => self.attach_touch(on_input),
        }
        log::debug!("{} listeners attached", scheme.as_str());
    }

    fn detach_input(&mut self, scheme: ControlScheme) {
        self.remove_listeners();
        log::debug!("{} listeners detached", scheme.as_str());
    }
}

impl Drop for WebPlatform {
    fn drop(&mut self) {
        self.remove_listeners();
    }
}
