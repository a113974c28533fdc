//! Event listeners tied to Rust ownership.
//!
//! A listener attached through a `Closure` only stays valid while the closure
//! lives. Rather than `Closure::forget()`, which leaks the closure and leaves the
//! listener attached forever, [`EventListener`] owns the closure and removes the
//! listener in `Drop`.

use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself from its target when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys_x::Event)>,
}

impl EventListener {
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys_x::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
