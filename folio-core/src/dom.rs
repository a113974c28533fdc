//! The slice of the browser the page behaviors talk to.
//!
//! Behaviors never touch `web-sys` directly. They go through [`Dom`], which the
//! wasm binding implements over the real document and the test helpers implement
//! over an in-memory element tree. Toggle state lives in marker classes on the
//! elements, so the trait exposes class membership rather than any state store.

use futures::future::LocalBoxFuture;

/// An event delivered to a listener
pub trait DomEvent {
    fn prevent_default(&self);
}

/// Listener callback. Runs to completion on the UI thread.
pub type Handler = Box<dyn FnMut(&dyn DomEvent)>;

pub trait Dom: Clone + 'static {
    type Element: Clone + 'static;
    /// Keeps a listener attached. Dropping it detaches the listener.
    type Listener: 'static;

    /// First element matching `selector`, or `None` (also for invalid selectors).
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn add_class(&self, el: &Self::Element, class: &str);
    fn remove_class(&self, el: &Self::Element, class: &str);
    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, el: &Self::Element, class: &str) -> bool;

    fn set_class(&self, el: &Self::Element, class: &str, present: bool) {
        if present {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
    }

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);
    fn text(&self, el: &Self::Element) -> String;
    fn set_text(&self, el: &Self::Element, text: &str);

    /// Distance from the document top (`offsetTop`)
    fn offset_top(&self, el: &Self::Element) -> f64;
    /// Rendered height (`offsetHeight`)
    fn offset_height(&self, el: &Self::Element) -> f64;
    fn scroll_y(&self) -> f64;

    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    /// Open the browser print dialog.
    fn print(&self);

    fn listen(&self, el: &Self::Element, event: &'static str, handler: Handler) -> Self::Listener;
    fn listen_window(&self, event: &'static str, handler: Handler) -> Self::Listener;

    /// Run `task` on the UI thread's executor.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}
