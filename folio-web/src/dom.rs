use crate::listener::EventListener;
use folio_core::{Dom, DomEvent, Handler};
use futures::future::LocalBoxFuture;
use tracing::warn;
use wasm_bindgen_x::JsCast;
use web_sys_x::{Element, HtmlElement};

/// [`Dom`] over the live browser document
#[derive(Clone)]
pub struct WebDom {
    window: web_sys_x::Window,
    document: web_sys_x::Document,
}

impl WebDom {
    pub fn from_window() -> Option<Self> {
        let window = web_sys_x::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &web_sys_x::Window {
        &self.window
    }
}

struct WebEvent<'a>(&'a web_sys_x::Event);

impl DomEvent for WebEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

fn listen_on(
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    mut handler: Handler,
) -> EventListener {
    EventListener::new(target, event_name, move |event: web_sys_x::Event| {
        handler(&WebEvent(&event))
    })
}

impl Dom for WebDom {
    type Element = Element;
    type Listener = EventListener;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn add_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn toggle_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().toggle(class).unwrap_or(false)
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        let _ = el.set_attribute(name, value);
    }

    fn text(&self, el: &Element) -> String {
        el.text_content().unwrap_or_default()
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn offset_top(&self, el: &Element) -> f64 {
        el.dyn_ref::<HtmlElement>()
            .map(|html| html.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn offset_height(&self, el: &Element) -> f64 {
        el.dyn_ref::<HtmlElement>()
            .map(|html| html.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn print(&self) {
        if let Err(e) = self.window.print() {
            warn!("Print dialog failed to open: {e:?}");
        }
    }

    fn listen(&self, el: &Element, event: &'static str, handler: Handler) -> EventListener {
        listen_on(el.clone().into(), event, handler)
    }

    fn listen_window(&self, event: &'static str, handler: Handler) -> EventListener {
        listen_on(self.window.clone().into(), event, handler)
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures_x::spawn_local(task);
    }
}
