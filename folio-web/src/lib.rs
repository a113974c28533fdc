//! Browser entry point for the portfolio page behaviors.
//!
//! Compiled for `wasm32` only. At module start it reads the optional
//! configuration island, wires every behavior against the live document and
//! keeps the listeners alive for the lifetime of the page.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use dom::WebDom;
#[cfg(target_arch = "wasm32")]
pub use listener::EventListener;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalPreferenceStore;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::{LocalPreferenceStore, WebDom};
    use folio_core::Behaviors;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tracing::warn;
    use wasm_bindgen_x::prelude::*;

    thread_local! {
        static INSTALLED: RefCell<Option<Behaviors<WebDom>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let Some(dom) = WebDom::from_window() else {
            warn!("No window/document; page behaviors not installed");
            return;
        };
        let config = folio_core::load_page_config(&dom);
        let store = LocalPreferenceStore::new(dom.window());
        let behaviors = folio_core::install(&dom, store, Rc::new(config));

        INSTALLED.with(|slot| *slot.borrow_mut() = Some(behaviors));
    }
}
