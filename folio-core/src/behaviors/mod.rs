mod menu;
mod resume;
mod scroll;
mod skills;
mod theme;

pub use menu::{commit_menu_open, init_menu_toggle, init_mobile_menu_close, menu_is_open};
pub use resume::{init_pdf_generator, ResumePrinter};
pub use scroll::{init_scroll_spy, init_scroll_top, update_active_links};
pub use skills::{commit_skills_expanded, init_skills_toggle, skills_expanded};
pub use theme::{commit_theme, init_theme_toggle, load_theme, read_theme, save_theme};

use crate::dom::Dom;
use crate::storage::PreferenceStore;
use folio_common::PageConfig;
use std::rc::Rc;
use tracing::info;

/// Every listener the page behaviors attached. Dropping it detaches them all.
pub struct Behaviors<D: Dom> {
    listeners: Vec<D::Listener>,
}

impl<D: Dom> Behaviors<D> {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Wire all seven behaviors. Each one that finds its elements attaches its
/// listeners; the others are skipped.
pub fn install<D: Dom, S: PreferenceStore>(
    dom: &D,
    store: S,
    config: Rc<PageConfig>,
) -> Behaviors<D> {
    let mut listeners = Vec::new();
    listeners.extend(init_menu_toggle(dom, &config));
    listeners.extend(init_mobile_menu_close(dom, &config));
    listeners.push(init_scroll_spy(dom, &config));
    listeners.push(init_scroll_top(dom, &config));
    listeners.extend(init_theme_toggle(dom, Rc::new(store), &config));
    listeners.extend(init_skills_toggle(dom, &config));
    listeners.extend(init_pdf_generator(dom, &config));

    info!(listeners = listeners.len(), "Page behaviors installed");
    Behaviors { listeners }
}
