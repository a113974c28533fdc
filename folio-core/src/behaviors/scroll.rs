use crate::dom::{Dom, DomEvent};
use folio_common::{scroll_top_visible, PageConfig, SectionBounds};
use std::rc::Rc;
use tracing::trace;

/// Mark the nav link of every section that contains `scroll_y` as active and
/// clear the rest. Sections without a matching link are skipped.
pub fn update_active_links<D: Dom>(
    dom: &D,
    sections: &[D::Element],
    config: &PageConfig,
    scroll_y: f64,
) {
    for section in sections {
        let Some(id) = dom.attribute(section, "id") else {
            continue;
        };
        let Some(link) = dom.query(&config.selectors.nav_link_for(&id)) else {
            continue;
        };
        let bounds = SectionBounds::new(dom.offset_top(section), dom.offset_height(section));
        let active = bounds.contains(scroll_y, config.scroll.spy_offset);
        dom.set_class(&link, &config.classes.active_link, active);
    }
}

/// Scroll-spy: keep the nav link of the section in view highlighted.
pub fn init_scroll_spy<D: Dom>(dom: &D, config: &Rc<PageConfig>) -> D::Listener {
    let sections = dom.query_all(&config.selectors.section_with_id);
    let handler_dom = dom.clone();
    let config = config.clone();
    dom.listen_window(
        "scroll",
        Box::new(move |_: &dyn DomEvent| {
            let scroll_y = handler_dom.scroll_y();
            trace!(scroll_y, "Scroll-spy tick");
            update_active_links(&handler_dom, &sections, &config, scroll_y);
        }),
    )
}

/// Show the scroll-to-top control once the page is scrolled past the threshold.
///
/// The listener is attached even when the control is missing.
pub fn init_scroll_top<D: Dom>(dom: &D, config: &Rc<PageConfig>) -> D::Listener {
    let control = dom.query(&config.selectors.scroll_top);
    let handler_dom = dom.clone();
    let config = config.clone();
    dom.listen_window(
        "scroll",
        Box::new(move |_: &dyn DomEvent| {
            let Some(control) = &control else {
                return;
            };
            let visible =
                scroll_top_visible(handler_dom.scroll_y(), config.scroll.scroll_top_threshold);
            handler_dom.set_class(control, &config.classes.show_scroll, visible);
        }),
    )
}
