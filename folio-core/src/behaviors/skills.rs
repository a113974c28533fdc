use crate::dom::{Dom, DomEvent};
use folio_common::PageConfig;
use std::rc::Rc;
use tracing::{debug, warn};

pub fn skills_expanded<D: Dom>(dom: &D, section: &D::Element, config: &PageConfig) -> bool {
    dom.has_class(section, &config.classes.show)
}

/// Put the section, its items and the button label into one consistent state.
///
/// The click handler flips each marker on its own and never calls this; hosts can
/// use it to normalize markup that starts out with both or neither marker.
pub fn commit_skills_expanded<D: Dom>(
    dom: &D,
    button: &D::Element,
    section: &D::Element,
    items: &[D::Element],
    config: &PageConfig,
    expanded: bool,
) {
    let classes = &config.classes;
    for el in std::iter::once(section).chain(items) {
        dom.set_class(el, &classes.show, expanded);
        dom.set_class(el, &classes.hide, !expanded);
    }
    let label = if expanded {
        &config.labels.see_less
    } else {
        &config.labels.see_more
    };
    dom.set_text(button, label);
}

/// "See More/See Less" for the skills list.
pub fn init_skills_toggle<D: Dom>(dom: &D, config: &Rc<PageConfig>) -> Option<D::Listener> {
    let (Some(button), Some(section)) = (
        dom.query(&config.selectors.skills_button),
        dom.query(&config.selectors.skills_section),
    ) else {
        debug!("Skills toggle not wired: button or section missing");
        return None;
    };
    let items = dom.query_all(&config.selectors.skills_items);

    let handler_dom = dom.clone();
    let handler_button = button.clone();
    let config = config.clone();
    Some(dom.listen(
        &button,
        "click",
        Box::new(move |event: &dyn DomEvent| {
            event.prevent_default();
            let dom = &handler_dom;
            let classes = &config.classes;

            let was_expanded = skills_expanded(dom, &section, &config);
            let label = if was_expanded {
                &config.labels.see_more
            } else {
                &config.labels.see_less
            };
            dom.set_text(&handler_button, label);

            // Both markers flip independently, on the section and on every item.
            dom.toggle_class(&section, &classes.show);
            dom.toggle_class(&section, &classes.hide);
            for item in &items {
                dom.toggle_class(item, &classes.hide);
                dom.toggle_class(item, &classes.show);
            }

            let shown = dom.has_class(&section, &classes.show);
            if shown == dom.has_class(&section, &classes.hide) {
                warn!(shown, "Skills section carries both or neither of show/hide");
            }
        }),
    ))
}
