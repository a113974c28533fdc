use crate::dom::{Dom, DomEvent};
use folio_common::PageConfig;
use std::rc::Rc;
use tracing::debug;

pub fn menu_is_open<D: Dom>(dom: &D, nav: &D::Element, config: &PageConfig) -> bool {
    dom.has_class(nav, &config.classes.show_menu)
}

/// Open or close the menu and keep the toggle's `aria-expanded` in step.
pub fn commit_menu_open<D: Dom>(
    dom: &D,
    toggle: &D::Element,
    nav: &D::Element,
    config: &PageConfig,
    open: bool,
) {
    dom.set_class(nav, &config.classes.show_menu, open);
    dom.set_attribute(toggle, "aria-expanded", if open { "true" } else { "false" });
}

/// Clicking the nav toggle flips the menu open/closed.
pub fn init_menu_toggle<D: Dom>(dom: &D, config: &Rc<PageConfig>) -> Option<D::Listener> {
    let (Some(toggle), Some(nav)) = (
        dom.query(&config.selectors.nav_toggle),
        dom.query(&config.selectors.nav_menu),
    ) else {
        debug!("Menu toggle not wired: toggle or nav menu missing");
        return None;
    };

    let handler_dom = dom.clone();
    let handler_toggle = toggle.clone();
    let config = config.clone();
    Some(dom.listen(
        &toggle,
        "click",
        Box::new(move |_: &dyn DomEvent| {
            let open = !menu_is_open(&handler_dom, &nav, &config);
            commit_menu_open(&handler_dom, &handler_toggle, &nav, &config, open);
            debug!(open, "Menu toggled");
        }),
    ))
}

/// Following any nav link closes the mobile menu.
pub fn init_mobile_menu_close<D: Dom>(dom: &D, config: &Rc<PageConfig>) -> Vec<D::Listener> {
    let Some(nav) = dom.query(&config.selectors.nav_menu) else {
        debug!("Mobile menu close not wired: nav menu missing");
        return Vec::new();
    };

    dom.query_all(&config.selectors.nav_link)
        .into_iter()
        .map(|link| {
            let handler_dom = dom.clone();
            let nav = nav.clone();
            let config = config.clone();
            dom.listen(
                &link,
                "click",
                Box::new(move |_: &dyn DomEvent| {
                    handler_dom.remove_class(&nav, &config.classes.show_menu);
                }),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FakeDom;

    fn page() -> (FakeDom, Rc<PageConfig>) {
        let dom = FakeDom::new();
        let body = dom.body_element();
        dom.append(&body, "button#nav-toggle");
        let menu = dom.append(&body, "div#nav-menu");
        dom.append(&menu, "a.nav__link[href=\"#home\"]");
        dom.append(&menu, "a.nav__link[href=\"#about\"]");
        (dom, Rc::new(PageConfig::default()))
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let (dom, config) = page();
        let _listener = init_menu_toggle(&dom, &config).unwrap();
        let toggle = dom.query("#nav-toggle").unwrap();
        let nav = dom.query("#nav-menu").unwrap();

        dom.click(&toggle);
        assert!(menu_is_open(&dom, &nav, &config));
        assert_eq!(dom.attribute(&toggle, "aria-expanded").as_deref(), Some("true"));

        dom.click(&toggle);
        assert!(!menu_is_open(&dom, &nav, &config));
        assert_eq!(dom.attribute(&toggle, "aria-expanded").as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_skipped_without_nav_menu() {
        let dom = FakeDom::new();
        dom.append(&dom.body_element(), "button#nav-toggle");
        let config = Rc::new(PageConfig::default());

        assert!(init_menu_toggle(&dom, &config).is_none());
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn test_nav_link_click_closes_menu() {
        let (dom, config) = page();
        let listeners = init_mobile_menu_close(&dom, &config);
        assert_eq!(listeners.len(), 2);

        let nav = dom.query("#nav-menu").unwrap();
        let toggle = dom.query("#nav-toggle").unwrap();
        commit_menu_open(&dom, &toggle, &nav, &config, true);

        let about = dom.query("a[href*=\"about\"]").unwrap();
        dom.click(&about);
        assert!(!menu_is_open(&dom, &nav, &config));

        // Already closed: stays closed
        dom.click(&about);
        assert!(!menu_is_open(&dom, &nav, &config));
    }

    #[test]
    fn test_no_links_is_not_an_error() {
        let dom = FakeDom::new();
        dom.append(&dom.body_element(), "div#nav-menu");
        let config = Rc::new(PageConfig::default());

        assert!(init_mobile_menu_close(&dom, &config).is_empty());
    }
}
