use folio_core::test_helpers::{FakeDom, FakeElement};
use folio_core::Dom;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Handles to the interesting parts of [`portfolio_page`]
#[allow(dead_code)]
pub struct PortfolioPage {
    pub dom: FakeDom,
    pub nav_toggle: FakeElement,
    pub nav_menu: FakeElement,
    pub theme_button: FakeElement,
    pub skills_button: FakeElement,
    pub skills_section: FakeElement,
    pub scroll_top: FakeElement,
    pub resume_button: FakeElement,
}

/// The full portfolio markup, laid out as stacked sections:
/// home [0, 700), about [700, 1500), skills [1500, 2300), contact [2300, 2800).
pub fn portfolio_page() -> PortfolioPage {
    let dom = FakeDom::new();
    let body = dom.body_element();
    dom.set_title("Erick Alpizar | Portfolio");

    let header = dom.append(&body, "header#header");
    let nav = dom.append(&header, "nav.nav");
    let nav_menu = dom.append(&nav, "div#nav-menu.nav__menu");
    let list = dom.append(&nav_menu, "ul.nav__list");
    for target in ["home", "about", "skills", "contact"] {
        let item = dom.append(&list, "li.nav__item");
        dom.append(&item, &format!("a.nav__link[href=\"#{target}\"]"));
    }
    let theme_button = dom.append(&nav, "i#theme-button.bx.bx-moon.change-theme");
    let nav_toggle = dom.append(&nav, "div#nav-toggle.nav__toggle[aria-expanded=\"false\"]");

    let main = dom.append(&body, "main#area-cv.l-main");
    let geometry = [
        ("home", 0.0, 649.0),
        ("about", 700.0, 749.0),
        ("skills", 1500.0, 749.0),
        ("contact", 2300.0, 500.0),
    ];
    let mut skills_section = None;
    for (id, top, height) in geometry {
        let description = if id == "skills" {
            format!("section#{id}.section.hide")
        } else {
            format!("section#{id}.section")
        };
        let section = dom.append(&main, &description);
        dom.set_geometry(&section, top, height);
        if id == "skills" {
            skills_section = Some(section);
        }
    }
    let skills_section = skills_section.expect("skills section in fixture");
    let skills_list = dom.append(&skills_section, "div.skills__content");
    for _ in 0..4 {
        dom.append(&skills_list, "span.skills__name");
    }
    for _ in 0..4 {
        dom.append(&skills_list, "span.skills__name.showmore.hide");
    }
    let skills_button = dom.append(&skills_section, "a#skills-button.button[href=\"#\"]");
    dom.set_text(&skills_button, "See More");
    let resume_button = dom.append(&main, "a#resume-button.button");

    let scroll_top = dom.append(&body, "a#scroll-top.scrolltop[href=\"#\"]");

    PortfolioPage {
        dom,
        nav_toggle,
        nav_menu,
        theme_button,
        skills_button,
        skills_section,
        scroll_top,
        resume_button,
    }
}
