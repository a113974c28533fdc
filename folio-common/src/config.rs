use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the page behaviors need to know about the markup and the store.
///
/// Every field has a default matching the portfolio markup, so a host only has to
/// supply the parts it renames. Handed to the behaviors behind an `Rc` and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: ClassNames,
    pub storage_keys: StorageKeys,
    pub icons: IconIds,
    pub labels: Labels,
    pub scroll: ScrollSettings,
    pub print: PrintTiming,
    /// Options for a client-side PDF renderer. Nothing reads these today; printing goes
    /// through the browser dialog.
    pub pdf: PdfOptions,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// CSS selectors for the elements each behavior binds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub section_with_id: String,
    pub scroll_top: String,
    pub theme_button: String,
    pub skills_button: String,
    pub skills_section: String,
    pub skills_items: String,
    pub resume_button: String,
    pub resume_area: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: "#nav-toggle".to_string(),
            nav_menu: "#nav-menu".to_string(),
            nav_link: ".nav__link".to_string(),
            section_with_id: "section[id]".to_string(),
            scroll_top: "#scroll-top".to_string(),
            theme_button: "#theme-button".to_string(),
            skills_button: "#skills-button".to_string(),
            skills_section: "#skills".to_string(),
            skills_items: ".skills__name.showmore".to_string(),
            resume_button: "#resume-button".to_string(),
            resume_area: "#area-cv".to_string(),
        }
    }
}

impl Selectors {
    /// Selector for the nav link whose `href` mentions `section_id`.
    pub fn nav_link_for(&self, section_id: &str) -> String {
        format!("{} a[href*=\"{}\"]", self.nav_menu, section_id)
    }
}

/// Marker classes. Each one is a boolean flag on some node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub show_menu: String,
    pub active_link: String,
    pub show_scroll: String,
    pub dark_theme: String,
    /// Set on the theme button while the alternate (moon) icon is showing
    pub icon_theme: String,
    pub show: String,
    pub hide: String,
    pub scale_cv: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            show_menu: "show-menu".to_string(),
            active_link: "active-link".to_string(),
            show_scroll: "show-scroll".to_string(),
            dark_theme: "dark-theme".to_string(),
            icon_theme: "bx-sun".to_string(),
            show: "show".to_string(),
            hide: "hide".to_string(),
            scale_cv: "scale-cv".to_string(),
        }
    }
}

/// Keys of the two persisted theme strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub icon: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "selected-theme".to_string(),
            icon: "selected-icon".to_string(),
        }
    }
}

/// Icon identifiers written next to the theme. `dark` pairs with the dark theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconIds {
    pub dark: String,
    pub light: String,
}

impl Default for IconIds {
    fn default() -> Self {
        Self {
            dark: "bx-moon".to_string(),
            light: "bx-sun".to_string(),
        }
    }
}

/// Button labels for the skills toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub see_more: String,
    pub see_less: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            see_more: "See More".to_string(),
            see_less: "See Less".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Pixels subtracted from a section's top before the scroll-spy range check
    pub spy_offset: f64,
    /// Scroll offset at which the scroll-to-top control appears
    pub scroll_top_threshold: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            spy_offset: 50.0,
            scroll_top_threshold: 200.0,
        }
    }
}

/// Delays of the resume print sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintTiming {
    /// Wait after adding the scale class so the layout picks it up
    pub print_delay_ms: u64,
    /// Wait after the print call before restoring the page
    pub restore_delay_ms: u64,
}

impl Default for PrintTiming {
    fn default() -> Self {
        Self {
            print_delay_ms: 100,
            restore_delay_ms: 1000,
        }
    }
}

/// html2pdf-style option bundle, serialized in the shape that library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub margin: f64,
    pub filename: String,
    pub image: PdfImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub js_pdf: PageLayout,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin: 1.0,
            filename: "Curriculum Erick Alpizar".to_string(),
            image: PdfImageOptions::default(),
            html2canvas: CanvasOptions::default(),
            js_pdf: PageLayout::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfImageOptions {
    #[serde(rename = "type")]
    pub format: String,
    pub quality: f64,
}

impl Default for PdfImageOptions {
    fn default() -> Self {
        Self {
            format: "jpeg".to_string(),
            quality: 0.98,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    pub scale: f64,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self { scale: 4.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub format: String,
    pub orientation: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            format: "a4".to_string(),
            orientation: "portrait".to_string(),
        }
    }
}
