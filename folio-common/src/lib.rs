pub mod config;
pub mod scroll;
pub mod theme;

pub use config::{
    CanvasOptions, ClassNames, ConfigError, IconIds, Labels, PageConfig, PageLayout,
    PdfImageOptions, PdfOptions, PrintTiming, ScrollSettings, Selectors, StorageKeys,
};
pub use scroll::{scroll_top_visible, SectionBounds};
pub use theme::{Theme, ThemeMarkers};
