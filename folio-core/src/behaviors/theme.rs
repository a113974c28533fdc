use crate::dom::{Dom, DomEvent};
use crate::storage::{PreferenceStore, StorageError};
use folio_common::{PageConfig, ThemeMarkers};
use std::rc::Rc;
use tracing::{debug, warn};

/// Current theme markers, read from the page.
pub fn read_theme<D: Dom>(
    dom: &D,
    root: &D::Element,
    button: &D::Element,
    config: &PageConfig,
) -> ThemeMarkers {
    ThemeMarkers {
        dark: dom.has_class(root, &config.classes.dark_theme),
        alt_icon: dom.has_class(button, &config.classes.icon_theme),
    }
}

pub fn commit_theme<D: Dom>(
    dom: &D,
    root: &D::Element,
    button: &D::Element,
    config: &PageConfig,
    markers: ThemeMarkers,
) {
    dom.set_class(root, &config.classes.dark_theme, markers.dark);
    dom.set_class(button, &config.classes.icon_theme, markers.alt_icon);
}

/// Read the stored theme/icon pair. `None` when no theme has been stored.
pub fn load_theme<S: PreferenceStore>(
    store: &S,
    config: &PageConfig,
) -> Result<Option<ThemeMarkers>, StorageError> {
    let theme = store.get(&config.storage_keys.theme)?;
    let icon = store.get(&config.storage_keys.icon)?;
    Ok(ThemeMarkers::from_stored(
        theme.as_deref(),
        icon.as_deref(),
        &config.icons,
    ))
}

/// Persist `markers`, theme first, then icon.
pub fn save_theme<S: PreferenceStore>(
    store: &S,
    config: &PageConfig,
    markers: ThemeMarkers,
) -> Result<(), StorageError> {
    store.set(&config.storage_keys.theme, markers.theme().as_str())?;
    store.set(&config.storage_keys.icon, markers.icon_id(&config.icons))?;
    Ok(())
}

/// Apply the stored theme right away, then flip and persist it on every click
/// of the theme button.
pub fn init_theme_toggle<D: Dom, S: PreferenceStore>(
    dom: &D,
    store: Rc<S>,
    config: &Rc<PageConfig>,
) -> Option<D::Listener> {
    let Some(button) = dom.query(&config.selectors.theme_button) else {
        debug!("Theme toggle not wired: theme button missing");
        return None;
    };
    let Some(root) = dom.body() else {
        debug!("Theme toggle not wired: document has no body");
        return None;
    };

    match load_theme(store.as_ref(), config) {
        Ok(Some(markers)) => {
            debug!(theme = markers.theme().as_str(), "Applying stored theme");
            commit_theme(dom, &root, &button, config, markers);
        }
        Ok(None) => {}
        Err(e) => warn!("Could not read stored theme: {e}"),
    }

    let handler_dom = dom.clone();
    let handler_button = button.clone();
    let config = config.clone();
    Some(dom.listen(
        &button,
        "click",
        Box::new(move |_: &dyn DomEvent| {
            handler_dom.toggle_class(&root, &config.classes.dark_theme);
            handler_dom.toggle_class(&handler_button, &config.classes.icon_theme);

            // Persist what the page shows now, after the flip.
            let markers = read_theme(&handler_dom, &root, &handler_button, &config);
            debug!(theme = markers.theme().as_str(), "Theme toggled");
            if let Err(e) = save_theme(store.as_ref(), &config, markers) {
                warn!("Could not persist theme: {e}");
            }
        }),
    ))
}
