use crate::dom::Dom;
use folio_common::PageConfig;
use tracing::{info, warn};

/// Id of the optional `<script type="application/json">` element carrying
/// configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Page configuration from the JSON data island, or the defaults when there is
/// none. A malformed island is logged and ignored.
pub fn load_page_config<D: Dom>(dom: &D) -> PageConfig {
    let Some(island) = dom.query(&format!("#{CONFIG_ELEMENT_ID}")) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&dom.text(&island)) {
        Ok(config) => {
            info!("Loaded page configuration overrides");
            config
        }
        Err(e) => {
            warn!("Ignoring page configuration: {e}");
            PageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FakeDom;

    #[test]
    fn test_defaults_without_island() {
        assert_eq!(load_page_config(&FakeDom::new()), PageConfig::default());
    }

    #[test]
    fn test_island_overrides_are_applied() {
        let dom = FakeDom::new();
        let island = dom.append(&dom.body_element(), "script#folio-config[type=\"application/json\"]");
        dom.set_text(&island, r#"{"labels": {"see_more": "Ver más", "see_less": "Ver menos"}}"#);

        let config = load_page_config(&dom);
        assert_eq!(config.labels.see_more, "Ver más");
        assert_eq!(config.selectors, PageConfig::default().selectors);
    }

    #[test]
    fn test_malformed_island_falls_back_to_defaults() {
        let dom = FakeDom::new();
        let island = dom.append(&dom.body_element(), "script#folio-config");
        dom.set_text(&island, "{ not json");

        assert_eq!(load_page_config(&dom), PageConfig::default());
    }
}
