#![cfg(feature = "test-utils")]
mod support;
use crate::support::{portfolio_page, tracing_init};
use folio_common::PageConfig;
use folio_core::test_helpers::MemoryStore;
use folio_core::{install, Dom};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_resume_click_prints_and_restores() {
    tracing_init();
    LocalSet::new()
        .run_until(async {
            let page = portfolio_page();
            let _behaviors = install(&page.dom, MemoryStore::new(), Rc::new(PageConfig::default()));
            let body = page.dom.body_element();

            page.dom.click(&page.resume_button);
            assert!(page.dom.has_class(&body, "scale-cv"));

            sleep(Duration::from_millis(120)).await;
            assert_eq!(page.dom.print_count(), 1);
            assert!(page.dom.has_class(&body, "scale-cv"));

            sleep(Duration::from_millis(1000)).await;
            assert!(!page.dom.has_class(&body, "scale-cv"));
            assert_eq!(page.dom.title(), "Erick Alpizar | Portfolio");
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_custom_print_timing() {
    tracing_init();
    LocalSet::new()
        .run_until(async {
            let config = PageConfig::from_json(
                r#"{"print": {"print_delay_ms": 10, "restore_delay_ms": 20}}"#,
            )
            .unwrap();
            let page = portfolio_page();
            let _behaviors = install(&page.dom, MemoryStore::new(), Rc::new(config));
            let body = page.dom.body_element();

            page.dom.click(&page.resume_button);
            sleep(Duration::from_millis(15)).await;
            assert_eq!(page.dom.print_count(), 1);
            sleep(Duration::from_millis(20)).await;
            assert!(!page.dom.has_class(&body, "scale-cv"));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_rapid_clicks_leave_one_sequence() {
    tracing_init();
    LocalSet::new()
        .run_until(async {
            let page = portfolio_page();
            let _behaviors = install(&page.dom, MemoryStore::new(), Rc::new(PageConfig::default()));
            let body = page.dom.body_element();

            for _ in 0..5 {
                page.dom.click(&page.resume_button);
                sleep(Duration::from_millis(20)).await;
            }
            // Last click at 80ms prints at 180ms and restores at 1180ms
            sleep(Duration::from_millis(1000)).await;
            assert_eq!(page.dom.print_count(), 1);
            assert!(page.dom.has_class(&body, "scale-cv"));

            sleep(Duration::from_millis(200)).await;
            assert!(!page.dom.has_class(&body, "scale-cv"));
        })
        .await;
}
