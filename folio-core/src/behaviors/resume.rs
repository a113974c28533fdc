use crate::dom::{Dom, DomEvent};
use crate::time::sleep_ms;
use folio_common::PageConfig;
use futures::future::{AbortHandle, Abortable};
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Drives the scale-print-restore sequence behind the resume button.
///
/// At most one sequence is pending: starting a new one aborts the previous
/// sequence wherever it is suspended, so two restores never race.
pub struct ResumePrinter<D: Dom> {
    dom: D,
    body: D::Element,
    config: Rc<PageConfig>,
    pending: RefCell<Option<AbortHandle>>,
}

impl<D: Dom> ResumePrinter<D> {
    pub fn new(dom: D, body: D::Element, config: Rc<PageConfig>) -> Self {
        Self {
            dom,
            body,
            config,
            pending: RefCell::new(None),
        }
    }

    pub fn is_scaled(&self) -> bool {
        self.dom.has_class(&self.body, &self.config.classes.scale_cv)
    }

    /// Scale the page now, print after a short delay, then restore.
    pub fn start(&self) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            debug!("Aborting pending resume print sequence");
            previous.abort();
        }

        let original_title = self.dom.title();
        self.dom.add_class(&self.body, &self.config.classes.scale_cv);

        let dom = self.dom.clone();
        let body = self.body.clone();
        let config = self.config.clone();
        let sequence = async move {
            sleep_ms(config.print.print_delay_ms).await;
            info!("Opening print dialog for resume");
            dom.print();

            sleep_ms(config.print.restore_delay_ms).await;
            dom.set_title(&original_title);
            dom.remove_class(&body, &config.classes.scale_cv);
            debug!("Resume print sequence finished");
        };

        let (handle, registration) = AbortHandle::new_pair();
        *self.pending.borrow_mut() = Some(handle);
        self.dom.spawn_local(
            Abortable::new(sequence, registration)
                .map(|_| ())
                .boxed_local(),
        );
    }
}

/// Print-to-PDF for the resume. Skipped unless both the resume area and the
/// download button exist.
pub fn init_pdf_generator<D: Dom>(dom: &D, config: &Rc<PageConfig>) -> Option<D::Listener> {
    let (Some(_area), Some(button)) = (
        dom.query(&config.selectors.resume_area),
        dom.query(&config.selectors.resume_button),
    ) else {
        debug!("Resume printing not wired: resume area or button missing");
        return None;
    };
    let Some(body) = dom.body() else {
        debug!("Resume printing not wired: document has no body");
        return None;
    };

    let printer = ResumePrinter::new(dom.clone(), body, config.clone());
    Some(dom.listen(
        &button,
        "click",
        Box::new(move |_: &dyn DomEvent| printer.start()),
    ))
}
