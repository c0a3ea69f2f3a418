use crate::core::layout::render_page;
use crate::core::postscript::{encode_page, DocumentInfo};
use crate::domain::model::{FontSpec, JobReceipt, PageGeometry, Payload, PrintJob};
use crate::domain::ports::PrintService;
use crate::utils::error::Result;
use chrono::Utc;

/// Renders a payload onto one page and hands it to the print service.
pub struct PrintDispatcher<S: PrintService> {
    service: S,
    page: PageGeometry,
    font: FontSpec,
    title: String,
}

impl<S: PrintService> PrintDispatcher<S> {
    pub fn new(service: S, page: PageGeometry, font: FontSpec) -> Self {
        Self {
            service,
            page,
            font,
            title: "strip-printer".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn render_titled(&self, payload: &Payload, title: &str) -> PrintJob {
        let bounds = self.page.margin_bounds();
        let commands = render_page(&bounds, &self.font, payload.as_str());
        tracing::debug!(
            "Rendered {} draw commands into {}x{}pt margin bounds",
            commands.len(),
            bounds.width,
            bounds.height
        );

        let document = encode_page(
            &DocumentInfo {
                title,
                page: &self.page,
                created: Utc::now(),
            },
            &commands,
        );

        PrintJob {
            title: title.to_string(),
            document,
        }
    }

    pub fn dispatch(&self, payload: &Payload) -> Result<JobReceipt> {
        self.dispatch_titled(payload, &self.title)
    }

    /// Like [`dispatch`](Self::dispatch) but with a per-job title.
    pub fn dispatch_titled(&self, payload: &Payload, title: &str) -> Result<JobReceipt> {
        let job = self.render_titled(payload, title);
        tracing::info!("Submitting print job '{}'", job.title);

        let receipt = self.service.submit(&job)?;
        match &receipt.job_id {
            Some(id) => tracing::info!("Print job queued as {}", id),
            None => tracing::info!("Print job queued"),
        }
        Ok(receipt)
    }
}
