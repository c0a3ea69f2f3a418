use crate::domain::model::{JobReceipt, PrintJob};
use crate::utils::error::Result;

/// The host's print service. Accepts one rendered page and reports whether it
/// was queued.
pub trait PrintService {
    fn submit(&self, job: &PrintJob) -> Result<JobReceipt>;
}

impl<S: PrintService + ?Sized> PrintService for &S {
    fn submit(&self, job: &PrintJob) -> Result<JobReceipt> {
        (**self).submit(job)
    }
}
