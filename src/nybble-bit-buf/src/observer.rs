use crate::{Extraction, Field};

/// A hook notified after every successful extraction of a reader.
///
/// Observers are the place for diagnostics; extraction itself
/// never logs. Any `FnMut(&Extraction, &Field)` closure is an
/// observer.
pub trait ExtractObserver {
    /// Called with the coordinates and the result of a read.
    fn on_extract(&mut self, plan: &Extraction, field: &Field);
}

/// An observer which does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ExtractObserver for NoopObserver {
    #[inline(always)]
    fn on_extract(&mut self, _plan: &Extraction, _field: &Field) {}
}

/// An observer which traces every extraction through [`log`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl ExtractObserver for LogObserver {
    fn on_extract(&mut self, plan: &Extraction, field: &Field) {
        log::trace!(
            "read {} bits at {}: bytes {}..={}, bits {}..{}, split {}+{} -> {:#010b}",
            plan.nbits,
            plan.pos,
            plan.byte_first,
            plan.byte_last,
            plan.local_start,
            plan.local_end,
            plan.count_first,
            plan.count_second,
            field.value,
        );
    }
}

impl<F> ExtractObserver for F
where
    F: FnMut(&Extraction, &Field),
{
    #[inline]
    fn on_extract(&mut self, plan: &Extraction, field: &Field) {
        self(plan, field)
    }
}
