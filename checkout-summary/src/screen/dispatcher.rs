//! Action dispatch seam between the summary and the app store

use shared::order::SummaryAction;

/// Receiver for actions raised by the summary screen
///
/// The store, its reducers and whatever the actions trigger live behind
/// this trait.
pub trait SummaryDispatcher {
    fn dispatch(&self, action: SummaryAction);
}

impl<F> SummaryDispatcher for F
where
    F: Fn(SummaryAction),
{
    fn dispatch(&self, action: SummaryAction) {
        self(action)
    }
}

/// Dispatcher that only records actions in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingDispatcher;

impl SummaryDispatcher for LoggingDispatcher {
    fn dispatch(&self, action: SummaryAction) {
        tracing::info!(action = action.name(), ?action, "Summary action dispatched");
    }
}
