use clip_core::ports::{NotifierPort, Toast, ToastKind};
use tracing::{info, warn};

/// Surfaces toasts as log events on the `clipify::toast` target.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotifierPort for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success | ToastKind::Info => {
                info!(target: "clipify::toast", kind = ?toast.kind, "{}", toast.message)
            }
            ToastKind::Error => warn!(target: "clipify::toast", "{}", toast.message),
        }
    }
}
