use shared_types::{AppError, Notice, NoticeKind};
use shared_ui::{ToastOptions, Toasts};

/// Show a notice as an in-app toast.
pub fn show(toast: Toasts, notice: &Notice) {
    let message = notice.message.clone();
    match notice.kind {
        NoticeKind::Success => toast.success(message, ToastOptions::new()),
        NoticeKind::Info => toast.info(message, ToastOptions::new()),
        NoticeKind::Error => toast.error(message, ToastOptions::new()),
    }
}

pub fn success(toast: Toasts, message: impl Into<String>) {
    show(toast, &Notice::success(message));
}

pub fn info(toast: Toasts, message: impl Into<String>) {
    show(toast, &Notice::info(message));
}

/// Toast for a failed workflow action. Validation failures use the summary
/// message since the field messages are shown inline.
pub fn failure(toast: Toasts, err: &AppError) {
    tracing::debug!(error = %err, "action rejected");
    show(toast, &Notice::error(err.message.clone()));
}
