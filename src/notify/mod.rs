/// Sink for user-facing failure notifications and session redirects.
///
/// The request wrapper reports every normalized failure here before
/// re-raising it; host applications plug their UI toast/router in at this
/// seam. The default sink reports through `tracing`.
pub trait Notifier: Send + Sync {
    /// Shows a user-visible error message.
    fn error(&self, message: &str);

    /// Sends the user back to the login screen after the session was cleared.
    fn redirect_to_login(&self);
}

/// Notifier that reports through the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn redirect_to_login(&self) {
        tracing::warn!("session expired, redirecting to login");
    }
}
