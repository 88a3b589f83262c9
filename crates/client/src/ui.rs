//! Seams toward the UI shell: notifications and navigation.
//!
//! Both collaborators are fire-and-forget from the store's point of view:
//! nothing is awaited and no return value is consumed.

/// Fire-and-forget toast display.
pub trait Notifier: Send + Sync {
    /// Show a success message (e.g., "Added to cart").
    fn success(&self, message: &str);

    /// Show an informational message (e.g., "Please login first!").
    fn info(&self, message: &str);

    /// Show a failure message.
    fn error(&self, message: &str);
}

/// Imperative navigation, supplied by the router.
pub trait Navigator: Send + Sync {
    /// The route the user is currently on.
    fn current_location(&self) -> String;

    /// Redirect to the login route, carrying the originating location so the
    /// router can return there after login.
    fn redirect_to_login(&self, from: &str);
}

/// [`Notifier`] that routes messages to the `tracing` log.
///
/// Useful as a default in headless contexts and tests; real front ends plug
/// in their toast component instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(kind = "info", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(kind = "error", "{message}");
    }
}
