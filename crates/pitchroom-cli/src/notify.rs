//! Intake notifications.
//!
//! Mail delivery is an external collaborator; the default notifier writes
//! the message to the log and always succeeds, so a broken mail hookup can
//! never block intake.

use pitchroom_domain::traits::Notifier;
use tracing::info;

/// Notifier that logs instead of sending.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    type Error = std::convert::Infallible;

    fn notify(&self, subject: &str, body: &str) -> Result<(), Self::Error> {
        info!(subject, body, "notification");
        Ok(())
    }
}
