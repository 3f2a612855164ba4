use super::{SmtpEmailSender, RESET_BODY, RESET_SUBJECT};

/// Builds its own SMTP transport, so there is no seam to substitute one.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordResetService;

impl PasswordResetService {
    pub fn reset_password(&self, email: &str) {
        let mut sender = SmtpEmailSender::default();
        sender.deliver(email, RESET_SUBJECT, RESET_BODY);
    }
}
