//! Dependency Inversion Principle
//!
//! High-level policy depends on abstractions, not on concrete transports.

pub mod bad;
pub mod good;

use tracing::debug;

use crate::error::ScenarioResult;
use crate::narrative::Narrative;
use crate::registry::{Principle, Scenario, ScenarioKey, Variant};

pub const RESET_SUBJECT: &str = "Password reset";
pub const RESET_BODY: &str = "Reset link";

const DEFAULT_RELAY: &str = "smtp.example.com";
const SENDER_ADDRESS: &str = "no-reply@example.com";

/// Low-level SMTP transport. Nothing leaves the process; the dialogue it
/// would have with the relay is kept as a transcript.
#[derive(Debug, Clone)]
pub struct SmtpEmailSender {
    relay: String,
    transcript: Vec<String>,
}

impl SmtpEmailSender {
    pub fn new(relay: impl Into<String>) -> Self {
        Self {
            relay: relay.into(),
            transcript: Vec::new(),
        }
    }

    pub fn relay(&self) -> &str {
        &self.relay
    }

    pub fn deliver(&mut self, address: &str, subject: &str, body: &str) {
        debug!(relay = %self.relay, to = %address, subject, "Sending email over SMTP");
        self.transcript.extend([
            format!("MAIL FROM:<{}>", SENDER_ADDRESS),
            format!("RCPT TO:<{}>", address),
            "DATA".to_string(),
            format!("Subject: {}", subject),
            String::new(),
            body.to_string(),
            ".".to_string(),
        ]);
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Default for SmtpEmailSender {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY)
    }
}

pub fn scenarios() -> [Scenario; 2] {
    [
        Scenario::new(ScenarioKey::new(Principle::Dip, Variant::Bad), run_bad),
        Scenario::new(ScenarioKey::new(Principle::Dip, Variant::Good), run_good),
    ]
}

fn run_bad() -> ScenarioResult<Narrative> {
    bad::PasswordResetService.reset_password("user@example.com");

    Ok(Narrative::titled(ScenarioKey::new(Principle::Dip, Variant::Bad).title())
        .line("DIP says high-level modules should depend on abstractions, not concretions.")
        .blank()
        .section(
            "Here PasswordResetService creates SmtpEmailSender inside the method:",
            ["PasswordResetService.resetPassword(\"user@example.com\")"],
        )
        .blank()
        .section(
            "Problems:",
            [
                "The service is tightly coupled to the SMTP implementation.",
                "Swapping email mechanisms requires changing PasswordResetService.",
                "Testing is harder because the real SMTP sender is always used.",
            ],
        ))
}

fn run_good() -> ScenarioResult<Narrative> {
    let mut service = good::PasswordResetService::new(Box::new(SmtpEmailSender::default()));
    service.reset_password("user@example.com");

    Ok(Narrative::titled(ScenarioKey::new(Principle::Dip, Variant::Good).title())
        .line("PasswordResetService depends on the EmailSender abstraction instead of a concrete class.")
        .blank()
        .section(
            "Operation:",
            [
                "EmailSender sender = SmtpEmailSender::default()",
                "PasswordResetService service = PasswordResetService::new(sender)",
                "service.resetPassword(\"user@example.com\")",
            ],
        )
        .blank()
        .section(
            "Benefits:",
            [
                "The high-level service only knows the EmailSender abstraction.",
                "Different implementations (SMTP, mock, API-based) can be injected without changing the service.",
                "The code is easier to test and adapt to new infrastructure.",
            ],
        ))
}
