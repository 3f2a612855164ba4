//! Single Responsibility Principle
//!
//! A type should have one reason to change.

pub mod bad;
pub mod good;

use std::fmt;

use crate::error::ScenarioResult;
use crate::narrative::Narrative;
use crate::registry::{Principle, Scenario, ScenarioKey, Variant};

/// A newly registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

pub fn scenarios() -> [Scenario; 2] {
    [
        Scenario::new(ScenarioKey::new(Principle::Srp, Variant::Bad), run_bad),
        Scenario::new(ScenarioKey::new(Principle::Srp, Variant::Good), run_good),
    ]
}

fn run_bad() -> ScenarioResult<Narrative> {
    let mut service = bad::BadUserService::default();
    let user = service.create_user("Alice", "alice@example.com").clone();

    Ok(Narrative::titled(ScenarioKey::new(Principle::Srp, Variant::Bad).title())
        .line("SRP says a class should have one reason to change.")
        .blank()
        .section(
            "Here BadUserService does everything itself:",
            [
                format!("Saves user {}", user),
                "Sends the welcome email".to_string(),
                "Writes the audit log".to_string(),
            ],
        )
        .blank()
        .section(
            "Problems:",
            [
                "Many reasons to change are inside one class (database, email, logging).",
                "A small change in any of these concerns forces this class to be edited.",
                "The class becomes hard to test and reuse because it mixes responsibilities.",
            ],
        ))
}

fn run_good() -> ScenarioResult<Narrative> {
    let mut service = good::UserService::new(
        Box::new(good::InMemoryUserRepository::default()),
        Box::new(good::ConsoleNotificationSender),
        Box::new(good::ConsoleAuditLogger),
    );
    let user = service.create_user("Bob", "bob@example.com");

    Ok(Narrative::titled(ScenarioKey::new(Principle::Srp, Variant::Good).title())
        .line("Each class has one clear reason to change.")
        .blank()
        .section(
            "UserService now coordinates collaborators instead of doing the work:",
            [
                format!("InMemoryUserRepository persists {}", user),
                "ConsoleNotificationSender sends the welcome notification".to_string(),
                "ConsoleAuditLogger records the audit entry".to_string(),
            ],
        )
        .blank()
        .section(
            "Benefits:",
            [
                "Changing persistence, email, or logging touches only that specific class.",
                "UserService stays small and focused on the use case.",
                "Testing is easier because each responsibility can be mocked or swapped independently.",
            ],
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_narrative_names_every_concern() {
        let text = run_bad().unwrap().to_string();
        assert!(text.starts_with("Single Responsibility Principle (SRP) – Bad example\n"));
        assert!(text.contains("- Saves user Alice <alice@example.com>"));
        assert!(text.contains("(database, email, logging)"));
    }

    #[test]
    fn test_good_narrative_lists_collaborators() {
        let text = run_good().unwrap().to_string();
        assert!(text.contains("- InMemoryUserRepository persists Bob <bob@example.com>"));
        assert!(text.contains("ConsoleNotificationSender"));
        assert!(text.contains("ConsoleAuditLogger"));
    }
}
