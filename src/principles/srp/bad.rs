use tracing::debug;

use super::User;

/// Persists, notifies and audits from one method.
#[derive(Debug, Default)]
pub struct BadUserService {
    users: Vec<User>,
    sent_emails: Vec<String>,
    audit_entries: Vec<String>,
}

impl BadUserService {
    pub fn create_user(&mut self, name: &str, email: &str) -> &User {
        let user = User::new(name, email);

        // persistence
        self.users.push(user.clone());

        // notification
        debug!(to = %user.email, "Sending welcome email");
        self.sent_emails
            .push(format!("To: {}\nSubject: Welcome\n\nWelcome, {}!", user.email, user.name));

        // audit
        let entry = format!("User created: {}, {}", user.name, user.email);
        debug!("{}", entry);
        self.audit_entries.push(entry);

        &self.users[self.users.len() - 1]
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn sent_emails(&self) -> &[String] {
        &self.sent_emails
    }

    pub fn audit_entries(&self) -> &[String] {
        &self.audit_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_call_touches_all_three_concerns() {
        let mut service = BadUserService::default();
        let user = service.create_user("Alice", "alice@example.com").clone();

        assert_eq!(user, User::new("Alice", "alice@example.com"));
        assert_eq!(service.users().len(), 1);
        assert_eq!(service.sent_emails().len(), 1);
        assert!(service.sent_emails()[0].starts_with("To: alice@example.com"));
        assert_eq!(service.audit_entries(), ["User created: Alice, alice@example.com"]);
    }
}
