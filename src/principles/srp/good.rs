//! Each concern behind its own capability, coordinated by `UserService`.

use tracing::debug;

use super::User;

pub trait UserRepository {
    fn save(&mut self, user: &User);
}

pub trait NotificationSender {
    fn send_welcome(&mut self, user: &User);
}

pub trait AuditLogger {
    fn log_user_created(&mut self, user: &User);
}

/// Process-local storage, fresh for every service that owns it
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&mut self, user: &User) {
        self.users.push(user.clone());
    }
}

#[derive(Debug, Default)]
pub struct ConsoleNotificationSender;

impl NotificationSender for ConsoleNotificationSender {
    fn send_welcome(&mut self, user: &User) {
        debug!(to = %user.email, "Welcome, {}!", user.name);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleAuditLogger;

impl AuditLogger for ConsoleAuditLogger {
    fn log_user_created(&mut self, user: &User) {
        debug!("User created: {}, {}", user.name, user.email);
    }
}

pub struct UserService {
    repository: Box<dyn UserRepository>,
    notifications: Box<dyn NotificationSender>,
    audit: Box<dyn AuditLogger>,
}

impl UserService {
    pub fn new(
        repository: Box<dyn UserRepository>,
        notifications: Box<dyn NotificationSender>,
        audit: Box<dyn AuditLogger>,
    ) -> Self {
        Self {
            repository,
            notifications,
            audit,
        }
    }

    /// Save, then notify, then audit
    pub fn create_user(&mut self, name: &str, email: &str) -> User {
        let user = User::new(name, email);
        self.repository.save(&user);
        self.notifications.send_welcome(&user);
        self.audit.log_user_created(&user);
        user
    }
}
