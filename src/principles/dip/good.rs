//! The reset flow talks to an injected `EmailSender` and nothing else.

use super::{SmtpEmailSender, RESET_BODY, RESET_SUBJECT};

pub trait EmailSender {
    fn send_email(&mut self, address: &str, subject: &str, body: &str);
}

impl EmailSender for SmtpEmailSender {
    fn send_email(&mut self, address: &str, subject: &str, body: &str) {
        self.deliver(address, subject, body);
    }
}

pub struct PasswordResetService {
    sender: Box<dyn EmailSender>,
}

impl PasswordResetService {
    pub fn new(sender: Box<dyn EmailSender>) -> Self {
        Self { sender }
    }

    pub fn reset_password(&mut self, email: &str) {
        self.sender.send_email(email, RESET_SUBJECT, RESET_BODY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Outbox(Rc<RefCell<Vec<(String, String)>>>);

    impl EmailSender for Outbox {
        fn send_email(&mut self, address: &str, subject: &str, _body: &str) {
            self.0.borrow_mut().push((address.to_string(), subject.to_string()));
        }
    }

    #[derive(Default, Clone)]
    struct SmsBridge(Rc<RefCell<Vec<String>>>);

    impl EmailSender for SmsBridge {
        fn send_email(&mut self, address: &str, _subject: &str, body: &str) {
            self.0.borrow_mut().push(format!("SMS to {}: {}", address, body));
        }
    }

    #[test]
    fn test_same_service_different_senders() {
        let outbox = Outbox::default();
        let sms = SmsBridge::default();

        PasswordResetService::new(Box::new(outbox.clone())).reset_password("a@example.com");
        PasswordResetService::new(Box::new(sms.clone())).reset_password("b@example.com");

        assert_eq!(
            *outbox.0.borrow(),
            vec![("a@example.com".to_string(), "Password reset".to_string())]
        );
        assert_eq!(*sms.0.borrow(), vec!["SMS to b@example.com: Reset link".to_string()]);
    }

    #[test]
    fn test_each_reset_sends_one_message() {
        let outbox = Outbox::default();
        let mut service = PasswordResetService::new(Box::new(outbox.clone()));

        service.reset_password("a@example.com");
        service.reset_password("a@example.com");

        assert_eq!(outbox.0.borrow().len(), 2);
    }
}
