//! Registry-level checks across all ten demonstrations.

use solid_showcase::principles::{dip, isp, lsp, ocp};
use solid_showcase::{Principle, ScenarioError, ScenarioKey, ScenarioRegistry, Variant};

#[test]
fn test_every_key_produces_a_narrative() {
    let registry = ScenarioRegistry::standard();

    for key in ScenarioKey::all() {
        let narrative = registry.run(key).expect("registered scenario");
        let text = narrative.to_string();

        assert!(!text.trim().is_empty(), "{} produced nothing", key);
        assert!(text.starts_with(&key.title()), "{} has the wrong heading", key);
    }
}

#[test]
fn test_runs_are_deterministic() {
    let registry = ScenarioRegistry::standard();

    for key in ScenarioKey::all() {
        assert_eq!(registry.run(key).unwrap(), registry.run(key).unwrap());
    }
}

#[test]
fn test_bad_variants_fail_where_expected() {
    use isp::bad::Worker;
    use lsp::bad::Document;

    let mut document = lsp::bad::ReadOnlyDocument::default();
    assert!(document.set_content("New content".to_string()).is_err());
    assert!(isp::bad::RobotWorker.eat().is_err());

    let registry = ScenarioRegistry::standard();
    let lsp_bad = registry.run(ScenarioKey::new(Principle::Lsp, Variant::Bad)).unwrap().to_string();
    let isp_bad = registry.run(ScenarioKey::new(Principle::Isp, Variant::Bad)).unwrap().to_string();
    assert!(lsp_bad.contains("UnsupportedOperation"));
    assert!(isp_bad.contains("UnsupportedOperation"));
}

#[test]
fn test_discount_figures() {
    use ocp::bad::{CustomerType, DiscountCalculator};
    use ocp::good::{OrderPriceCalculator, PremiumDiscountPolicy, StandardDiscountPolicy, VipDiscountPolicy};

    assert_eq!(OrderPriceCalculator::new(Box::new(PremiumDiscountPolicy)).calculate_price(100.0), 90.0);
    assert_eq!(OrderPriceCalculator::new(Box::new(StandardDiscountPolicy)).calculate_price(100.0), 95.0);
    assert_eq!(OrderPriceCalculator::new(Box::new(VipDiscountPolicy)).calculate_price(100.0), 85.0);

    assert_eq!(DiscountCalculator.calculate_discount(CustomerType::Premium, 100.0), 10.0);
    assert_eq!(DiscountCalculator.calculate_discount(CustomerType::Standard, 100.0), 5.0);
    assert_eq!(DiscountCalculator.calculate_discount(None, 100.0), 0.0);
}

#[test]
fn test_injected_sender_is_the_only_transport() {
    use dip::good::{EmailSender, PasswordResetService};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl EmailSender for Recorder {
        fn send_email(&mut self, address: &str, subject: &str, _body: &str) {
            self.0.borrow_mut().push(format!("{} -> {}", subject, address));
        }
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut service = PasswordResetService::new(Box::new(Recorder(log.clone())));
    service.reset_password("user@example.com");

    assert_eq!(*log.borrow(), vec!["Password reset -> user@example.com".to_string()]);
}

#[test]
fn test_unknown_lookup() {
    let registry = ScenarioRegistry::standard();

    assert!(matches!(
        registry.resolve("kiss", "good"),
        Err(ScenarioError::UnknownScenario(_))
    ));
    assert!(matches!(
        registry.resolve("dip", "worse"),
        Err(ScenarioError::UnknownScenario(_))
    ));
}
