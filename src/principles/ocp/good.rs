//! Discounts as pluggable policies. A new customer type is a new
//! `DiscountPolicy`, never an edit to `OrderPriceCalculator`.

pub trait DiscountPolicy {
    /// Short type name shown in narratives
    fn name(&self) -> &'static str;

    /// Discount amount to subtract from `price`
    fn apply_discount(&self, price: f64) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDiscountPolicy;

impl DiscountPolicy for StandardDiscountPolicy {
    fn name(&self) -> &'static str {
        "StandardDiscountPolicy"
    }

    fn apply_discount(&self, price: f64) -> f64 {
        price * 0.05
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PremiumDiscountPolicy;

impl DiscountPolicy for PremiumDiscountPolicy {
    fn name(&self) -> &'static str {
        "PremiumDiscountPolicy"
    }

    fn apply_discount(&self, price: f64) -> f64 {
        price * 0.10
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VipDiscountPolicy;

impl DiscountPolicy for VipDiscountPolicy {
    fn name(&self) -> &'static str {
        "VipDiscountPolicy"
    }

    fn apply_discount(&self, price: f64) -> f64 {
        price * 0.15
    }
}

pub struct OrderPriceCalculator {
    policy: Box<dyn DiscountPolicy>,
}

impl OrderPriceCalculator {
    pub fn new(policy: Box<dyn DiscountPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn calculate_price(&self, price: f64) -> f64 {
        price - self.policy.apply_discount(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_price_per_policy() {
        let premium = OrderPriceCalculator::new(Box::new(PremiumDiscountPolicy));
        let standard = OrderPriceCalculator::new(Box::new(StandardDiscountPolicy));
        let vip = OrderPriceCalculator::new(Box::new(VipDiscountPolicy));

        assert_eq!(premium.calculate_price(100.0), 90.0);
        assert_eq!(standard.calculate_price(100.0), 95.0);
        assert_eq!(vip.calculate_price(100.0), 85.0);
    }

    #[test]
    fn test_new_policy_without_touching_calculator() {
        struct HalfOffPolicy;

        impl DiscountPolicy for HalfOffPolicy {
            fn name(&self) -> &'static str {
                "HalfOffPolicy"
            }

            fn apply_discount(&self, price: f64) -> f64 {
                price / 2.0
            }
        }

        let calculator = OrderPriceCalculator::new(Box::new(HalfOffPolicy));
        assert_eq!(calculator.policy_name(), "HalfOffPolicy");
        assert_eq!(calculator.calculate_price(100.0), 50.0);
    }
}
