//! Open/Closed Principle
//!
//! Open for extension, closed for modification.

pub mod bad;
pub mod good;

use crate::error::ScenarioResult;
use crate::narrative::{amount, Narrative};
use crate::registry::{Principle, Scenario, ScenarioKey, Variant};

const ORDER_PRICE: f64 = 100.0;

pub fn scenarios() -> [Scenario; 2] {
    [
        Scenario::new(ScenarioKey::new(Principle::Ocp, Variant::Bad), run_bad),
        Scenario::new(ScenarioKey::new(Principle::Ocp, Variant::Good), run_good),
    ]
}

fn run_bad() -> ScenarioResult<Narrative> {
    let customer_type = bad::CustomerType::Premium;
    let discount = bad::DiscountCalculator.calculate_discount(customer_type, ORDER_PRICE);
    let final_price = ORDER_PRICE - discount;

    Ok(Narrative::titled(ScenarioKey::new(Principle::Ocp, Variant::Bad).title())
        .line("OCP says code should be open for extension but closed for modification.")
        .blank()
        .section(
            "Here DiscountCalculator uses conditionals on CustomerType:",
            [
                format!("Input: customerType = {}, price = {}", customer_type, amount(ORDER_PRICE)),
                format!("Discount: {}", amount(discount)),
                format!("Final price: {}", amount(final_price)),
            ],
        )
        .blank()
        .section(
            "Problems:",
            [
                "Every new customer type requires editing DiscountCalculator.",
                "The conditional logic grows over time and becomes fragile.",
                "Existing behavior can break when adding a new branch.",
            ],
        ))
}

fn run_good() -> ScenarioResult<Narrative> {
    let calculator = good::OrderPriceCalculator::new(Box::new(good::PremiumDiscountPolicy));
    let final_price = calculator.calculate_price(ORDER_PRICE);
    let discount = ORDER_PRICE - final_price;

    Ok(Narrative::titled(ScenarioKey::new(Principle::Ocp, Variant::Good).title())
        .line("OrderPriceCalculator depends on the DiscountPolicy abstraction instead of conditionals.")
        .blank()
        .section(
            "Scenario:",
            [
                format!("Input price: {}", amount(ORDER_PRICE)),
                format!("Policy in use: {}", calculator.policy_name()),
                format!("Discount: {}", amount(discount)),
                format!("Final price: {}", amount(final_price)),
            ],
        )
        .blank()
        .section(
            "Benefits:",
            [
                "To support a new customer type, create a new DiscountPolicy implementation.",
                "OrderPriceCalculator stays closed for modification but open to new policies.",
                "Behavior is easier to extend and reason about.",
            ],
        ))
}
