use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerType {
    Standard,
    Premium,
    Vip,
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CustomerType::Standard => "STANDARD",
            CustomerType::Premium => "PREMIUM",
            CustomerType::Vip => "VIP",
        };
        f.write_str(name)
    }
}

/// Every customer type is a branch in here; adding one means editing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    /// Discount amount for `price`. A missing customer type gets nothing.
    pub fn calculate_discount(&self, customer_type: impl Into<Option<CustomerType>>, price: f64) -> f64 {
        let customer_type = customer_type.into();
        if customer_type == Some(CustomerType::Standard) {
            return price * 0.05;
        }
        if customer_type == Some(CustomerType::Premium) {
            return price * 0.10;
        }
        if customer_type == Some(CustomerType::Vip) {
            return price * 0.15;
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_per_customer_type() {
        let calculator = DiscountCalculator;
        assert_eq!(calculator.calculate_discount(CustomerType::Standard, 100.0), 5.0);
        assert_eq!(calculator.calculate_discount(CustomerType::Premium, 100.0), 10.0);
        assert_eq!(calculator.calculate_discount(CustomerType::Vip, 100.0), 15.0);
    }

    #[test]
    fn test_unrecognized_type_gets_no_discount() {
        assert_eq!(DiscountCalculator.calculate_discount(None, 100.0), 0.0);
    }
}
