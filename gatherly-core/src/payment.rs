use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the processor needs to stage a hosted checkout for one ticket.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSessionRequest {
    pub event_title: String,
    pub event_id: Uuid,
    pub buyer_id: String,
    /// Minor units; zero for free tickets.
    pub unit_amount: i64,
    pub success_url: String,
    pub cancel_url: String,
}

/// Provider-issued session handle.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Provider's ID (e.g., cs_123).
    pub id: String,
    /// Hosted page the buyer is redirected to.
    pub url: String,
}

#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a hosted-checkout session with the provider.
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, Box<dyn std::error::Error + Send + Sync>>;
}

/// Convert a decimal price string into the processor's minor-unit integer.
/// Free tickets always charge zero, whatever the price field holds.
pub fn line_item_amount(price: &str, is_free: bool) -> i64 {
    if is_free {
        return 0;
    }
    let major: f64 = price.trim().parse().unwrap_or(0.0);
    (major * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_event_converts_to_minor_units() {
        assert_eq!(line_item_amount("25.00", false), 2500);
        assert_eq!(line_item_amount("9.99", false), 999);
    }

    #[test]
    fn free_event_charges_zero_even_with_a_price() {
        assert_eq!(line_item_amount("25.00", true), 0);
        assert_eq!(line_item_amount("", true), 0);
    }

    #[test]
    fn unparsable_price_falls_back_to_zero() {
        assert_eq!(line_item_amount("", false), 0);
        assert_eq!(line_item_amount("abc", false), 0);
    }
}
