//! Hosted-checkout adapter for the Stripe API.
//!
//! Only session creation lives here; completion lands on the processor's
//! webhook, outside this service.

use async_trait::async_trait;
use serde::Deserialize;

use gatherly_core::payment::{CheckoutProvider, CheckoutSession, CheckoutSessionRequest};

/// Stripe client for checkout-session creation.
pub struct StripeCheckout {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

/// Errors from the Stripe REST layer.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stripe returned a non-2xx status code.
    #[error("Stripe API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: String,
}

impl StripeCheckout {
    pub fn new(api_url: String, secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            secret_key,
        }
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, Box<dyn std::error::Error + Send + Sync>> {
        let unit_amount = request.unit_amount.to_string();
        let event_id = request.event_id.to_string();

        // Stripe takes form-encoded params with bracketed paths.
        let params = [
            ("mode", "payment"),
            ("line_items[0][quantity]", "1"),
            ("line_items[0][price_data][currency]", "usd"),
            ("line_items[0][price_data][unit_amount]", unit_amount.as_str()),
            (
                "line_items[0][price_data][product_data][name]",
                request.event_title.as_str(),
            ),
            ("metadata[eventId]", event_id.as_str()),
            ("metadata[buyerId]", request.buyer_id.as_str()),
            ("success_url", request.success_url.as_str()),
            ("cancel_url", request.cancel_url.as_str()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(StripeError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StripeError::Api { status, body }.into());
        }

        let session: SessionResponse = response.json().await.map_err(StripeError::Request)?;
        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }
}
