use gatherly_shared::models::OrderSummary;
use uuid::Uuid;

use crate::pagination::{self, Paginated, PAGE_SIZE};
use crate::payment::{line_item_amount, CheckoutProvider, CheckoutSessionRequest};
use crate::repository::OrderRepository;
use crate::{handle_error, ActionResult};

/// What the checkout button submits.
#[derive(Debug, Clone)]
pub struct CheckoutOrderParams {
    pub event_title: String,
    pub event_id: Uuid,
    pub price: String,
    pub is_free: bool,
    pub buyer_id: String,
}

/// Stage a hosted-checkout session and hand back the processor's redirect
/// target. The order record itself lands later, through the processor's
/// completion webhook; the caller never sees persistence confirmation.
pub async fn checkout_order(
    provider: &dyn CheckoutProvider,
    base_url: &str,
    params: CheckoutOrderParams,
) -> ActionResult<String> {
    let base = base_url.trim_end_matches('/');
    let request = CheckoutSessionRequest {
        unit_amount: line_item_amount(&params.price, params.is_free),
        event_title: params.event_title,
        event_id: params.event_id,
        buyer_id: params.buyer_id,
        success_url: format!("{base}/profile"),
        cancel_url: format!("{base}/"),
    };

    let session = provider
        .create_checkout_session(&request)
        .await
        .map_err(handle_error)?;

    Ok(session.url)
}

/// One page of the user's ticket purchases plus the total page count.
pub async fn get_orders_by_user(
    orders: &dyn OrderRepository,
    user_id: &str,
    page: u64,
) -> ActionResult<Paginated<OrderSummary>> {
    let (data, total) = orders
        .list_orders_by_buyer(user_id, PAGE_SIZE, pagination::offset(page, PAGE_SIZE))
        .await
        .map_err(handle_error)?;

    Ok(Paginated {
        data,
        total_pages: pagination::total_pages(total, PAGE_SIZE),
    })
}
