use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatherly_core::actions::event as event_actions;
use gatherly_core::actions::order::{self as order_actions, CheckoutOrderParams};
use gatherly_core::pagination::{parse_page, Paginated};
use gatherly_shared::models::OrderSummary;

use crate::error::ApiError;
use crate::middleware::auth::SessionClaims;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// The purchase button, as the event detail page renders it.
#[derive(Debug, Serialize)]
pub struct CheckoutWidget {
    pub event_id: Uuid,
    pub label: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/{id}/checkout",
            get(checkout_widget).post(checkout),
        )
        .route("/users/me/orders", get(list_my_orders))
}

/// GET /events/{id}/checkout — the purchase button model.
pub async fn checkout_widget(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<CheckoutWidget>, ApiError> {
    let event = event_actions::get_event_by_id(state.events.as_ref(), event_id).await?;
    Ok(Json(CheckoutWidget {
        event_id: event.id,
        label: if event.is_free { "Get Ticket" } else { "Buy Ticket" },
    }))
}

/// POST /events/{id}/checkout — stage a hosted-checkout session and hand
/// the buyer to the processor's page.
pub async fn checkout(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Path(event_id): Path<Uuid>,
) -> Result<Redirect, ApiError> {
    let event = event_actions::get_event_by_id(state.events.as_ref(), event_id).await?;

    let params = CheckoutOrderParams {
        event_title: event.title,
        event_id: event.id,
        price: event.price,
        is_free: event.is_free,
        buyer_id: claims.sub,
    };

    let url = order_actions::checkout_order(state.checkout.as_ref(), &state.base_url, params)
        .await?;

    Ok(Redirect::to(&url))
}

/// GET /users/me/orders?page=N
pub async fn list_my_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Query(params): Query<PageParams>,
) -> Result<Json<Paginated<OrderSummary>>, ApiError> {
    let page = parse_page(params.page.as_deref());
    let orders =
        order_actions::get_orders_by_user(state.orders.as_ref(), &claims.sub, page).await?;
    Ok(Json(orders))
}
