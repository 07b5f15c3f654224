//! checkout form flow: validation, order submission, session reset

use crate::store::api::client::ApiClient;
use crate::store::controller::cart::total_price;
use crate::store::controller::error::StoreError;
use crate::store::model::order::OrderRequest;
use crate::store::state::StoreState;
use crate::store::util::time;
use log::{error, info};

/// Confirmation shown to the customer after a successful order.
#[derive(Debug)]
pub(crate) struct Receipt {
    pub total: u32,
    pub placed_at: String,
}

/// Open the checkout form. Rejected while the cart is empty.
pub(crate) fn open_checkout_form(state: &mut StoreState) -> Result<(), StoreError> {
    if state.cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }
    state.show_checkout_form = true;
    Ok(())
}

pub(crate) fn close_checkout_form(state: &mut StoreState) {
    state.show_checkout_form = false;
}

/// Keep only digits from phone input, the form field mask.
pub(crate) fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Syntactic email check: some local part, one `@`, a domain with a
/// dot and non-empty labels around it, no whitespace anywhere.
pub(crate) fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate the form and submit the order. On success the session is
/// reset and a receipt returned; the caller refetches the catalog to
/// reconcile seat counts.
pub(crate) async fn confirm_checkout(
    state: &mut StoreState,
    api: &ApiClient,
) -> Result<Receipt, StoreError> {
    if state.cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }
    if state.customer.name.trim().is_empty() || state.customer.phone.trim().is_empty() {
        return Err(StoreError::MissingDetails);
    }
    if !email_is_valid(&state.customer.email) {
        return Err(StoreError::InvalidEmail);
    }

    let order = OrderRequest {
        customer: &state.customer,
        items: &state.cart,
    };
    if let Err(e) = api.submit_order(&order).await {
        // state is kept, the customer can retry from the form
        error!("order submission failed, {}", e);
        return Err(e.into());
    }

    let receipt = Receipt {
        total: total_price(state),
        placed_at: time::clock::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
    };
    info!(
        "order placed, items={} total={}",
        state.cart.len(),
        receipt.total
    );
    state.reset_after_checkout();
    Ok(receipt)
}
