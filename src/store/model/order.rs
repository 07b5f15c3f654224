use crate::store::model::cart::CartItem;
use crate::store::model::customer::Customer;
use serde::Serialize;

/// Wire payload for `POST /orders`.
#[derive(Debug, Serialize)]
pub(crate) struct OrderRequest<'a> {
    pub customer: &'a Customer,
    pub items: &'a [CartItem],
}
