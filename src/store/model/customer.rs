use serde::Serialize;

/// Checkout form fields, transient for the session.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}
