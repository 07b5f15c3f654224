use crate::store::api::error::ApiError;
use derive_more::{Display, Error, From};

/// Domain failures surfaced to the customer as blocking messages. They
/// never abort the session.
#[derive(Debug, Display, Error, From)]
pub(crate) enum StoreError {
    #[display("cart is empty")]
    EmptyCart,
    #[display("no seats left for this lesson")]
    SeatsExhausted,
    #[display("lesson is no longer available")]
    LessonNotFound,
    #[display("no such cart entry")]
    NoSuchCartEntry,
    #[display("select a sort option first")]
    NoSortSelected,
    #[display("name and phone are required")]
    MissingDetails,
    #[display("email address is not valid")]
    InvalidEmail,
    #[display("backend request failed, {_0}")]
    #[from]
    Api(ApiError),
}
