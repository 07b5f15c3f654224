use derive_more::{Display, Error, From};
use reqwest::StatusCode;

#[derive(Debug, Display, Error, From)]
pub(crate) enum ApiError {
    #[display("request failed, {_0}")]
    #[from]
    Transport(reqwest::Error),
    #[display("got unexpected status code, {_0}")]
    UnexpectedStatus(#[error(not(source))] StatusCode),
}
