//! thin client over the backend http api

use crate::store::api::error::ApiError;
use crate::store::model::config::StoreConfig;
use crate::store::model::lesson::Lesson;
use crate::store::model::order::OrderRequest;
use log::warn;
use reqwest::{Client, StatusCode};

pub(crate) struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(StoreConfig { base_url }: StoreConfig) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Fetch the lesson catalog.
    pub async fn fetch_lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        let res = self
            .http
            .get(format!("{}/{}", self.base_url, "lessons"))
            .send()
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res.json::<Vec<Lesson>>().await?),
            unexpected => {
                warn!("fetch_lessons got unexpected status code, {}", unexpected);
                Err(ApiError::UnexpectedStatus(unexpected))
            }
        }
    }

    /// Submit an order. The response body is unused, only the status
    /// decides success.
    pub async fn submit_order(&self, order: &OrderRequest<'_>) -> Result<(), ApiError> {
        let res = self
            .http
            .post(format!("{}/{}", self.base_url, "orders"))
            .json(order)
            .send()
            .await?;
        match res.status() {
            status if status.is_success() => Ok(()),
            unexpected => {
                warn!("submit_order got unexpected status code, {}", unexpected);
                Err(ApiError::UnexpectedStatus(unexpected))
            }
        }
    }
}
