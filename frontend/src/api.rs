//! Client for the remote JSON store.
//!
//! The store exposes every collection as `/<collection>.json` and every record as
//! `/<collection>/<id>.json`. Collections come back as `{id: record}` maps, and a POST
//! answers with `{"name": "<generated id>"}`.

use gloo_net::http::{Request, Response};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{
    from_collection, Category, CreatedKey, NewCategory, NewTransaction, Record, Transaction,
};

const CATEGORIES: &str = "categories";
const TRANSACTIONS: &str = "transactions";

#[derive(Clone, Debug, PartialEq)]
pub struct FinanceApi {
    base_url: String,
}

impl FinanceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        FinanceApi {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}.json", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}.json", self.base_url, collection, id)
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch_all(CATEGORIES).await
    }

    pub async fn create_category(&self, category: NewCategory) -> Result<Category, ApiError> {
        let key = self.create(CATEGORIES, &category).await?;
        Ok(category.with_id(key.name))
    }

    pub async fn delete_category(&self, id: String) -> Result<String, ApiError> {
        self.delete(CATEGORIES, &id).await?;
        Ok(id)
    }

    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.fetch_all(TRANSACTIONS).await
    }

    pub async fn add_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let key = self.create(TRANSACTIONS, &transaction).await?;
        Ok(transaction.with_id(key.name))
    }

    /// Replaces the stored record wholesale. The id only goes into the path.
    pub async fn edit_transaction(&self, transaction: Transaction) -> Result<Transaction, ApiError> {
        let url = self.record_url(TRANSACTIONS, &transaction.id);
        log::debug!("PUT {url}");

        let request = Request::put(&url)
            .json(&transaction)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;

        Ok(transaction)
    }

    pub async fn delete_transaction(&self, id: String) -> Result<String, ApiError> {
        self.delete(TRANSACTIONS, &id).await?;
        Ok(id)
    }

    async fn fetch_all<T>(&self, collection: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned + Record,
    {
        let url = self.collection_url(collection);
        log::debug!("GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .json::<Option<IndexMap<String, T>>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let records = from_collection(body);
        log::info!("fetched {} {collection}", records.len());
        Ok(records)
    }

    async fn create<B>(&self, collection: &str, body: &B) -> Result<CreatedKey, ApiError>
    where
        B: serde::Serialize,
    {
        let url = self.collection_url(collection);
        log::debug!("POST {url}");

        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        let key = response
            .json::<CreatedKey>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        log::info!("created {collection}/{}", key.name);
        Ok(key)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        let url = self.record_url(collection, id);
        log::debug!("DELETE {url}");

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;

        log::info!("deleted {collection}/{id}");
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => response.status_text(),
    };
    Err(ApiError::Status { status, message })
}
