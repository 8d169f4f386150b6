use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Account, Category, CreateAccountRequest, CreateTransactionRequest, ReferenceData, Session,
    Transaction,
};

use super::config::ClientConfig;
use super::error::ApiError;

/// Header carrying the session token on every request
pub const AUTH_HEADER: &str = "x-auth-token";

pub const ACCOUNTS_PATH: &str = "/api/accounts";
pub const TRANSACTIONS_PATH: &str = "/api/transactions";
pub const CATEGORIES_PATH: &str = "/api/categories";

/// API client for communicating with the finance server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new API client from the build-time configuration
    pub fn new() -> Self {
        Self::from_config(&ClientConfig::from_build_env())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            session: config.session(),
        }
    }

    /// Create a new API client with a custom base URL and no session
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            session: Session::default(),
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List every account of the session's user
    pub async fn get_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let response = self.send(self.get(ACCOUNTS_PATH)).await?;
        Self::read_json(response).await
    }

    pub async fn create_account(&self, request: &CreateAccountRequest) -> Result<(), ApiError> {
        let response = self.send_json(self.post(ACCOUNTS_PATH), request).await?;
        Self::ensure_ok(response).await.map(|_| ())
    }

    /// List transactions with their account and category embedded
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let response = self.send(self.get(TRANSACTIONS_PATH)).await?;
        Self::read_json(response).await
    }

    pub async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<(), ApiError> {
        let response = self.send_json(self.post(TRANSACTIONS_PATH), request).await?;
        Self::ensure_ok(response).await.map(|_| ())
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.send(self.get(CATEGORIES_PATH)).await?;
        Self::read_json(response).await
    }

    /// Accounts plus categories split by type, for populating selectors.
    ///
    /// The two lists load independently; a failed list is left empty and its
    /// error reported alongside whatever did load.
    pub async fn get_reference_data(&self) -> ReferenceLoad {
        let accounts = self.get_accounts().await;
        let categories = self.get_categories().await;
        ReferenceLoad::from_results(accounts, categories)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).header(AUTH_HEADER, &self.session.access_token)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).header(AUTH_HEADER, &self.session.access_token)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn send_json<T: Serialize>(&self, builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Status { status, body })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::ensure_ok(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Reference data assembled from separately fetched lists
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLoad {
    pub data: ReferenceData,
    pub account_error: Option<ApiError>,
    pub category_error: Option<ApiError>,
}

impl ReferenceLoad {
    pub fn from_results(
        accounts: Result<Vec<Account>, ApiError>,
        categories: Result<Vec<Category>, ApiError>,
    ) -> Self {
        let (accounts, account_error) = match accounts {
            Ok(accounts) => (accounts, None),
            Err(e) => (Vec::new(), Some(e)),
        };
        let (categories, category_error) = match categories {
            Ok(categories) => (categories, None),
            Err(e) => (Vec::new(), Some(e)),
        };

        Self {
            data: ReferenceData::from_parts(accounts, categories),
            account_error,
            category_error,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
