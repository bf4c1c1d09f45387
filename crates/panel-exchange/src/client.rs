//! HTTP client for the futures REST API.
//!
//! Public endpoints (exchange info, ticker price) are plain GETs. Private
//! endpoints (order, account) carry `recvWindow` + `timestamp`, an HMAC
//! signature over the exact query string, and the API key header.

use async_trait::async_trait;
use panel_core::{OrderAck, OrderRequest, OrderResult};
use panel_protocol::wire_types::{
    AccountSnapshot, ApiErrorBody, ExchangeInfo, OrderResponse, TickerPrice, ACCOUNT_PATH,
    API_KEY_HEADER, EXCHANGE_INFO_PATH, ORDER_PATH, TICKER_PRICE_PATH,
};
use panel_protocol::{
    decode_order_ack, decode_price, decode_symbols, encode_query, order_params, sign, ProtocolError,
};
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::config::ExchangeConfig;
use crate::error::ExchangeError;
use crate::types::{ConnectionStatus, Exchange};

pub struct ExchangeClient {
    http: HttpClient,
    config: ExchangeConfig,
    status: ConnectionStatus,
}

impl ExchangeClient {
    /// Build a client without touching the network.
    pub fn new(config: ExchangeConfig) -> Self {
        Self {
            http: HttpClient::new(),
            config,
            status: ConnectionStatus::Unknown,
        }
    }

    /// Build a client and run the connection check.
    ///
    /// Never fails: a client whose check failed is still returned, with
    /// the failure recorded in [`ExchangeClient::status`].
    pub async fn connect(config: ExchangeConfig) -> Self {
        let mut client = Self::new(config);
        client.check_connection().await;
        client
    }

    /// Authenticate against the account endpoint and record the outcome.
    pub async fn check_connection(&mut self) -> ConnectionStatus {
        info!("Connecting to {}...", self.config.base_url);
        if self.config.credentials.is_empty() {
            warn!("API key or secret not set; signed requests will be rejected");
        }

        self.status = match self.fetch_account().await {
            Ok(account) => {
                info!("Connected");
                debug!(
                    "Account can_trade={:?} wallet_balance={:?}",
                    account.can_trade, account.total_wallet_balance
                );
                ConnectionStatus::Connected
            }
            Err(e) => {
                warn!("Connection failed: {}", e);
                ConnectionStatus::Failed(e.to_string())
            }
        };

        self.status.clone()
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    async fn fetch_symbols(&self) -> Result<Vec<String>, ExchangeError> {
        let info: ExchangeInfo = self.public_get(EXCHANGE_INFO_PATH, &[]).await?;
        Ok(decode_symbols(info))
    }

    async fn fetch_price(&self, symbol: &str) -> Result<f64, ExchangeError> {
        let ticker: TickerPrice = self
            .public_get(TICKER_PRICE_PATH, &[("symbol", symbol.to_string())])
            .await?;
        Ok(decode_price(&ticker)?)
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderAck, ExchangeError> {
        let resp: OrderResponse = self
            .signed(Method::POST, ORDER_PATH, order_params(request))
            .await?;
        Ok(decode_order_ack(resp, request))
    }

    async fn fetch_account(&self) -> Result<AccountSnapshot, ExchangeError> {
        self.signed(Method::GET, ACCOUNT_PATH, Vec::new()).await
    }

    async fn public_get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        let mut url = format!("{}{}", self.config.base_url, path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&encode_query(params));
        }

        let response = self.http.get(&url).send().await?;
        read_body(response).await
    }

    async fn signed<T>(
        &self,
        method: Method,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let query = self.signed_query(params, timestamp)?;
        let url = format!("{}{}?{}", self.config.base_url, path, query);

        let response = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.config.credentials.api_key)
            .send()
            .await?;
        read_body(response).await
    }

    /// `params&recvWindow=..&timestamp=..&signature=..`
    fn signed_query(
        &self,
        mut params: Vec<(&'static str, String)>,
        timestamp: i64,
    ) -> Result<String, ProtocolError> {
        params.push(("recvWindow", self.config.recv_window_ms.to_string()));
        params.push(("timestamp", timestamp.to_string()));

        let query = encode_query(&params);
        let signature = sign(&self.config.credentials.api_secret, &query)?;
        Ok(format!("{}&signature={}", query, signature))
    }
}

async fn read_body<T>(response: Response) -> Result<T, ExchangeError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => ExchangeError::Api {
                code: err.code,
                msg: err.msg,
            },
            Err(_) => ExchangeError::Status {
                status: status.as_u16(),
                body,
            },
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl Exchange for ExchangeClient {
    async fn list_symbols(&self) -> Vec<String> {
        match self.fetch_symbols().await {
            Ok(symbols) => {
                debug!("Fetched {} symbols", symbols.len());
                symbols
            }
            Err(e) => {
                error!("Failed to fetch symbols: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_price(&self, symbol: &str) -> Option<f64> {
        match self.fetch_price(symbol).await {
            Ok(price) => Some(price),
            Err(e) => {
                error!("Failed to fetch price for {}: {}", symbol, e);
                None
            }
        }
    }

    async fn place_order(&self, request: &OrderRequest) -> OrderResult {
        match self.submit_order(request).await {
            Ok(ack) => {
                info!(
                    "Order success | ID={} | Status={} | symbol={} | side={} | type={}",
                    ack.order_id, ack.status, request.symbol, request.side, request.order_type
                );
                OrderResult::Accepted(ack)
            }
            Err(e) => {
                error!("Order Failed : {}", e);
                OrderResult::failed(e.to_string())
            }
        }
    }
}
