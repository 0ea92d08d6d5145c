use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    AccountGateway, AccountSummary, ContactGateway, ContactRecord, DateRange, Price, PricePoint,
    StockDataGateway, Symbol,
};
use crate::{log_error, log_info};
use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Raw stock record as the bridge serves it, custom-field names and all
#[derive(Debug, Clone, Deserialize)]
struct StockRecordDto {
    #[serde(rename = "Symbol__c")]
    symbol: String,
    #[serde(rename = "Open_Price__c")]
    open: f64,
    #[serde(rename = "High_Price__c")]
    high: f64,
    #[serde(rename = "Low_Price__c")]
    low: f64,
    #[serde(rename = "Close_Price__c")]
    close: f64,
    #[serde(rename = "Date__c")]
    date: String,
}

impl StockRecordDto {
    /// Explicit field renaming plus date-string conversion into the
    /// normalized shape.
    fn into_price_point(self) -> NetworkResult<PricePoint> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| AppError::Validation(format!("bad Date__c '{}': {}", self.date, e)))?;
        Ok(PricePoint::new(
            date,
            Price::new(self.open),
            Price::new(self.high),
            Price::new(self.low),
            Price::new(self.close),
            Symbol::from(self.symbol.as_str()),
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AccountDto {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "AnnualRevenue")]
    annual_revenue: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactDto {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "Email")]
    email: String,
}

/// REST client for the generated bridge endpoints
#[derive(Debug, Clone)]
pub struct ApexBridgeClient {
    base_url: String,
}

impl Default for ApexBridgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApexBridgeClient {
    pub fn new() -> Self {
        Self { base_url: "/services/apexrest".to_string() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn stocks_url(&self, start_date: &str, end_date: &str) -> String {
        format!("{}/stocks?startDate={}&endDate={}", self.base_url, start_date, end_date)
    }

    pub fn accounts_url(&self, annual_revenue: f64) -> String {
        format!("{}/accounts?annualRevenue={}", self.base_url, annual_revenue)
    }

    pub fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }

    async fn fetch_records<T: DeserializeOwned>(&self, url: String) -> NetworkResult<Vec<T>> {
        log_info!(LogComponent::Infrastructure("ApexBridge"), "fetching {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::Network(format!("HTTP error: {}", response.status())));
        }

        let body =
            response.text().await.map_err(|e| AppError::Network(format!("bad body: {e:?}")))?;
        serde_json::from_str(&body).map_err(|e| {
            log_error!(LogComponent::Infrastructure("ApexBridge"), "unparseable response: {e}");
            AppError::Network(format!("failed to parse response: {e}"))
        })
    }

    pub async fn get_stocks_data(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> NetworkResult<Vec<PricePoint>> {
        let records: Vec<StockRecordDto> =
            self.fetch_records(self.stocks_url(start_date, end_date)).await?;
        records.into_iter().map(StockRecordDto::into_price_point).collect()
    }

    pub async fn accounts_by_revenue(
        &self,
        annual_revenue: f64,
    ) -> NetworkResult<Vec<AccountSummary>> {
        let records: Vec<AccountDto> = self.fetch_records(self.accounts_url(annual_revenue)).await?;
        Ok(records
            .into_iter()
            .map(|a| AccountSummary { id: a.id, name: a.name, annual_revenue: a.annual_revenue })
            .collect())
    }

    pub async fn contacts(&self) -> NetworkResult<Vec<ContactRecord>> {
        let records: Vec<ContactDto> = self.fetch_records(self.contacts_url()).await?;
        Ok(records
            .into_iter()
            .map(|c| ContactRecord {
                first_name: c.first_name,
                last_name: c.last_name,
                email: c.email,
            })
            .collect())
    }
}

impl StockDataGateway for ApexBridgeClient {
    async fn fetch_price_points(&self, range: &DateRange) -> NetworkResult<Vec<PricePoint>> {
        self.get_stocks_data(&range.start, &range.end).await
    }
}

impl AccountGateway for ApexBridgeClient {
    async fn query_accounts_by_revenue(
        &self,
        annual_revenue: f64,
    ) -> NetworkResult<Vec<AccountSummary>> {
        self.accounts_by_revenue(annual_revenue).await
    }
}

impl ContactGateway for ApexBridgeClient {
    async fn get_contacts(&self) -> NetworkResult<Vec<ContactRecord>> {
        self.contacts().await
    }
}
