use super::entities::{AccountSummary, ContactRecord, PricePoint};
use super::value_objects::DateRange;
use crate::domain::errors::AppError;

/// Injected async interface to the stock price bridge. The chart session
/// and renderer stay testable against a fake implementation.
#[allow(async_fn_in_trait)]
pub trait StockDataGateway {
    /// Fetch the raw records matching the range, already mapped into
    /// normalized price points.
    async fn fetch_price_points(&self, range: &DateRange) -> Result<Vec<PricePoint>, AppError>;
}

/// Account lookup by minimum annual revenue.
#[allow(async_fn_in_trait)]
pub trait AccountGateway {
    async fn query_accounts_by_revenue(
        &self,
        annual_revenue: f64,
    ) -> Result<Vec<AccountSummary>, AppError>;
}

/// Contact directory access.
#[allow(async_fn_in_trait)]
pub trait ContactGateway {
    async fn get_contacts(&self) -> Result<Vec<ContactRecord>, AppError>;
}
