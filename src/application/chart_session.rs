use crate::domain::logging::LogComponent;
use crate::domain::market_data::{DateRange, PriceSeries, StockDataGateway};
use crate::{log_error, log_info, log_warn};
use std::cell::{Cell, RefCell};

/// What a submit cycle did. The caller only re-renders on `Updated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// New series stored, carrying its point count.
    Updated(usize),
    /// A previous fetch is still in flight; this submit was dropped.
    Rejected,
    /// The range is missing a bound; nothing was fetched.
    Incomplete,
    /// The fetch failed; prior state is untouched.
    Failed,
}

/// Coordinates the fetch-map-store cycle for the candlestick chart.
///
/// Submits are serialized: while one fetch is in flight any further submit
/// is rejected instead of racing the first one into the same surface. A
/// failed fetch logs one diagnostic entry and leaves the stored series as
/// it was, so the previously rendered chart stays up.
pub struct ChartSession<G: StockDataGateway> {
    gateway: G,
    series: RefCell<PriceSeries>,
    busy: Cell<bool>,
}

impl<G: StockDataGateway> ChartSession<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway, series: RefCell::new(PriceSeries::default()), busy: Cell::new(false) }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Snapshot of the stored series for the view layer.
    pub fn series_snapshot(&self) -> PriceSeries {
        self.series.borrow().clone()
    }

    pub async fn submit(&self, range: &DateRange) -> SubmitOutcome {
        if !range.is_complete() {
            log_warn!(
                LogComponent::Application("ChartSession"),
                "submit skipped: date range incomplete (start='{}' end='{}')",
                range.start,
                range.end
            );
            return SubmitOutcome::Incomplete;
        }
        if self.busy.replace(true) {
            log_warn!(
                LogComponent::Application("ChartSession"),
                "submit rejected: previous fetch still in flight"
            );
            return SubmitOutcome::Rejected;
        }

        let result = self.gateway.fetch_price_points(range).await;
        self.busy.set(false);

        match result {
            Ok(points) => {
                let series = PriceSeries::from_points(points);
                let count = series.len();
                *self.series.borrow_mut() = series;
                log_info!(
                    LogComponent::Application("ChartSession"),
                    "stored {} price points for {}..{}",
                    count,
                    range.start,
                    range.end
                );
                SubmitOutcome::Updated(count)
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("ChartSession"),
                    "error while getting stocks data: {}",
                    error
                );
                SubmitOutcome::Failed
            }
        }
    }
}
