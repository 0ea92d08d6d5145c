use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_info;

/// Record-detail navigation: resolves a URL from the object API name,
/// record id and view action, then hands it to the browser.
pub struct RecordNavigator;

impl RecordNavigator {
    pub fn record_page_url(object_api_name: &str, record_id: &str, action: &str) -> String {
        format!("/lightning/r/{object_api_name}/{record_id}/{action}")
    }

    /// Navigates and returns the resolved URL so the caller can surface it.
    pub fn navigate_to_record(
        object_api_name: &str,
        record_id: &str,
        action: &str,
    ) -> RenderingResult<String> {
        let url = Self::record_page_url(object_api_name, record_id, action);
        log_info!(LogComponent::Infrastructure("Navigation"), "navigating to {url}");

        let window = web_sys::window()
            .ok_or_else(|| AppError::Rendering("window not available".to_string()))?;
        window
            .location()
            .set_href(&url)
            .map_err(|_| AppError::Rendering(format!("navigation to {url} failed")))?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_page_url_shape() {
        assert_eq!(
            RecordNavigator::record_page_url("Account", "0015i000011BkXLAA0", "view"),
            "/lightning/r/Account/0015i000011BkXLAA0/view"
        );
    }
}
