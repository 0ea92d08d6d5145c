/// Compact application error taxonomy
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AppError {
    Network(String),
    Rendering(String),
    Validation(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;

/// Flatten an error into display-ready message lines. Subscription-style
/// consumers (the contact list) render the result as-is.
pub fn reduce_errors(error: &AppError) -> Vec<String> {
    let body = match error {
        AppError::Network(msg) | AppError::Rendering(msg) | AppError::Validation(msg) => msg,
    };
    let lines: Vec<String> =
        body.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect();
    if lines.is_empty() { vec![error.to_string()] } else { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_errors_splits_multiline_bodies() {
        let error = AppError::Network("timed out\n\nserver unreachable".to_string());
        assert_eq!(reduce_errors(&error), vec!["timed out", "server unreachable"]);
    }

    #[test]
    fn reduce_errors_never_returns_empty() {
        let error = AppError::Validation(String::new());
        assert_eq!(reduce_errors(&error), vec!["Validation Error: ".to_string()]);
    }
}
