pub mod chart_session;

pub use chart_session::*;
