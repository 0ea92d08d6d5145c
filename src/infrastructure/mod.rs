pub mod http;
pub mod navigation;
pub mod rendering;
pub mod services;
