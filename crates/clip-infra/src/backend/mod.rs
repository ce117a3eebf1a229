mod http;

pub use http::HttpClipBackend;
