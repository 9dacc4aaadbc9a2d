/// HTTP transport with a fixed header profile and an owned cookie jar
pub mod http_client;

pub use http_client::{FtHttpClient, FtHttpClientImpl};
