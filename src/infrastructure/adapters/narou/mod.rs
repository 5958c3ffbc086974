//! Narou Adapter - 小説検索 API 客户端实现

mod codec;
mod fake_narou_client;
mod http_narou_client;

pub use fake_narou_client::{FakeNarouClient, FakeNarouClientConfig};
pub use http_narou_client::*;
