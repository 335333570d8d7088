//! 请求层错误类型。重试层对这里的任何错误都一视同仁地重试。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP 请求失败: {0}")]
    Network(#[from] reqwest::Error),

    #[error("响应状态异常: {0}")]
    BadStatus(StatusCode),

    #[error("响应体超过上限 {limit} 字节")]
    ResponseTooLarge { limit: usize },

    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("请求 {endpoint} 共尝试 {attempts} 次仍失败，放弃")]
    Exhausted {
        endpoint: String,
        attempts: u64,
        #[source]
        last: Box<FetchError>,
    },
}
