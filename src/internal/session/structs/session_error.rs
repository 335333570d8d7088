//! 会话创建错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("服务端地址为空")]
    EmptyServerUrl,

    #[error("服务端地址格式错误 {url}: {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("不支持的协议: {0}")]
    UnsupportedScheme(String),

    #[error("超时时间必须大于 0")]
    ZeroTimeout,

    #[error("创建 HTTP 客户端失败: {0}")]
    BuildClient(#[from] reqwest::Error),
}
