use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::internal::config::structs::ClientConfig;

use super::session_error::SessionError;

/// 传输会话
///
/// 该结构体定位
/// - 持有一次运行内复用的 HTTP 客户端，文件列表与所有分片请求共用同一连接池（keep-alive）
/// - 保存服务端地址、单次请求超时、单次请求的重试次数
///
/// 会话只在生产者一侧使用，写盘任务不会接触它
#[derive(Clone)]
pub struct TransferSession {
    pub client: Client,        // 内部是Arc，clone 共享连接池
    pub server_url: Arc<str>,  // 已去掉末尾的 '/'，后续直接拼接 path
    pub timeout: Duration,     // 连接、读取、整体等待共用这一个值
    pub retries: u32,          // 不含首次请求
}

impl TransferSession {
    /// 创建新的传输会话
    pub fn new(
        server_url: &str,
        timeout: Duration,
        retries: u32,
    ) -> Result<Self, SessionError> {
        let server_url = _format_server_url(server_url)?;

        if timeout.is_zero() {
            return Err(SessionError::ZeroTimeout);
        }

        let client = Client::builder()
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            server_url: Arc::from(server_url),
            timeout,
            retries,
        })
    }

    /// 由宿主配置创建会话
    pub fn from_config(config: &ClientConfig) -> Result<Self, SessionError> {
        Self::new(
            &config.server_url,
            Duration::from_millis(config.time_out_ms),
            config.retries_number,
        )
    }
}

/// 防止debug输出整个客户端
impl fmt::Debug for TransferSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferSession")
            .field("server_url", &self.server_url)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}

fn _format_server_url(url: &str) -> Result<String, SessionError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(SessionError::EmptyServerUrl);
    }

    let parsed = Url::parse(trimmed).map_err(|source| {
        SessionError::InvalidServerUrl {
            url: trimmed.to_string(),
            source,
        }
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(SessionError::UnsupportedScheme(other.to_string())),
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
