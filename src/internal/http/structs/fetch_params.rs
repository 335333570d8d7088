use std::time::Duration;

use reqwest::Client;

/// 发起一次（可重试的）GET 请求时的参数（形参超过 3 个，用 struct 承载）。
///
/// 重试次数与超时按调用传入，不读全局配置。
#[derive(Debug, Clone, Copy)]
pub struct FetchParams<'a> {
    pub client: &'a Client,
    pub base_url: &'a str,
    pub path: &'a str,
    /// 按顺序拼接到查询串，值会做 URI 组件转义
    pub query: &'a [(&'a str, &'a str)],
    /// 响应体允许的最大字节数
    pub max_bytes: usize,
    pub timeout: Duration,
    /// 不含首次请求
    pub retries: u32,
}
