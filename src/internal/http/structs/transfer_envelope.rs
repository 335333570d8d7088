use serde::Deserialize;

/// 服务端所有接口统一的响应信封：`{success, payload, errorMessage}`。
///
/// `success` 为真时只看 `payload`，否则只看 `errorMessage`（旧版服务端字段名为 `exception`）。
#[derive(Debug, Clone, Deserialize)]
pub struct TransferEnvelope<T> {
    pub success: bool,
    pub payload: Option<T>,
    #[serde(rename = "errorMessage", alias = "exception")]
    pub error_message: Option<String>,
}

impl<T> TransferEnvelope<T> {
    /// 取出有效负载；服务端报告失败或负载缺失时返回可读的原因。
    pub fn into_payload(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .error_message
                .unwrap_or_else(|| "服务端未给出错误信息".to_string()));
        }

        self.payload
            .ok_or_else(|| "服务端返回成功但 payload 为空".to_string())
    }
}
