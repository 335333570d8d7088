use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::internal::http::structs::{FetchError, FetchParams, TransferEnvelope};

use super::build_url::build_url;
use super::read_guarded::read_guarded;

/// 单次 GET：非 200 直接报错，响应体限长读取后解析为 JSON 信封。不做重试。
pub async fn fetch_envelope<T: DeserializeOwned>(
    params: &FetchParams<'_>,
) -> Result<TransferEnvelope<T>, FetchError> {
    let url = build_url(params.base_url, params.path, params.query);

    let resp = params
        .client
        .get(&url)
        .timeout(params.timeout)
        .send()
        .await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(FetchError::BadStatus(status));
    }

    // 声明的长度已超限时不必再读
    if resp
        .content_length()
        .is_some_and(|len| len > params.max_bytes as u64)
    {
        return Err(FetchError::ResponseTooLarge {
            limit: params.max_bytes,
        });
    }

    let body = read_guarded(resp.bytes_stream(), params.max_bytes).await?;
    let envelope = serde_json::from_slice(&body)?;

    Ok(envelope)
}
