use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::internal::http::structs::{FetchError, FetchParams, TransferEnvelope};

use super::fetch_envelope::fetch_envelope;

/// 最多执行 `retries + 1` 次；任何错误都立即重试，不做退避。
///
/// 全部失败后返回 [`FetchError::Exhausted`]，携带最后一次的错误。
pub async fn execute_with_retries<T, F, Fut>(
    endpoint: &str,
    retries: u32,
    mut attempt: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    // u64 计数，retries 取 u32::MAX 时总次数也不会溢出
    let total = u64::from(retries) + 1;
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if attempts >= total => {
                return Err(FetchError::Exhausted {
                    endpoint: endpoint.to_string(),
                    attempts,
                    last: Box::new(e),
                });
            }
            Err(e) => {
                warn!(
                    endpoint,
                    attempt = attempts,
                    remaining = total - attempts,
                    error = %e,
                    "请求失败，立即重试"
                );
            }
        }
    }
}

/// [`fetch_envelope`] 加上重试。
pub async fn fetch_with_retries<T: DeserializeOwned>(
    params: &FetchParams<'_>,
) -> Result<TransferEnvelope<T>, FetchError> {
    execute_with_retries(params.path, params.retries, || {
        fetch_envelope::<T>(params)
    })
    .await
}
