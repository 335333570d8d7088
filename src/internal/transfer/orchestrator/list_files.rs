//! 拉取文件列表并选出最新文件。

use tracing::error;

use crate::internal::http::functions::fetch_with_retries;
use crate::internal::http::structs::FetchParams;
use crate::internal::session::structs::TransferSession;
use crate::internal::transfer::structs::{FileSummary, TransferError};

use super::{FILES_END_POINT, FILES_MAX_BYTES};

/// 请求文件列表；请求耗尽重试或服务端报告失败都视为整次运行失败。
pub(super) async fn fetch_newest_file(
    session: &TransferSession,
) -> Result<FileSummary, TransferError> {
    let params = FetchParams {
        client: &session.client,
        base_url: &session.server_url,
        path: FILES_END_POINT,
        query: &[],
        max_bytes: FILES_MAX_BYTES,
        timeout: session.timeout,
        retries: session.retries,
    };

    let envelope = fetch_with_retries::<Vec<FileSummary>>(&params)
        .await
        .map_err(|source| TransferError::MetadataUnavailable {
            reason: "请求文件列表失败".to_string(),
            source: Some(source),
        })?;

    let files = envelope.into_payload().map_err(|reason| {
        error!(%reason, "服务端返回文件列表错误，放弃");
        TransferError::MetadataUnavailable {
            reason,
            source: None,
        }
    })?;

    select_newest(files).ok_or_else(|| TransferError::MetadataUnavailable {
        reason: "服务端文件列表为空".to_string(),
        source: None,
    })
}

/// 按服务端返回顺序取最后一个，不比较时间戳。
pub(crate) fn select_newest(files: Vec<FileSummary>) -> Option<FileSummary> {
    files.into_iter().last()
}
