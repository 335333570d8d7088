use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

const TEMP_PREFIX: &str = ".";
const TEMP_SUFFIX: &str = ".part";

/// 临时文件名由正式文件名的摘要决定：同一文件多次运行复用同一路径，不会堆积垃圾。
///
/// 形如 `.<sha256>.part`；这种形状的名字不允许作为正式文件名，两者不会重叠。
pub(crate) fn temp_file_name(file_name: &str) -> String {
    format!(
        "{}{:x}{}",
        TEMP_PREFIX,
        Sha256::digest(file_name.as_bytes()),
        TEMP_SUFFIX
    )
}

/// 是否落在临时文件的命名空间内（`.` 开头且 `.part` 结尾）
pub(crate) fn is_temp_file_name(name: &str) -> bool {
    name.starts_with(TEMP_PREFIX) && name.ends_with(TEMP_SUFFIX)
}

/// 尽力删除临时文件；失败只记日志。
pub(crate) async fn remove_temp_file(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => debug!(path = %path.display(), "已删除临时文件"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "删除临时文件失败"),
    }
}
