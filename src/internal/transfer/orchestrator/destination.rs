//! 接收目录与文件名检查。

use std::io::ErrorKind;
use std::path::{Component, Path};

use tokio::fs;
use tracing::info;

use crate::internal::transfer::chunk_writer::is_temp_file_name;
use crate::internal::transfer::structs::TransferError;

/// 接收目录不存在则创建；已存在但不是目录时报错。
pub(super) async fn ensure_incoming_dir(dir: &Path) -> Result<(), TransferError> {
    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(TransferError::InvalidDestination(dir.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(dir)
                .await
                .map_err(TransferError::CreateDir)?;
            info!(dir = %dir.display(), "已创建接收目录");
            Ok(())
        }
        Err(e) => Err(TransferError::CreateDir(e)),
    }
}

/// 服务端给出的文件名必须是单个普通路径段，且不能落在临时文件的命名空间内。
pub(super) fn validate_file_name(name: &str) -> Result<(), TransferError> {
    let invalid = || TransferError::InvalidFileName(name.to_string());

    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(invalid()),
    }

    if is_temp_file_name(name) {
        return Err(invalid());
    }

    Ok(())
}

/// 无法确定是否存在（权限、名字过长等）时报错，不当作不存在继续下载。
pub(super) async fn already_present(path: &Path) -> Result<bool, TransferError> {
    fs::try_exists(path)
        .await
        .map_err(|source| TransferError::InspectDestination {
            path: path.to_path_buf(),
            source,
        })
}
