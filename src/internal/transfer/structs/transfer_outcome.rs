use std::path::{Path, PathBuf};

/// 单次传输的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// 已校验并改名为正式文件
    Saved(PathBuf),
    /// 最新文件本地已存在，未发起分片请求
    AlreadyPresent(PathBuf),
}

impl TransferOutcome {
    pub fn path(&self) -> &Path {
        match self {
            TransferOutcome::Saved(p) | TransferOutcome::AlreadyPresent(p) => p,
        }
    }
}
