//! 分片与整文件摘要（MD5，小写十六进制）。

use std::path::Path;

use md5::{Digest, Md5};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

const READ_BUF_SIZE: usize = 64 * 1024;

pub(crate) fn hex_digest(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

/// 忽略大小写比较；服务端给的摘要可能是大写
pub(crate) fn digests_match(actual: &str, expected: &str) -> bool {
    actual.eq_ignore_ascii_case(expected.trim())
}

/// 从磁盘重新读取整个文件计算摘要。
pub(crate) async fn file_digest(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path).await?;
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; READ_BUF_SIZE];

    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
