use std::sync::OnceLock;

use base64::Engine;

use super::file_chunk::FileChunk;

/// 交给写盘任务的分片快照。入队即转移所有权，生产者不再持有。
///
/// 原始字节在首次访问时从 base64 解码并缓存，摘要校验与写盘共用同一份。
#[derive(Debug)]
pub struct QueuedChunk {
    chunk_num: u64,
    data: String,
    hex_digest: String,
    has_next: bool,
    decoded: OnceLock<Vec<u8>>,
}

impl QueuedChunk {
    pub fn new(chunk_num: u64, chunk: FileChunk) -> Self {
        Self {
            chunk_num,
            data: chunk.data,
            hex_digest: chunk.chunk_hex_digest,
            has_next: chunk.has_next,
            decoded: OnceLock::new(),
        }
    }

    /// 分片序号，从 0 开始
    pub fn chunk_num(&self) -> u64 {
        self.chunk_num
    }

    /// 服务端声明的分片摘要
    pub fn hex_digest(&self) -> &str {
        &self.hex_digest
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// 解码后的原始字节；只解码一次。
    pub fn bytes(&self) -> Result<&[u8], base64::DecodeError> {
        if let Some(decoded) = self.decoded.get() {
            return Ok(decoded);
        }

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(self.data.as_bytes())?;
        Ok(self.decoded.get_or_init(|| decoded))
    }
}
