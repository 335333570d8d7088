use serde::Deserialize;

/// 分片接口返回的单个分片。
///
/// 字段名兼容旧版服务端（`chunkData` / `chunkHexMD5` / `hasNextChunk`）。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileChunk {
    /// base64 编码的分片内容
    #[serde(rename = "data", alias = "chunkData")]
    pub data: String,
    #[serde(rename = "chunkHexDigest", alias = "chunkHexMD5")]
    pub chunk_hex_digest: String,
    /// 为 false 时表示这是最后一个分片
    #[serde(rename = "hasNext", alias = "hasNextChunk")]
    pub has_next: bool,
}
