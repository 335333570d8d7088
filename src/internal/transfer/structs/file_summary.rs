use serde::Deserialize;

/// 文件列表接口返回的单个文件摘要；列表顺序即新旧顺序，最后一个为最新。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileSummary {
    pub name: String,
    /// 整文件摘要（十六进制）
    #[serde(rename = "checkSum")]
    pub check_sum: String,
}
