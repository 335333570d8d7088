use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml::Value;
use tracing::{info, warn};

use super::config_error::ConfigError;

/// 默认服务端地址
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// 默认单次请求超时（毫秒）
pub const DEFAULT_TIME_OUT_MS: u64 = 60_000;

/// 默认重试次数（不含首次请求）
pub const DEFAULT_RETRIES_NUMBER: u32 = 3;

/// 默认接收目录
pub const DEFAULT_INCOMING_DIR: &str = "in";

/// 客户端配置
///
/// 由宿主程序加载后交给 [`crate::session::TransferSession::from_config`]，传输核心只消费已校验的值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server_url: String,
    pub time_out_ms: u64,
    pub retries_number: u32,
    pub incoming_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            time_out_ms: DEFAULT_TIME_OUT_MS,
            retries_number: DEFAULT_RETRIES_NUMBER,
            incoming_dir: PathBuf::from(DEFAULT_INCOMING_DIR),
        }
    }
}

/// 配置文件原始内容；数值项用 `Value` 承载，非法值只告警不报错
#[derive(Debug, Default, Deserialize)]
struct RawClientConfig {
    server_url: Option<String>,
    time_out_ms: Option<Value>,
    retries_number: Option<Value>,
    incoming_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// 读取配置文件并与默认值合并；文件不存在时写出一份默认配置。
    ///
    /// - 读取失败（非不存在）只告警，返回默认值
    /// - TOML 格式错误返回 [`ConfigError::Parse`]
    pub fn load_or_init(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|source| {
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                config.save_defaults(path);
                Ok(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "读取配置文件失败，使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 解析 TOML 文本，合并到默认配置上。
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawClientConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(server_url) = raw.server_url {
            config.server_url = server_url.trim().to_string();
        }
        if let Some(ms) = raw.time_out_ms.as_ref().and_then(|v| positive_int("time_out_ms", v)) {
            config.time_out_ms = ms;
        }
        if let Some(n) = raw
            .retries_number
            .as_ref()
            .and_then(|v| positive_int("retries_number", v))
        {
            match u32::try_from(n) {
                Ok(n) => config.retries_number = n,
                Err(_) => warn!(value = n, "retries_number 超出范围，使用默认值"),
            }
        }
        if let Some(dir) = raw.incoming_dir {
            config.incoming_dir = dir;
        }

        Ok(config)
    }

    fn save_defaults(&self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(dir = %parent.display(), error = %e, "创建配置目录失败");
                return;
            }
        }

        let content = match toml::to_string_pretty(self) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "序列化默认配置失败");
                return;
            }
        };

        match fs::write(path, content) {
            Ok(()) => info!(path = %path.display(), "已写出默认配置"),
            Err(e) => warn!(path = %path.display(), error = %e, "保存配置文件失败"),
        }
    }
}

/// 正整数校验；兼容旧版 properties 风格的字符串数值
fn positive_int(key: &str, value: &Value) -> Option<u64> {
    let parsed = match value {
        Value::Integer(n) => u64::try_from(*n).ok(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match parsed.filter(|n| *n > 0) {
        Some(n) => Some(n),
        None => {
            warn!(key, value = %value, "配置项不是正整数，已忽略");
            None
        }
    }
}
