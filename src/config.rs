// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ============================================================================
// 全局配置操作锁
// ============================================================================

lazy_static::lazy_static! {
    /// 全局配置操作锁
    ///
    /// 保护所有 config 的读写操作，防止并发 load->modify->save 导致的数据丢失
    ///
    /// 使用方式：
    /// ```ignore
    /// let _guard = CONFIG_LOCK.lock().unwrap();
    /// let mut config = AppConfig::load()?;
    /// // 修改 config...
    /// config.save()?;
    /// ```
    pub static ref CONFIG_LOCK: Mutex<()> = Mutex::new(());
}

pub const APP_DIR_NAME: &str = "ImageRenamer";
pub const CONFIG_FILENAME: &str = "config.json";

/// 默认模块列表为空时使用的模块名
pub const FALLBACK_MODULE: &str = "通用";
/// 默认类型列表为空时使用的前缀
pub const FALLBACK_TYPE: &str = "icon";

fn default_modules() -> Vec<String> {
    ["通用", "动态", "首页", "用户", "聊天", "语音房", "充值", "活动"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_types() -> Vec<String> {
    ["icon", "bg", "img", "btn"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// 翻译配置
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_source_lang() -> String {
    "zh-CN".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_connect_timeout_secs() -> u64 {
    3
}

fn default_concurrency() -> usize {
    4
}

/// 远程翻译配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// 是否启用远程翻译（关闭后仅使用词汇表）
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 翻译接口地址
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// 单次请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 连接超时（秒）
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// 单次转换中同时进行的翻译请求上限
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// 是否在进程内缓存翻译结果
    #[serde(default = "default_true")]
    pub cache: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            concurrency: default_concurrency(),
            cache: true,
        }
    }
}

// ============================================================================
// 应用配置
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 模块列表（文件名第二段）
    #[serde(default = "default_modules")]
    pub modules: Vec<String>,
    /// 类型列表（文件名前缀）
    #[serde(default = "default_types")]
    pub types: Vec<String>,
    /// 输出目录，None 表示在原目录重命名
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub translation: TranslationConfig,
    /// 固定译名（如 通用 → common），优先于远程翻译
    #[serde(default)]
    pub glossary: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            modules: default_modules(),
            types: default_types(),
            output_dir: None,
            translation: TranslationConfig::default(),
            glossary: BTreeMap::new(),
        }
    }

    /// 默认模块（列表第一项）
    pub fn default_module(&self) -> &str {
        self.modules
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_MODULE)
    }

    /// 默认类型（列表第一项）
    pub fn default_type(&self) -> &str {
        self.types
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_TYPE)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join(APP_DIR_NAME);
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// 从指定路径加载配置，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::warn!("配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;

        tracing::info!("配置加载成功");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// 原子写入配置
    ///
    /// 写入 `config.json.tmp` 后替换正式文件，替换期间旧文件暂存为 `.bak`，
    /// 替换失败时放回原处
    pub fn save_to(&self, path: &Path) -> Result<()> {
        tracing::info!("保存配置到: {:?}", path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
        }

        let staged = path.with_extension("json.tmp");
        let backup = path.with_extension("json.bak");
        std::fs::write(&staged, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("写入临时文件失败: {}", staged.display()))?;

        let had_previous = path.exists();
        if had_previous {
            let _ = std::fs::remove_file(&backup);
            std::fs::rename(path, &backup).context("备份旧配置文件失败")?;
        }

        if let Err(e) = std::fs::rename(&staged, path) {
            if had_previous && std::fs::rename(&backup, path).is_err() {
                tracing::error!("恢复旧配置失败，备份保留在: {:?}", backup);
            }
            return Err(e).context("替换配置文件失败");
        }

        if had_previous {
            let _ = std::fs::remove_file(&backup);
        }
        tracing::info!("配置保存成功");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_should_match_builtin_lists() {
        let config = AppConfig::default();
        assert_eq!(config.default_module(), "通用");
        assert_eq!(config.default_type(), "icon");
        assert_eq!(config.modules.len(), 8);
        assert!(config.output_dir.is_none());
        assert!(config.translation.enabled);
    }

    #[test]
    fn empty_lists_should_fall_back() {
        let config = AppConfig {
            modules: Vec::new(),
            types: Vec::new(),
            ..AppConfig::default()
        };
        assert_eq!(config.default_module(), FALLBACK_MODULE);
        assert_eq!(config.default_type(), FALLBACK_TYPE);
    }

    #[test]
    fn load_missing_file_should_return_default() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let config = AppConfig::load_from(&temp.path().join("missing.json")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_should_fill_defaults() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, r#"{"types":["icon"],"translation":{"timeout_secs":2}}"#)
            .expect("write config");

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.types, vec!["icon"]);
        assert_eq!(config.modules, default_modules());
        assert_eq!(config.translation.timeout_secs, 2);
        assert_eq!(config.translation.concurrency, 4);
    }

    #[test]
    fn corrupt_file_should_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not json").expect("write config");
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn save_should_round_trip_and_leave_no_temp_files() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        let mut config = AppConfig::default();
        config.output_dir = Some(PathBuf::from("/tmp/out"));
        config
            .glossary
            .insert("通用".to_string(), "common".to_string());
        config.save_to(&path).expect("first save");

        config.types.push("avatar".to_string());
        config.save_to(&path).expect("second save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());
        assert!(!path.with_extension("json.bak").exists());
    }
}
