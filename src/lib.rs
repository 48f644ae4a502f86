pub mod config;
pub mod naming;
pub mod preview;
pub mod rename;
pub mod translate;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{AppConfig, CONFIG_LOCK};
use naming::{NamingEngine, NamingResult};
use rename::{ImageItem, ItemDefaults, ProgressSink, RenameReport};
use translate::Translator;

/// 应用状态
///
/// 持有配置和命名引擎，每个方法对应界面上的一个命令
pub struct RenamerApp {
    config: AppConfig,
    config_path: PathBuf,
    engine: NamingEngine,
}

impl RenamerApp {
    pub fn new(config: AppConfig, config_path: PathBuf, translator: Arc<dyn Translator>) -> Self {
        let engine = NamingEngine::new(translator, config.translation.concurrency);
        Self {
            config,
            config_path,
            engine,
        }
    }

    /// 加载配置并按配置组装翻译链
    ///
    /// # Arguments
    /// * `config_path` - 配置文件路径，None 使用默认位置
    /// * `offline` - 为 true 时不访问远程翻译，仅使用词汇表
    pub fn load(config_path: Option<PathBuf>, offline: bool) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => AppConfig::config_path()?,
        };
        let config = AppConfig::load_from(&config_path)?;

        let mut translation = config.translation.clone();
        if offline {
            translation.enabled = false;
        }
        let translator = translate::build_translator(&translation, &config.glossary);

        Ok(Self::new(config, config_path, translator))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    // ================== 模块/类型/输出目录 ==================

    pub fn modules(&self) -> &[String] {
        &self.config.modules
    }

    pub fn set_modules(&mut self, modules: Vec<String>) -> Result<()> {
        self.config.modules = clean_list(modules);
        self.persist()
    }

    pub fn types(&self) -> &[String] {
        &self.config.types
    }

    pub fn set_types(&mut self, types: Vec<String>) -> Result<()> {
        self.config.types = clean_list(types);
        self.persist()
    }

    /// 输出目录，None 表示在原目录重命名
    pub fn output_dir(&self) -> Option<&Path> {
        self.config.output_dir.as_deref()
    }

    pub fn set_output_dir(&mut self, dir: Option<PathBuf>) -> Result<()> {
        self.config.output_dir = dir.filter(|d| !d.as_os_str().is_empty());
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let _guard = CONFIG_LOCK
            .lock()
            .map_err(|_| anyhow::anyhow!("配置锁已损坏"))?;
        self.config.save_to(&self.config_path)
    }

    // ================== 命名 ==================

    /// 命名转换
    pub async fn convert_naming(&self, input: &str) -> NamingResult {
        self.engine.convert(input).await
    }

    /// 根据前缀/模块/功能名生成新文件名
    pub async fn update_item(&self, prefix: &str, module: &str, feature: &str, ext: &str) -> String {
        self.engine.filename(prefix, module, feature, ext).await
    }

    // ================== 图片收集与重命名 ==================

    fn item_defaults(&self) -> ItemDefaults {
        ItemDefaults {
            prefix: self.config.default_type().to_string(),
            module: self.config.default_module().to_string(),
        }
    }

    /// 由文件列表生成图片项
    pub async fn select_files(&self, paths: &[PathBuf]) -> Vec<ImageItem> {
        rename::items_from_paths(paths, &self.item_defaults(), &self.engine).await
    }

    /// 扫描文件夹生成图片项
    pub async fn select_folder(&self, dir: &Path) -> Result<Vec<ImageItem>> {
        rename::items_from_folder(dir, &self.item_defaults(), &self.engine).await
    }

    /// 图片预览（data URL）
    pub fn image_base64(&self, path: &Path) -> Result<String> {
        preview::image_data_url(path)
    }

    /// 暂存拖拽文件
    pub fn save_dropped_file(&self, name: &str, data: &str) -> Result<PathBuf> {
        preview::save_dropped_file(name, data)
    }

    /// 执行重命名
    pub fn execute_rename(&self, items: &[ImageItem], sink: &dyn ProgressSink) -> Result<RenameReport> {
        rename::execute_rename(items, self.output_dir(), sink)
    }
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
