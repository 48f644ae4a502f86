//! 图片收集：从文件列表或文件夹生成待重命名的图片项

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::naming::{NamingEngine, Tokenizer};
use crate::rename::types::ImageItem;

/// 支持的图片扩展名（小写，不含点）
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// 新图片项的默认前缀和模块
#[derive(Debug, Clone)]
pub struct ItemDefaults {
    pub prefix: String,
    pub module: String,
}

/// 判断路径是否为支持的图片（按扩展名，不区分大小写）
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// 提取文件名（不含扩展名）中的汉字，作为默认功能名
pub fn extract_cjk(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.chars().filter(|&c| Tokenizer::is_cjk(c)).collect()
}

/// 由文件列表生成图片项，非图片文件跳过
pub async fn items_from_paths(
    paths: &[PathBuf],
    defaults: &ItemDefaults,
    engine: &NamingEngine,
) -> Vec<ImageItem> {
    let mut items = Vec::new();

    for path in paths {
        if !is_image_path(path) {
            tracing::debug!("跳过非图片文件: {:?}", path);
            continue;
        }
        let item = build_item(items.len(), path.clone(), defaults, engine).await;
        items.push(item);
    }

    tracing::info!("收集到 {} 张图片", items.len());
    items
}

/// 扫描文件夹（不递归），按文件名排序
pub async fn items_from_folder(
    dir: &Path,
    defaults: &ItemDefaults,
    engine: &NamingEngine,
) -> Result<Vec<ImageItem>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("读取文件夹失败: {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(items_from_paths(&paths, defaults, engine).await)
}

async fn build_item(
    id: usize,
    path: PathBuf,
    defaults: &ItemDefaults,
    engine: &NamingEngine,
) -> ImageItem {
    let orig_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    let feature_name = extract_cjk(&orig_name);
    let new_name = engine
        .filename(&defaults.prefix, &defaults.module, &feature_name, &extension)
        .await;

    ImageItem {
        id,
        orig_path: path,
        orig_name,
        prefix: defaults.prefix.clone(),
        module: defaults.module.clone(),
        feature_name,
        new_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::testing::StubTranslator;
    use std::sync::Arc;

    fn defaults() -> ItemDefaults {
        ItemDefaults {
            prefix: "icon".to_string(),
            module: "通用".to_string(),
        }
    }

    fn engine() -> NamingEngine {
        NamingEngine::with_translator(Arc::new(StubTranslator::new(&[
            ("通用", "common"),
            ("首页", "home"),
        ])))
    }

    #[test]
    fn is_image_path_should_ignore_case() {
        assert!(is_image_path(Path::new("a.PNG")));
        assert!(is_image_path(Path::new("dir/b.jpeg")));
        assert!(!is_image_path(Path::new("c.txt")));
        assert!(!is_image_path(Path::new("noext")));
    }

    #[test]
    fn extract_cjk_should_join_han_runs_from_stem() {
        assert_eq!(extract_cjk("首页_banner_背景.png"), "首页背景");
        assert_eq!(extract_cjk("plain.png"), "");
    }

    #[tokio::test]
    async fn items_from_paths_should_skip_non_images() {
        let paths = vec![
            PathBuf::from("/in/首页.PNG"),
            PathBuf::from("/in/readme.md"),
            PathBuf::from("/in/logo.webp"),
        ];
        let items = items_from_paths(&paths, &defaults(), &engine()).await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].feature_name, "首页");
        assert_eq!(items[0].new_name, "icon_common_home.png");
        assert_eq!(items[1].id, 1);
        assert_eq!(items[1].new_name, "icon_common.webp");
    }

    #[tokio::test]
    async fn items_from_folder_should_sort_and_skip_dirs() {
        let temp = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp.path().join("b.png"), b"b").unwrap();
        std::fs::write(temp.path().join("a.gif"), b"a").unwrap();
        std::fs::write(temp.path().join("notes.txt"), b"n").unwrap();
        std::fs::create_dir(temp.path().join("sub.png")).unwrap();

        let items = items_from_folder(temp.path(), &defaults(), &engine())
            .await
            .expect("scan folder");

        let names: Vec<_> = items.iter().map(|i| i.orig_name.as_str()).collect();
        assert_eq!(names, vec!["a.gif", "b.png"]);
        assert_eq!(items[0].new_name, "icon_common.gif");
    }

    #[tokio::test]
    async fn items_from_missing_folder_should_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let result = items_from_folder(&temp.path().join("missing"), &defaults(), &engine()).await;
        assert!(result.is_err());
    }
}
