// src/preview.rs
//
// 图片预览与拖拽文件暂存
//
// - 读取图片为 data URL，供界面直接显示
// - 把拖入的文件内容（base64）写入临时目录，得到可重命名的真实路径

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use std::path::{Path, PathBuf};

/// 暂存目录名（位于系统临时目录下）
const STAGING_DIR_NAME: &str = "image-renamer";

/// 根据扩展名判断 MIME 类型，未知扩展名按 png 处理
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/png",
    }
}

/// 读取图片并编码为 `data:<mime>;base64,<payload>`
pub fn image_data_url(path: &Path) -> Result<String> {
    let data = std::fs::read(path).with_context(|| format!("读取图片失败: {}", path.display()))?;
    let encoded = general_purpose::STANDARD.encode(&data);
    Ok(format!("data:{};base64,{}", mime_type_for(path), encoded))
}

/// 保存拖拽文件到系统临时目录
pub fn save_dropped_file(name: &str, data: &str) -> Result<PathBuf> {
    save_dropped_file_in(&std::env::temp_dir().join(STAGING_DIR_NAME), name, data)
}

/// 保存拖拽文件到指定暂存目录
///
/// `data` 可以是纯 base64，也可以是 `data:...;base64,` 形式的 data URL；
/// 每个文件写入独立的子目录，保持原文件名不变
pub fn save_dropped_file_in(staging_root: &Path, name: &str, data: &str) -> Result<PathBuf> {
    let file_name = Path::new(name)
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("无效的文件名: {}", name))?;

    let payload = match data.split_once(";base64,") {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => data,
    };
    let bytes = general_purpose::STANDARD
        .decode(payload.trim())
        .context("base64 解码失败")?;

    let dir = staging_root.join(uuid::Uuid::new_v4().to_string());
    std::fs::create_dir_all(&dir).context("创建临时目录失败")?;

    let path = dir.join(file_name);
    std::fs::write(&path, &bytes).context("写入临时文件失败")?;

    tracing::info!("拖拽文件已暂存: {:?} ({} bytes)", path, bytes.len());
    Ok(path)
}
