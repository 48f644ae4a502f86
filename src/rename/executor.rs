//! 批量重命名执行
//!
//! 设置了输出目录时复制到输出目录，否则在原目录内重命名。
//! 单个文件失败不影响其余文件，失败原因汇总到报告中。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::rename::progress::ProgressSink;
use crate::rename::types::{ImageItem, ProgressData, RenameOutcome, RenameReport};

/// 执行批量重命名
pub fn execute_rename(
    items: &[ImageItem],
    output_dir: Option<&Path>,
    sink: &dyn ProgressSink,
) -> Result<RenameReport> {
    if items.is_empty() {
        anyhow::bail!("没有图片");
    }

    let total = items.len();
    tracing::info!("[ExecuteRename] 开始执行重命名，总数: {}", total);

    let mut report = RenameReport {
        total,
        ..Default::default()
    };

    for (i, item) in items.iter().enumerate() {
        tracing::info!(
            "[ExecuteRename] 处理文件 {}/{}: {} -> {}",
            i + 1,
            total,
            item.orig_name,
            item.new_name
        );

        let outcome = match process_item(item, output_dir) {
            Ok(destination) => {
                report.success += 1;
                RenameOutcome {
                    id: item.id,
                    orig_name: item.orig_name.clone(),
                    destination: Some(destination),
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("[ExecuteRename]   错误: {:#}", e);
                RenameOutcome {
                    id: item.id,
                    orig_name: item.orig_name.clone(),
                    destination: None,
                    error: Some(format!("{:#}", e)),
                }
            }
        };
        report.outcomes.push(outcome);

        sink.on_progress(&ProgressData {
            current: i + 1,
            total,
            filename: item.orig_name.clone(),
        });
    }

    tracing::info!(
        "[ExecuteRename] 执行完成 - 成功: {}, 失败: {}",
        report.success,
        report.failed()
    );
    Ok(report)
}

/// 处理单个文件，返回最终路径
fn process_item(item: &ImageItem, output_dir: Option<&Path>) -> Result<PathBuf> {
    let target_dir = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).context("创建目录失败")?;
            dir.to_path_buf()
        }
        None => item
            .orig_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let mut dest_path = target_dir.join(&item.new_name);
    tracing::debug!("[ExecuteRename]   目标路径: {:?}", dest_path);

    if dest_path == item.orig_path {
        tracing::info!("[ExecuteRename]   跳过: 原路径和目标路径相同");
        return Ok(dest_path);
    }

    if dest_path.exists() {
        dest_path = resolve_collision(&dest_path);
        tracing::info!("[ExecuteRename]   文件名冲突，新目标路径: {:?}", dest_path);
    }

    if output_dir.is_some() {
        std::fs::copy(&item.orig_path, &dest_path).context("复制失败")?;
        tracing::info!("[ExecuteRename]   成功: 复制完成");
    } else {
        std::fs::rename(&item.orig_path, &dest_path).context("重命名失败")?;
        tracing::info!("[ExecuteRename]   成功: 重命名完成");
    }

    Ok(dest_path)
}

/// 目标已存在时在扩展名前追加 `_1`、`_2`……直到找到未占用的路径
pub fn resolve_collision(dest: &Path) -> PathBuf {
    if !dest.exists() {
        return dest.to_path_buf();
    }

    let dir = dest.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = dest
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, counter, ext));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
