// 批量重命名类型定义
//
// - 图片项 (ImageItem)
// - 进度事件 (ProgressData)
// - 执行报告 (RenameReport)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 图片项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub id: usize,
    /// 原文件完整路径
    pub orig_path: PathBuf,
    /// 原文件名
    pub orig_name: String,
    /// 类型前缀（icon/bg/img/btn）
    pub prefix: String,
    /// 模块名（可为中文）
    pub module: String,
    /// 功能名（可为中文，可为空）
    pub feature_name: String,
    /// 生成的新文件名
    pub new_name: String,
}

impl ImageItem {
    /// 原文件扩展名（小写，含前导点），无扩展名时为空
    pub fn extension(&self) -> String {
        self.orig_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default()
    }
}

/// 进度事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressData {
    pub current: usize,
    pub total: usize,
    pub filename: String,
}

/// 单个文件的处理结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOutcome {
    pub id: usize,
    pub orig_name: String,
    /// 成功时的最终路径
    pub destination: Option<PathBuf>,
    /// 失败原因
    pub error: Option<String>,
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 批量执行报告
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameReport {
    pub total: usize,
    pub success: usize,
    pub outcomes: Vec<RenameOutcome>,
}

/// 汇总信息中最多展示的错误条数
const MAX_REPORTED_ERRORS: usize = 5;

impl RenameReport {
    pub fn failed(&self) -> usize {
        self.total - self.success
    }

    /// 失败项的 "文件名: 原因" 列表
    pub fn failures(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| {
                o.error
                    .as_ref()
                    .map(|e| format!("{}: {}", o.orig_name, e))
            })
            .collect()
    }

    /// 汇总信息：成功/失败数量 + 前几条错误
    pub fn summary(&self) -> String {
        let mut msg = format!("成功: {}, 失败: {}", self.success, self.failed());
        let failures = self.failures();
        if !failures.is_empty() {
            let shown = failures.len().min(MAX_REPORTED_ERRORS);
            msg.push_str("\n\n错误:\n");
            msg.push_str(&failures[..shown].join("\n"));
        }
        msg
    }
}
