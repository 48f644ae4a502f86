//! 进度通知

use crate::rename::types::ProgressData;

/// 进度事件接收方（UI、日志等）
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, progress: &ProgressData);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressData) + Send + Sync,
{
    fn on_progress(&self, progress: &ProgressData) {
        self(progress)
    }
}

/// 将进度写入日志
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&self, progress: &ProgressData) {
        tracing::info!(
            "进度: {}/{} {}",
            progress.current,
            progress.total,
            progress.filename
        );
    }
}
