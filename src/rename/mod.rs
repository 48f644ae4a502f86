// 批量图片重命名
//
// 收集图片 → 生成新文件名 → 复制/重命名（冲突时追加序号）→ 进度通知

mod executor;
mod progress;
mod scanner;
mod types;

pub use executor::{execute_rename, resolve_collision};
pub use progress::{LogProgress, ProgressSink};
pub use scanner::{
    extract_cjk, is_image_path, items_from_folder, items_from_paths, ItemDefaults,
    IMAGE_EXTENSIONS,
};
pub use types::{ImageItem, ProgressData, RenameOutcome, RenameReport};
