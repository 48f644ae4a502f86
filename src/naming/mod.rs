//! 命名转换层
//!
//! 把任意文本（中英混排、驼峰、缩写、数字）转换为六种常见的标识符命名风格，
//! 并为图片重命名生成 `prefix_module[_feature].ext` 文件名。
//!
//! ## 处理流程
//! 1. Unicode 归一化 (NFC)
//! 2. 分词（分隔符/汉字/字母/数字/驼峰/缩写边界）
//! 3. 单词规范化（汉字翻译 → 去符号 → 小写）
//! 4. 风格渲染（camel/Pascal/snake/SCREAMING/package/kebab）

mod engine;
mod filename;
mod normalizer;
mod renderer;
mod tokenizer;
mod types;

pub use engine::NamingEngine;
pub use filename::{collapse_slug, normalize_extension, FilenameBuilder};
pub use normalizer::{clean_word, WordNormalizer};
pub use renderer::CaseRenderer;
pub use tokenizer::Tokenizer;
pub use types::{CaseStyle, NamingResult, Token, TokenKind};
