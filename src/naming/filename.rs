//! 文件名生成
//!
//! `prefix_module[_feature].ext`：模块名和功能名各自翻译并压缩为单个 slug

use crate::naming::tokenizer::Tokenizer;
use crate::translate::Translator;

/// 文件名生成器
pub struct FilenameBuilder<'a> {
    translator: &'a dyn Translator,
}

impl<'a> FilenameBuilder<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    /// 生成新文件名
    ///
    /// `extension` 可带或不带前导点；功能名为空时省略该段
    pub async fn build(&self, prefix: &str, module: &str, feature: &str, extension: &str) -> String {
        let mut segments = vec![prefix.trim().to_string()];
        segments.push(self.slug(module).await);
        if !feature.trim().is_empty() {
            segments.push(self.slug(feature).await);
        }
        segments.retain(|s| !s.is_empty());

        format!("{}{}", segments.join("_"), normalize_extension(extension))
    }

    /// 翻译（如含中文）后压缩为 slug
    pub async fn slug(&self, text: &str) -> String {
        let source = if Tokenizer::contains_cjk(text) {
            match self.translator.translate(text).await {
                Ok(translated) if !translated.trim().is_empty() => translated,
                Ok(_) => text.to_string(),
                Err(e) => {
                    tracing::warn!("翻译失败，使用原文生成文件名: {} ({})", text, e);
                    text.to_string()
                }
            }
        } else {
            text.to_string()
        };

        collapse_slug(&source)
    }
}

/// 小写化，连续的非字母数字字符替换为单个 `_`，并去掉首尾 `_`
pub fn collapse_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// 扩展名统一为 `.ext` 形式，空扩展名保持为空
pub fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(".{}", trimmed)
    }
}
