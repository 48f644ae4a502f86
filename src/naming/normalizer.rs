//! 单词规范化
//!
//! 汉字词先翻译为英文（失败则保留原文），再去除非字母数字字符并转小写。
//! 汉字始终保留：译文中未被翻译的汉字同样留在结果里。规范化为空的词直接丢弃。

use futures_util::stream::{self, StreamExt};

use crate::naming::tokenizer::Tokenizer;
use crate::naming::types::{Token, TokenKind};
use crate::translate::Translator;

/// 单词规范化器
pub struct WordNormalizer<'a> {
    translator: &'a dyn Translator,
    /// 同时进行的翻译请求上限
    concurrency: usize,
}

impl<'a> WordNormalizer<'a> {
    pub fn new(translator: &'a dyn Translator, concurrency: usize) -> Self {
        Self {
            translator,
            concurrency: concurrency.max(1),
        }
    }

    /// 规范化单个词
    ///
    /// 字母/数字词最多产出一个单词；汉字词的译文可能包含多个英文单词
    /// （"用户头像" → "user avatar" → user, avatar），按译文顺序展开
    pub async fn normalize(&self, token: &Token) -> Vec<String> {
        match token.kind {
            TokenKind::Latin | TokenKind::Digit => {
                clean_word(&token.text, false).into_iter().collect()
            }
            TokenKind::Cjk => match self.translate_or_fallback(&token.text).await {
                Some(translated) => translated
                    .split(|c: char| !c.is_alphanumeric())
                    .filter_map(|part| clean_word(part, true))
                    .collect(),
                None => clean_word(&token.text, true).into_iter().collect(),
            },
        }
    }

    /// 规范化整个序列
    ///
    /// 翻译可并发执行，结果仍按原始 token 顺序拼接
    pub async fn normalize_all(&self, tokens: &[Token]) -> Vec<String> {
        let per_token: Vec<Vec<String>> = stream::iter(tokens)
            .map(|token| self.normalize(token))
            .buffered(self.concurrency)
            .collect()
            .await;

        per_token.into_iter().flatten().collect()
    }

    /// 翻译汉字文本，失败或结果为空时返回 None
    async fn translate_or_fallback(&self, text: &str) -> Option<String> {
        match self.translator.translate(text).await {
            Ok(translated) if !translated.trim().is_empty() => Some(translated),
            Ok(_) => {
                tracing::warn!("翻译结果为空，保留原文: {}", text);
                None
            }
            Err(e) => {
                tracing::warn!("翻译失败，保留原文: {} ({})", text, e);
                None
            }
        }
    }
}

/// 去除非字母数字字符并转小写
///
/// `keep_cjk` 为 true 时保留汉字（汉字词及其译文）；结果为空返回 None
pub fn clean_word(text: &str, keep_cjk: bool) -> Option<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| {
            if Tokenizer::is_cjk(c) {
                keep_cjk
            } else {
                c.is_alphanumeric()
            }
        })
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
