//! 命名转换主引擎
//!
//! 组合 Unicode 归一化、分词、单词规范化和风格渲染

use std::sync::Arc;
use std::time::Instant;
use unicode_normalization::UnicodeNormalization;

use crate::naming::filename::FilenameBuilder;
use crate::naming::normalizer::WordNormalizer;
use crate::naming::renderer::CaseRenderer;
use crate::naming::tokenizer::Tokenizer;
use crate::naming::types::NamingResult;
use crate::translate::Translator;

/// 默认翻译并发数
const DEFAULT_CONCURRENCY: usize = 4;

/// 命名引擎（可复用，线程安全）
#[derive(Clone)]
pub struct NamingEngine {
    translator: Arc<dyn Translator>,
    concurrency: usize,
}

impl NamingEngine {
    /// 创建命名引擎
    ///
    /// # Arguments
    /// * `translator` - 汉字翻译能力
    /// * `concurrency` - 单次转换中同时进行的翻译请求上限
    pub fn new(translator: Arc<dyn Translator>, concurrency: usize) -> Self {
        Self {
            translator,
            concurrency: concurrency.max(1),
        }
    }

    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self::new(translator, DEFAULT_CONCURRENCY)
    }

    /// 输入文本 → 规范化单词序列
    pub async fn words(&self, input: &str) -> Vec<String> {
        let normalized: String = input.nfc().collect();
        let tokens = Tokenizer::tokenize(&normalized);
        tracing::debug!("分词结果: {:?}", tokens);

        WordNormalizer::new(self.translator.as_ref(), self.concurrency)
            .normalize_all(&tokens)
            .await
    }

    /// 命名转换
    ///
    /// 不可失败：翻译失败时保留原文，无有效单词时返回全空结果
    pub async fn convert(&self, input: &str) -> NamingResult {
        let start = Instant::now();
        let words = self.words(input).await;
        let result = CaseRenderer::render(&words);

        tracing::info!(
            "命名转换完成: {:?} -> {:?} ({}us)",
            input,
            words,
            start.elapsed().as_micros()
        );
        result
    }

    /// 生成 `prefix_module[_feature].ext` 文件名
    pub async fn filename(&self, prefix: &str, module: &str, feature: &str, extension: &str) -> String {
        let module: String = module.nfc().collect();
        let feature: String = feature.nfc().collect();
        FilenameBuilder::new(self.translator.as_ref())
            .build(prefix, &module, &feature, extension)
            .await
    }
}
