//! 翻译能力
//!
//! 命名转换只通过 `Translator` 接口获取中文的英文释义，
//! 具体实现可替换（远程翻译、词汇表、缓存、测试桩）。

mod cache;
mod glossary;
mod google;

pub use cache::CachedTranslator;
pub use glossary::GlossaryTranslator;
pub use google::{parse_google_response, GoogleTranslator};

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use futures_util::future::BoxFuture;

use crate::config::TranslationConfig;

/// 翻译调用的返回值
pub type TranslateFuture<'a> = BoxFuture<'a, Result<String>>;

/// 文本翻译接口
///
/// 实现方可能失败或超时，调用方负责回退到原文
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, text: &'a str) -> TranslateFuture<'a>;
}

/// 关闭翻译时使用，总是返回错误，让调用方回退到原文
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTranslator;

impl Translator for DisabledTranslator {
    fn translate<'a>(&'a self, _text: &'a str) -> TranslateFuture<'a> {
        Box::pin(async { Err::<String, _>(anyhow::anyhow!("翻译已关闭")) })
    }
}

/// 按配置组装翻译链：词汇表 → (缓存) → 远程翻译
pub fn build_translator(
    config: &TranslationConfig,
    glossary: &BTreeMap<String, String>,
) -> Arc<dyn Translator> {
    let remote: Option<Arc<dyn Translator>> = if config.enabled {
        let google = GoogleTranslator::new(config.clone());
        if config.cache {
            Some(Arc::new(CachedTranslator::new(google)))
        } else {
            Some(Arc::new(google))
        }
    } else {
        tracing::info!("远程翻译已关闭，仅使用词汇表");
        None
    };

    Arc::new(GlossaryTranslator::new(glossary.clone(), remote))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_translator_always_fails() {
        assert!(DisabledTranslator.translate("通用").await.is_err());
    }

    #[tokio::test]
    async fn test_build_translator_offline_uses_glossary_only() {
        let config = TranslationConfig {
            enabled: false,
            ..Default::default()
        };
        let mut glossary = BTreeMap::new();
        glossary.insert("通用".to_string(), "common".to_string());

        let translator = build_translator(&config, &glossary);
        assert_eq!(translator.translate("通用").await.unwrap(), "common");
        assert!(translator.translate("首页").await.is_err());
    }
}
