//! 词汇表翻译：用户自定义的固定译名优先于远程翻译

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::translate::{TranslateFuture, Translator};

pub struct GlossaryTranslator {
    glossary: BTreeMap<String, String>,
    fallback: Option<Arc<dyn Translator>>,
}

impl GlossaryTranslator {
    pub fn new(glossary: BTreeMap<String, String>, fallback: Option<Arc<dyn Translator>>) -> Self {
        Self { glossary, fallback }
    }
}

impl Translator for GlossaryTranslator {
    fn translate<'a>(&'a self, text: &'a str) -> TranslateFuture<'a> {
        Box::pin(async move {
            if let Some(hit) = self.glossary.get(text.trim()) {
                tracing::debug!("词汇表命中: {} -> {}", text, hit);
                return Ok(hit.clone());
            }
            match &self.fallback {
                Some(inner) => inner.translate(text).await,
                None => anyhow::bail!("词汇表未收录: {}", text),
            }
        })
    }
}
