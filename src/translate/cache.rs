//! 翻译结果缓存，只缓存成功结果

use std::collections::HashMap;
use std::sync::Mutex;

use crate::translate::{TranslateFuture, Translator};

pub struct CachedTranslator<T> {
    inner: T,
    cache: Mutex<HashMap<String, String>>,
}

impl<T: Translator> CachedTranslator<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn lookup(&self, text: &str) -> Option<String> {
        self.cache.lock().ok()?.get(text).cloned()
    }

    fn store(&self, text: &str, translated: &str) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(text.to_string(), translated.to_string());
        }
    }
}

impl<T: Translator> Translator for CachedTranslator<T> {
    fn translate<'a>(&'a self, text: &'a str) -> TranslateFuture<'a> {
        Box::pin(async move {
            if let Some(hit) = self.lookup(text) {
                tracing::debug!("翻译缓存命中: {}", text);
                return Ok(hit);
            }
            let translated = self.inner.translate(text).await;
            if let Ok(value) = &translated {
                self.store(text, value);
            }
            translated
        })
    }
}
