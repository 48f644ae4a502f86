// 远程翻译客户端
//
// 调用 Google 翻译的 gtx 公共接口，把中文片段翻译为英文。
// 单次请求，有超时，不重试；失败由调用方回退到原文。

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::TranslationConfig;
use crate::translate::{TranslateFuture, Translator};

/// Google 翻译客户端
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    config: TranslationConfig,
}

impl GoogleTranslator {
    pub fn new(config: TranslationConfig) -> Self {
        let client = create_http_client(&config);
        Self { client, config }
    }

    async fn request(&self, text: &str) -> Result<String> {
        tracing::debug!("请求翻译: {}", text);

        let response = self
            .client
            .get(self.config.endpoint.as_str())
            .query(&[
                ("client", "gtx"),
                ("sl", self.config.source_lang.as_str()),
                ("tl", self.config.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("翻译接口返回错误状态: {}", status);
        }

        let body: Value = response.json().await?;
        let translated = parse_google_response(&body)
            .ok_or_else(|| anyhow::anyhow!("无法解析翻译结果"))?;

        tracing::info!("翻译完成: {} -> {}", text, translated);
        Ok(translated)
    }
}

impl Translator for GoogleTranslator {
    fn translate<'a>(&'a self, text: &'a str) -> TranslateFuture<'a> {
        Box::pin(self.request(text))
    }
}

/// 创建带超时的 HTTP 客户端
fn create_http_client(config: &TranslationConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// 解析 gtx 接口响应
///
/// 响应形如 `[[["user avatar","用户头像",null,null,10]],null,"zh-CN"]`，
/// 译文为第一个元素中每个片段的首个字符串拼接
pub fn parse_google_response(body: &Value) -> Option<String> {
    let segments = body.as_array()?.first()?.as_array()?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.as_array()?.first()?.as_str())
        .collect();

    if translated.trim().is_empty() {
        None
    } else {
        Some(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 本地 HTTP 服务：记录连接数，读完请求后按需延迟再返回固定响应
    async fn local_server(response: String, delay: Duration) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let accepted = Arc::new(AtomicUsize::new(0));

        let counter = accepted.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let response = response.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = stream.read(&mut buf).await;
                    tokio::time::sleep(delay).await;
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        (format!("http://{}/translate_a/single", addr), accepted)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    fn translator_for(endpoint: String) -> GoogleTranslator {
        GoogleTranslator::new(TranslationConfig {
            endpoint,
            timeout_secs: 1,
            connect_timeout_secs: 1,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_request_success() {
        let body = r#"[[["user avatar","用户头像",null,null,10]],null,"zh-CN"]"#;
        let (endpoint, accepted) =
            local_server(http_response("200 OK", body), Duration::ZERO).await;

        let translated = translator_for(endpoint).translate("用户头像").await.unwrap();
        assert_eq!(translated, "user avatar");
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_times_out_without_retry() {
        let (endpoint, accepted) =
            local_server(http_response("200 OK", "[]"), Duration::from_secs(5)).await;

        let start = Instant::now();
        let result = translator_for(endpoint).translate("首页").await;

        assert!(result.is_err());
        assert!(start.elapsed() < Duration::from_secs(3));
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_error_status_fails() {
        let (endpoint, accepted) = local_server(
            http_response("500 Internal Server Error", ""),
            Duration::ZERO,
        )
        .await;

        let result = translator_for(endpoint).translate("首页").await;
        assert!(result.is_err());
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_parse_single_segment() {
        let body = json!([[["user avatar", "用户头像", null, null, 10]], null, "zh-CN"]);
        assert_eq!(parse_google_response(&body).as_deref(), Some("user avatar"));
    }

    #[test]
    fn test_parse_multiple_segments() {
        let body = json!([
            [["Voice room. ", "语音房。", null, null], ["Recharge", "充值", null, null]],
            null,
            "zh-CN"
        ]);
        assert_eq!(
            parse_google_response(&body).as_deref(),
            Some("Voice room. Recharge")
        );
    }

    #[test]
    fn test_parse_rejects_unexpected_shapes() {
        assert!(parse_google_response(&json!({"error": "quota"})).is_none());
        assert!(parse_google_response(&json!([])).is_none());
        assert!(parse_google_response(&json!([[]])).is_none());
        assert!(parse_google_response(&json!([[["", "通用"]]])).is_none());
    }
}
