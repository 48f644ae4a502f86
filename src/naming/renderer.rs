//! 命名风格渲染
//!
//! 所有风格都从同一组已规范化的单词渲染，不会各自重新分词

use crate::naming::types::{CaseStyle, NamingResult};

/// 渲染器
pub struct CaseRenderer;

impl CaseRenderer {
    /// 渲染全部六种风格；空输入返回全空结果
    pub fn render<S: AsRef<str>>(words: &[S]) -> NamingResult {
        if words.is_empty() {
            return NamingResult::default();
        }

        NamingResult {
            camel_case: Self::render_style(words, CaseStyle::Camel),
            pascal_case: Self::render_style(words, CaseStyle::Pascal),
            snake_case: Self::render_style(words, CaseStyle::Snake),
            screaming_case: Self::render_style(words, CaseStyle::Screaming),
            package_case: Self::render_style(words, CaseStyle::Package),
            kebab_case: Self::render_style(words, CaseStyle::Kebab),
        }
    }

    /// 渲染单一风格
    pub fn render_style<S: AsRef<str>>(words: &[S], style: CaseStyle) -> String {
        let words = words.iter().map(|w| w.as_ref());
        match style {
            CaseStyle::Camel => words
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_string() } else { capitalize(w) })
                .collect(),
            CaseStyle::Pascal => words.map(capitalize).collect(),
            CaseStyle::Snake => words.collect::<Vec<_>>().join("_"),
            CaseStyle::Screaming => words
                .map(str::to_uppercase)
                .collect::<Vec<_>>()
                .join("_"),
            CaseStyle::Package => words.collect::<Vec<_>>().join("."),
            CaseStyle::Kebab => words.collect::<Vec<_>>().join("-"),
        }
    }
}

/// 首字母大写，其余字符保持不变
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(CaseRenderer::render(&empty), NamingResult::default());
    }

    #[test]
    fn test_render_all_styles() {
        let result = CaseRenderer::render(&["user", "avatar", "2x"]);
        assert_eq!(result.camel_case, "userAvatar2x");
        assert_eq!(result.pascal_case, "UserAvatar2x");
        assert_eq!(result.snake_case, "user_avatar_2x");
        assert_eq!(result.screaming_case, "USER_AVATAR_2X");
        assert_eq!(result.package_case, "user.avatar.2x");
        assert_eq!(result.kebab_case, "user-avatar-2x");
    }

    #[test]
    fn test_render_single_word() {
        let result = CaseRenderer::render(&["home"]);
        assert_eq!(result.camel_case, "home");
        assert_eq!(result.pascal_case, "Home");
        assert_eq!(result.snake_case, "home");
        assert_eq!(result.screaming_case, "HOME");
    }

    #[test]
    fn test_render_only_touches_first_char() {
        // 渲染器不会重新处理单词其余部分的大小写
        assert_eq!(
            CaseRenderer::render_style(&["parse", "xML"], CaseStyle::Camel),
            "parseXML"
        );
        assert_eq!(
            CaseRenderer::render_style(&["首页", "banner"], CaseStyle::Pascal),
            "首页Banner"
        );
    }

    #[test]
    fn test_render_is_deterministic_and_consistent() {
        let words = vec!["voice".to_string(), "room".to_string(), "gift".to_string()];
        let first = CaseRenderer::render(&words);
        let second = CaseRenderer::render(&words);
        assert_eq!(first, second);
        assert_eq!(first.snake_case.matches('_').count(), words.len() - 1);
        assert_eq!(first.kebab_case.matches('-').count(), words.len() - 1);
        for style in CaseStyle::ALL {
            assert_eq!(first.get(style), CaseRenderer::render_style(&words, style));
        }
    }
}
