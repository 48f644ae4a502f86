//! 命名转换类型定义

use serde::{Deserialize, Serialize};

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// 连续汉字
    Cjk,
    /// 连续字母
    Latin,
    /// 连续数字
    Digit,
}

/// 分词结果中的一个词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// 六种命名风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// 驼峰命名法 userAvatar
    Camel,
    /// 帕斯卡命名法 UserAvatar
    Pascal,
    /// 下划线小写 user_avatar
    Snake,
    /// 下划线大写 USER_AVATAR
    Screaming,
    /// 包名 user.avatar
    Package,
    /// 中横线 user-avatar
    Kebab,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Screaming,
        CaseStyle::Package,
        CaseStyle::Kebab,
    ];

    /// 获取风格的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camelCase",
            CaseStyle::Pascal => "PascalCase",
            CaseStyle::Snake => "snake_case",
            CaseStyle::Screaming => "SCREAMING_SNAKE",
            CaseStyle::Package => "package.case",
            CaseStyle::Kebab => "kebab-case",
        }
    }
}

/// 命名转换结果
///
/// 六个字段始终由同一组单词渲染而来
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingResult {
    pub camel_case: String,
    pub pascal_case: String,
    pub snake_case: String,
    pub screaming_case: String,
    pub package_case: String,
    pub kebab_case: String,
}

impl NamingResult {
    /// 按风格取值
    pub fn get(&self, style: CaseStyle) -> &str {
        match style {
            CaseStyle::Camel => &self.camel_case,
            CaseStyle::Pascal => &self.pascal_case,
            CaseStyle::Snake => &self.snake_case,
            CaseStyle::Screaming => &self.screaming_case,
            CaseStyle::Package => &self.package_case,
            CaseStyle::Kebab => &self.kebab_case,
        }
    }

    /// 是否为空结果（输入中没有可用单词）
    pub fn is_empty(&self) -> bool {
        self.camel_case.is_empty()
    }
}
