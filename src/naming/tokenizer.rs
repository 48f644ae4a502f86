//! 命名分词器
//!
//! 将任意输入切分为语义单词：分隔符切分、汉字/字母/数字边界、
//! 驼峰边界（homeOrder → home | Order）、缩写边界（XMLParser → XML | Parser）

use crate::naming::types::{Token, TokenKind};

/// 分隔符：遇到即结束当前词，自身丢弃
const SEPARATORS: &[char] = &[
    ' ', '_', '-', '.', '/', '\\', ':', ';', ',', '(', ')', '[', ']', '{', '}', '<', '>', '|',
    '&', '!', '?', '@', '#', '$', '%', '^', '*', '+', '=', '\'', '"', '`', '~',
];

/// 汉字码位区间
const HAN_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF),
    (0x3400, 0x4DBF),
    (0x20000, 0x2CEAF),
    (0xF900, 0xFAFF),
];

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 缓冲区为空
    Idle,
    /// 缓冲区为连续字母
    InLatinRun,
    /// 缓冲区为连续数字
    InDigitRun,
}

/// 分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 分词
    ///
    /// 纯函数，不可失败；空输入或纯分隔符输入返回空序列
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(input);
        scanner.run();
        scanner.tokens
    }

    /// 判断是否为分隔符
    pub fn is_separator(ch: char) -> bool {
        SEPARATORS.contains(&ch)
    }

    /// 判断是否为汉字（基本区、扩展 A、扩展 B-F、兼容区）
    pub fn is_cjk(ch: char) -> bool {
        let code = ch as u32;
        HAN_RANGES
            .iter()
            .any(|&(start, end)| (start..=end).contains(&code))
    }

    /// 文本中是否包含 CJK 字符
    pub fn contains_cjk(text: &str) -> bool {
        text.chars().any(Self::is_cjk)
    }
}

/// 单趟从左到右扫描，持有游标和当前词缓冲区
struct Scanner {
    chars: Vec<char>,
    cursor: usize,
    state: ScanState,
    buffer: String,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
            state: ScanState::Idle,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) {
        while self.cursor < self.chars.len() {
            let ch = self.chars[self.cursor];

            if Tokenizer::is_separator(ch) {
                self.flush();
                self.cursor += 1;
            } else if Tokenizer::is_cjk(ch) {
                self.flush();
                self.consume_cjk_run();
            } else if ch.is_numeric() {
                self.push_digit(ch);
                self.cursor += 1;
            } else if ch.is_alphabetic() {
                self.push_letter(ch);
                self.cursor += 1;
            } else {
                // 未分类字符：结束当前词并丢弃
                self.flush();
                self.cursor += 1;
            }
        }

        self.flush();
    }

    /// 贪婪读取连续汉字，作为一个词输出
    fn consume_cjk_run(&mut self) {
        let start = self.cursor;
        while self.cursor < self.chars.len() && Tokenizer::is_cjk(self.chars[self.cursor]) {
            self.cursor += 1;
        }
        let run: String = self.chars[start..self.cursor].iter().collect();
        self.tokens.push(Token::new(run, TokenKind::Cjk));
    }

    fn push_digit(&mut self, ch: char) {
        if self.state == ScanState::InLatinRun {
            self.flush();
        }
        self.buffer.push(ch);
        self.state = ScanState::InDigitRun;
    }

    fn push_letter(&mut self, ch: char) {
        match self.state {
            ScanState::Idle => {}
            // 数字后的第一个字母只切分，不做驼峰判断（2ndPlace → 2 | nd | Place）
            ScanState::InDigitRun => self.flush(),
            ScanState::InLatinRun => {
                if let Some(last) = self.buffer.chars().last() {
                    if last.is_lowercase() && ch.is_uppercase() {
                        self.flush();
                    } else if last.is_uppercase()
                        && ch.is_uppercase()
                        && self.next_is_lowercase()
                        && self.buffer.chars().count() >= 2
                    {
                        // 缩写结束于当前字母之前：XML | Parser
                        self.flush();
                    }
                }
            }
        }
        self.buffer.push(ch);
        self.state = ScanState::InLatinRun;
    }

    /// 游标后一个字符是否为小写字母
    fn next_is_lowercase(&self) -> bool {
        self.chars
            .get(self.cursor + 1)
            .is_some_and(|c| c.is_lowercase())
    }

    fn flush(&mut self) {
        let kind = match self.state {
            ScanState::Idle => return,
            ScanState::InLatinRun => TokenKind::Latin,
            ScanState::InDigitRun => TokenKind::Digit,
        };
        let text = self.buffer.trim();
        if !text.is_empty() {
            self.tokens.push(Token::new(text, kind));
        }
        self.buffer.clear();
        self.state = ScanState::Idle;
    }
}
