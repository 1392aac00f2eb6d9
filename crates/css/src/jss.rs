//! CSS 文本 → 嵌套对象（JSS 风格）
//!
//! 顶层按规则体解析，所以裸声明、选择器规则和 at-rule 可以混在一起：
//!
//! ```css
//! padding: 1rem;
//!
//! @media (min-width: 640px) {
//!   text-align: center;
//! }
//!
//! :hover {
//!   background-color: #ef4444;
//! }
//! ```
//!
//! 输出：
//!
//! ```json
//! {"padding":"1rem","@media (min-width: 640px)":{"textAlign":"center"},":hover":{"backgroundColor":"#ef4444"}}
//! ```

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, ParseError, ParseErrorKind,
    Parser, ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    Token,
};
use serde_json::{Map, Number, Value};

use crate::naming::{is_unitless, property_key};

/// 转换结果：键保持插入顺序
pub type JssObject = Map<String, Value>;

/// CSS 解析失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JssError {
    /// 从 1 开始
    pub line: u32,
    /// 从 1 开始
    pub column: u32,
    pub message: String,
}

impl JssError {
    fn from_parse_error(err: ParseError<'_, ()>) -> Self {
        let message = match err.kind {
            ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
                format!("Unexpected token {:?}", token)
            }
            ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
                "Unexpected end of input".to_string()
            }
            ParseErrorKind::Basic(kind) => format!("{:?}", kind),
            ParseErrorKind::Custom(()) => "Invalid rule".to_string(),
        };

        Self {
            line: err.location.line + 1,
            column: err.location.column,
            message,
        }
    }
}

impl std::fmt::Display for JssError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

impl std::error::Error for JssError {}

/// 解析 CSS 并生成嵌套对象
pub fn css_to_object(css: &str) -> Result<JssObject, JssError> {
    check_blocks_closed(css)?;

    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    parse_body(&mut parser).map_err(JssError::from_parse_error)
}

/// 解析 CSS 并序列化为对象字面量文本
///
/// 解析失败时记录日志并返回 `None`，不影响主 CSS 输出
pub fn css_to_object_literal(css: &str) -> Option<String> {
    let object = match css_to_object(css) {
        Ok(object) => object,
        Err(err) => {
            log::warn!("Failed to convert CSS to object: {}", err);
            return None;
        }
    };

    serde_json::to_string(&object)
        .map_err(|err| log::warn!("Failed to serialize CSS object: {}", err))
        .ok()
}

/// 输入末尾的闭合符号，最多只能闭合一个块
struct SourceEnd {
    len: usize,
    closer: Option<char>,
}

/// 检查所有 `{}` `()` `[]` 都已闭合
///
/// cssparser 会在输入结束时隐式闭合未结束的块，这里把这种情况当作错误。
/// 到达输入末尾的块里只有最内层的那个可能被最后一个字符闭合。
fn check_blocks_closed(css: &str) -> Result<(), JssError> {
    let mut end = SourceEnd {
        len: css.len(),
        closer: css.chars().last(),
    };
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    scan_blocks(&mut parser, &mut end).map_err(|err| match err.kind {
        ParseErrorKind::Custom(err) => err,
        ParseErrorKind::Basic(kind) => JssError {
            line: err.location.line + 1,
            column: err.location.column,
            message: format!("{:?}", kind),
        },
    })
}

fn scan_blocks<'i>(
    input: &mut Parser<'i, '_>,
    end: &mut SourceEnd,
) -> Result<(), ParseError<'i, JssError>> {
    loop {
        let closer = match input.next_including_whitespace_and_comments() {
            Ok(Token::CurlyBracketBlock) => '}',
            Ok(Token::ParenthesisBlock) | Ok(Token::Function(_)) => ')',
            Ok(Token::SquareBracketBlock) => ']',
            Ok(_) => continue,
            Err(_) => return Ok(()),
        };

        input.parse_nested_block(|nested| scan_blocks(nested, end))?;

        if input.position().byte_index() == end.len {
            if end.closer == Some(closer) {
                end.closer = None;
            } else {
                let location = input.current_source_location();
                return Err(input.new_custom_error(JssError {
                    line: location.line + 1,
                    column: location.column,
                    message: format!("Unclosed block, expected '{}'", closer),
                }));
            }
        }
    }
}

/// 规则体中的一项
enum Node {
    Declaration { key: String, value: Value },
    Rule { selector: String, body: JssObject },
    AtRule { key: String, body: Option<JssObject> },
}

fn parse_body<'i, 't>(input: &mut Parser<'i, 't>) -> Result<JssObject, ParseError<'i, ()>> {
    let mut body_parser = BodyParser;
    let mut object = JssObject::new();

    for item in RuleBodyParser::new(input, &mut body_parser) {
        let node = item.map_err(|(err, _)| err)?;
        insert_node(&mut object, node);
    }

    Ok(object)
}

fn insert_node(object: &mut JssObject, node: Node) {
    match node {
        Node::Declaration { key, value } => push_value(object, key, value),
        Node::AtRule { key, body } => {
            let value = body.map(Value::Object).unwrap_or(Value::Bool(true));
            push_value(object, key, value);
        }
        Node::Rule { selector, body } => match object.get_mut(&selector) {
            // 重复的选择器合并到第一次出现的对象里
            Some(Value::Object(existing)) => {
                for (key, value) in body {
                    existing.insert(key, value);
                }
            }
            _ => {
                object.insert(selector, Value::Object(body));
            }
        },
    }
}

/// 同名键出现多次时转为数组
fn push_value(object: &mut JssObject, key: String, value: Value) {
    match object.get_mut(&key) {
        None => {
            object.insert(key, value);
        }
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// 声明值：`!important` 保留为后缀，无单位属性的数字转成数值
fn declaration_value(key: &str, raw: &str) -> Value {
    let (value, important) = split_important(raw);
    if important {
        return Value::String(format!("{} !important", value));
    }

    if is_unitless(key) {
        if let Ok(n) = value.parse::<i64>() {
            return Value::Number(n.into());
        }
        if let Some(n) = value.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }

    Value::String(value.to_string())
}

fn split_important(raw: &str) -> (&str, bool) {
    // ASCII 小写不改变字节位置
    let lower = raw.to_ascii_lowercase();
    if let Some(idx) = lower.rfind('!') {
        if lower[idx + 1..].trim() == "important" {
            return (raw[..idx].trim_end(), true);
        }
    }
    (raw, false)
}

/// 声明值中不允许出现的 token
fn is_invalid_value_token(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::CurlyBracketBlock
            | Token::CloseCurlyBracket
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::BadString(_)
            | Token::BadUrl(_)
    )
}

/// 读到当前块结束，返回去掉首尾空白的原文
fn consume_raw<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start).trim()
}

struct BodyParser;

impl<'i> DeclarationParser<'i> for BodyParser {
    type Declaration = Node;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();

        loop {
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            if is_invalid_value_token(&token) {
                return Err(input.new_unexpected_token_error(token));
            }
        }

        let key = property_key(&name);
        let value = declaration_value(&key, input.slice_from(start).trim());
        Ok(Node::Declaration { key, value })
    }
}

impl<'i> QualifiedRuleParser<'i> for BodyParser {
    type Prelude = String;
    type QualifiedRule = Node;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selector = consume_raw(input);
        if selector.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(selector.to_string())
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let body = parse_body(input)?;
        Ok(Node::Rule { selector, body })
    }
}

impl<'i> AtRuleParser<'i> for BodyParser {
    type Prelude = String;
    type AtRule = Node;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let params = consume_raw(input);
        if params.is_empty() {
            Ok(format!("@{}", name))
        } else {
            Ok(format!("@{} {}", name, params))
        }
    }

    fn parse_block<'t>(
        &mut self,
        key: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let body = parse_body(input)?;
        Ok(Node::AtRule {
            key,
            body: Some(body),
        })
    }

    fn rule_without_block(
        &mut self,
        key: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(Node::AtRule { key, body: None })
    }
}

impl<'i> RuleBodyItemParser<'i, Node, ()> for BodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        true
    }
}
