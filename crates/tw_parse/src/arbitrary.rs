/// 任意值类名，如 `w-[13px]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitraryToken {
    /// `-[` 之前的属性别名（如 "w", "max-w"）
    pub alias: String,
    /// 方括号内的字面值（如 "13px"）
    pub value: String,
}

/// 任意值解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArbitraryError {
    NoBracket,
    UnmatchedBracket,
    MissingAlias,
}

impl std::fmt::Display for ArbitraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArbitraryError::NoBracket => write!(f, "No '[' in arbitrary value"),
            ArbitraryError::UnmatchedBracket => write!(f, "Unmatched bracket in arbitrary value"),
            ArbitraryError::MissingAlias => write!(f, "Missing property alias"),
        }
    }
}

impl std::error::Error for ArbitraryError {}

/// 解析任意值类名
///
/// - 别名：第一个 `-[` 之前的部分，去掉开头的 `.`
/// - 值：第一个 `[` 与其后第一个 `]` 之间的文本
///
/// ```
/// use tw2css_tw_parse::parse_arbitrary;
///
/// let token = parse_arbitrary("max-w-[37px]").unwrap();
/// assert_eq!(token.alias, "max-w");
/// assert_eq!(token.value, "37px");
/// ```
pub fn parse_arbitrary(token: &str) -> Result<ArbitraryToken, ArbitraryError> {
    let open = token.find('[').ok_or(ArbitraryError::NoBracket)?;
    let rest = &token[open + 1..];
    let close = rest.find(']').ok_or(ArbitraryError::UnmatchedBracket)?;

    // 空方括号也是合法的值
    let value = &rest[..close];

    // split 总会产生至少一段
    let head = token.split("-[").next().unwrap_or(token);
    let alias = head.strip_prefix('.').unwrap_or(head);
    if alias.is_empty() {
        return Err(ArbitraryError::MissingAlias);
    }

    Ok(ArbitraryToken {
        alias: alias.to_string(),
        value: value.to_string(),
    })
}
