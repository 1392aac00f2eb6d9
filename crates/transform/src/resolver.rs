use std::collections::HashSet;
use tw2css_core::{GroupOutput, ModifierGroup};
use tw2css_tw_index::{get_arbitrary_property, LookupTable};
use tw2css_tw_parse::{parse_arbitrary, ArbitraryError};

/// 任意值类名的匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArbitraryMatch {
    Matched { declaration: String },
    Unmatched { reason: UnmatchedReason },
}

/// 任意值类名无法转换的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmatchedReason {
    /// 方括号语法不完整
    Malformed(ArbitraryError),
    /// 别名不在任意值属性表中
    UnsupportedProperty(String),
}

impl std::fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnmatchedReason::Malformed(err) => write!(f, "{}", err),
            UnmatchedReason::UnsupportedProperty(alias) => {
                write!(f, "Unsupported arbitrary property '{}'", alias)
            }
        }
    }
}

/// 为 `<alias>-[<value>]` 形式的类名生成声明
///
/// 例如：`w-[13px]` → `width: 13px;`
pub fn match_arbitrary(token: &str) -> ArbitraryMatch {
    let parsed = match parse_arbitrary(token) {
        Ok(parsed) => parsed,
        Err(err) => {
            return ArbitraryMatch::Unmatched {
                reason: UnmatchedReason::Malformed(err),
            }
        }
    };

    match get_arbitrary_property(&parsed.alias) {
        Some(property) => ArbitraryMatch::Matched {
            declaration: format!("{}: {};", property, parsed.value),
        },
        None => ArbitraryMatch::Unmatched {
            reason: UnmatchedReason::UnsupportedProperty(parsed.alias),
        },
    }
}

/// 解析一个分组内的所有类名
///
/// 1. 按顺序扫描查找表，短名或别名命中即输出该行声明
/// 2. 含 `[` 且未命中的类名尝试任意值语法
/// 3. 剩下的类名进入 not_found；以保留修饰符关键字开头的类名不上报
///
/// 第 3 步的过滤是近似规则：`small-box` 这类未知类名也会被静默丢弃
pub fn resolve_group(group: ModifierGroup, tokens: &[String], table: &LookupTable) -> GroupOutput {
    let wanted: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let mut found: HashSet<&str> = HashSet::new();
    let mut css_code = String::new();

    for entry in table.rows() {
        if let Some(&token) = wanted.get(entry.short_name()) {
            found.insert(token);
            css_code.push_str(&entry.declaration());
            css_code.push('\n');
        }

        if let Some(&token) = entry.alias().and_then(|alias| wanted.get(alias)) {
            found.insert(token);
            css_code.push_str(&entry.declaration());
            css_code.push('\n');
        }
    }

    for token in tokens.iter().filter(|t| t.contains('[')) {
        if found.contains(token.as_str()) {
            continue;
        }

        match match_arbitrary(token) {
            ArbitraryMatch::Matched { declaration } => {
                found.insert(token.as_str());
                css_code.push_str(&declaration);
                css_code.push('\n');
            }
            ArbitraryMatch::Unmatched { reason } => {
                log::debug!("Arbitrary class '{}' not converted: {}", token, reason);
            }
        }
    }

    let not_found = tokens
        .iter()
        .filter(|t| !found.contains(t.as_str()))
        .filter(|t| !ModifierGroup::reserved_keys().any(|key| t.starts_with(key)))
        .map(|t| match group.prefix() {
            Some(prefix) => format!("{}{}", prefix, t),
            None => t.clone(),
        })
        .collect();

    GroupOutput {
        group,
        css_code,
        not_found,
    }
}
