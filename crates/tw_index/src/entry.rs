use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 查找表中的一行
///
/// JSON 中是 2 或 3 个字符串组成的数组：
/// - `["p-4", "padding: 1rem;"]` → [`LookupEntry::Direct`]
/// - `["flex-grow", "grow", "flex-grow: 1"]` → [`LookupEntry::Aliased`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub enum LookupEntry {
    /// 第二列已经是完整的 CSS 声明
    Direct { short_name: String, css: String },
    /// 第二列是类名别名，第三列是 CSS 声明
    Aliased {
        short_name: String,
        alias: String,
        css: String,
    },
}

impl LookupEntry {
    pub fn direct(short_name: impl Into<String>, css: impl Into<String>) -> Self {
        LookupEntry::Direct {
            short_name: short_name.into(),
            css: css.into(),
        }
    }

    pub fn aliased(
        short_name: impl Into<String>,
        alias: impl Into<String>,
        css: impl Into<String>,
    ) -> Self {
        LookupEntry::Aliased {
            short_name: short_name.into(),
            alias: alias.into(),
            css: css.into(),
        }
    }

    pub fn short_name(&self) -> &str {
        match self {
            LookupEntry::Direct { short_name, .. } | LookupEntry::Aliased { short_name, .. } => {
                short_name
            }
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            LookupEntry::Direct { .. } => None,
            LookupEntry::Aliased { alias, .. } => Some(alias),
        }
    }

    /// 原始声明文本
    pub fn css(&self) -> &str {
        match self {
            LookupEntry::Direct { css, .. } | LookupEntry::Aliased { css, .. } => css,
        }
    }

    /// 输出用的声明文本
    ///
    /// Direct 行原样输出；Aliased 行缺少结尾分号时补上
    pub fn declaration(&self) -> Cow<'_, str> {
        match self {
            LookupEntry::Direct { css, .. } => Cow::Borrowed(css),
            LookupEntry::Aliased { css, .. } if css.ends_with(';') => Cow::Borrowed(css),
            LookupEntry::Aliased { css, .. } => Cow::Owned(format!("{};", css)),
        }
    }
}

/// 行的列数不是 2 或 3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
    pub arity: usize,
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lookup row must have 2 or 3 fields, got {}",
            self.arity
        )
    }
}

impl std::error::Error for EntryError {}

impl TryFrom<Vec<String>> for LookupEntry {
    type Error = EntryError;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        let arity = fields.len();
        let mut fields = fields.into_iter();
        match (fields.next(), fields.next(), fields.next(), arity) {
            (Some(short_name), Some(css), None, 2) => Ok(LookupEntry::Direct { short_name, css }),
            (Some(short_name), Some(alias), Some(css), 3) => Ok(LookupEntry::Aliased {
                short_name,
                alias,
                css,
            }),
            _ => Err(EntryError { arity }),
        }
    }
}

impl From<LookupEntry> for Vec<String> {
    fn from(entry: LookupEntry) -> Self {
        match entry {
            LookupEntry::Direct { short_name, css } => vec![short_name, css],
            LookupEntry::Aliased {
                short_name,
                alias,
                css,
            } => vec![short_name, alias, css],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_direct() {
        let entry: LookupEntry = serde_json::from_str(r#"["p-4", "padding: 1rem;"]"#).unwrap();
        assert_eq!(entry, LookupEntry::direct("p-4", "padding: 1rem;"));
        assert_eq!(entry.alias(), None);
    }

    #[test]
    fn test_deserialize_aliased() {
        let entry: LookupEntry =
            serde_json::from_str(r#"["flex-grow", "grow", "flex-grow: 1"]"#).unwrap();
        assert_eq!(entry.short_name(), "flex-grow");
        assert_eq!(entry.alias(), Some("grow"));
        assert_eq!(entry.css(), "flex-grow: 1");
    }

    #[test]
    fn test_deserialize_bad_arity() {
        let result: Result<LookupEntry, _> = serde_json::from_str(r#"["only-one"]"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("got 1"));

        let result: Result<LookupEntry, _> = serde_json::from_str(r#"["a", "b", "c", "d"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_declaration_semicolon() {
        assert_eq!(
            LookupEntry::aliased("flex-grow", "grow", "flex-grow: 1").declaration(),
            "flex-grow: 1;"
        );
        assert_eq!(
            LookupEntry::aliased("flex-shrink", "shrink", "flex-shrink: 1;").declaration(),
            "flex-shrink: 1;"
        );
        // Direct 行不做处理
        assert_eq!(
            LookupEntry::direct("sm", "@media (min-width: 640px) { ... }").declaration(),
            "@media (min-width: 640px) { ... }"
        );
    }

    #[test]
    fn test_serialize_back_to_array() {
        let json = serde_json::to_string(&LookupEntry::aliased("a", "b", "c: d")).unwrap();
        assert_eq!(json, r#"["a","b","c: d"]"#);
    }
}
