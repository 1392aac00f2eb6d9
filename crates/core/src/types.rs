use serde::Serialize;

/// 响应式断点（sm, md, lg, xl, 2xl）
///
/// 声明顺序即输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.key() == key)
    }
}

/// 伪类修饰符（hover, disabled）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PseudoClass {
    Hover,
    Disabled,
}

impl PseudoClass {
    pub const ALL: [PseudoClass; 2] = [PseudoClass::Hover, PseudoClass::Disabled];

    pub fn key(&self) -> &'static str {
        match self {
            PseudoClass::Hover => "hover",
            PseudoClass::Disabled => "disabled",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// 类名所属的分组
///
/// 每个输入 token 恰好属于一个分组，同组 token 一起解析
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierGroup {
    /// 无修饰符
    Base,
    /// `sm:` / `md:` / ...
    Breakpoint(Breakpoint),
    /// `hover:` / `disabled:`
    Pseudo(PseudoClass),
}

impl ModifierGroup {
    /// 所有带修饰符的分组，按输出顺序（先断点，后伪类）
    pub fn modified() -> impl Iterator<Item = ModifierGroup> {
        Breakpoint::ALL
            .into_iter()
            .map(ModifierGroup::Breakpoint)
            .chain(PseudoClass::ALL.into_iter().map(ModifierGroup::Pseudo))
    }

    /// 保留的修饰符关键字
    pub fn reserved_keys() -> impl Iterator<Item = &'static str> {
        Self::modified().map(|group| group.type_tag())
    }

    /// 分组类型标记：基础分组为 `"core"`，其余为修饰符关键字
    pub fn type_tag(&self) -> &'static str {
        match self {
            ModifierGroup::Base => "core",
            ModifierGroup::Breakpoint(bp) => bp.key(),
            ModifierGroup::Pseudo(pseudo) => pseudo.key(),
        }
    }

    /// 修饰符前缀（如 `"hover:"`），基础分组没有前缀
    pub fn prefix(&self) -> Option<String> {
        match self {
            ModifierGroup::Base => None,
            _ => Some(format!("{}:", self.type_tag())),
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self, ModifierGroup::Base)
    }
}

/// 单个分组的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOutput {
    pub group: ModifierGroup,
    /// 原始 CSS 声明，每行一条
    pub css_code: String,
    /// 未匹配的类名（修饰符分组会带上 `<key>:` 前缀）
    pub not_found: Vec<String>,
}

/// 整个输入的转换结果，序列化后交给 JS 侧
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub result_css: String,
    pub not_found: Vec<String>,
}

impl ConversionResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breakpoint_keys_round_trip() {
        for bp in Breakpoint::ALL {
            assert_eq!(Breakpoint::from_key(bp.key()), Some(bp));
        }
        assert_eq!(Breakpoint::from_key("3xl"), None);
    }

    #[test]
    fn test_modified_group_order() {
        let tags: Vec<&str> = ModifierGroup::modified().map(|g| g.type_tag()).collect();
        assert_eq!(tags, vec!["sm", "md", "lg", "xl", "2xl", "hover", "disabled"]);
    }

    #[test]
    fn test_base_group_tag_and_prefix() {
        assert_eq!(ModifierGroup::Base.type_tag(), "core");
        assert_eq!(ModifierGroup::Base.prefix(), None);
        assert_eq!(
            ModifierGroup::Pseudo(PseudoClass::Hover).prefix(),
            Some("hover:".to_string())
        );
    }

    #[test]
    fn test_conversion_result_serializes_camel_case() {
        let result = ConversionResult {
            result_css: "padding: 1rem;".to_string(),
            not_found: vec!["foo".to_string()],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"resultCss":"padding: 1rem;","notFound":["foo"]}"#);
    }
}
