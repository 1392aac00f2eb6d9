use indexmap::IndexMap;
use tw2css_core::ModifierGroup;

/// 按空白切分输入
///
/// 换行、制表符和连续空格都视为分隔符，空 token 被丢弃，重复项保留
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// 已分类的 token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken<'a> {
    pub group: ModifierGroup,
    /// 去掉修饰符前缀后的类名
    pub body: &'a str,
}

/// 判断 token 属于哪个分组
///
/// 只有完整的 `<key>:` 前缀才算修饰符，`hover-card` 或 `smooth:x` 都属于基础分组。
/// `sm:md:p-4` 只剥离第一层，剩下的 `md:p-4` 交给 `sm` 分组处理。
pub fn classify(token: &str) -> ClassifiedToken<'_> {
    for group in ModifierGroup::modified() {
        if let Some(body) = token
            .strip_prefix(group.type_tag())
            .and_then(|rest| rest.strip_prefix(':'))
        {
            return ClassifiedToken { group, body };
        }
    }

    ClassifiedToken {
        group: ModifierGroup::Base,
        body: token,
    }
}

/// 同一分组的 token 列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGroup {
    pub group: ModifierGroup,
    pub tokens: Vec<String>,
}

/// 切分并分组
///
/// 返回值第一项总是基础分组（可能为空），之后是非空的修饰符分组，
/// 顺序固定为 sm, md, lg, xl, 2xl, hover, disabled
pub fn group_tokens(input: &str) -> Vec<TokenGroup> {
    let mut base = Vec::new();
    let mut modified: IndexMap<ModifierGroup, Vec<String>> =
        ModifierGroup::modified().map(|g| (g, Vec::new())).collect();

    for token in tokenize(input) {
        let classified = classify(token);
        match modified.get_mut(&classified.group) {
            Some(tokens) => tokens.push(classified.body.to_string()),
            None => base.push(classified.body.to_string()),
        }
    }

    let mut groups = vec![TokenGroup {
        group: ModifierGroup::Base,
        tokens: base,
    }];
    groups.extend(
        modified
            .into_iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(group, tokens)| TokenGroup { group, tokens }),
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tw2css_core::{Breakpoint, PseudoClass};

    #[test]
    fn test_tokenize_any_whitespace() {
        let tokens: Vec<&str> = tokenize("  p-4\n\tm-2   p-4 \n").collect();
        assert_eq!(tokens, vec!["p-4", "m-2", "p-4"]);
    }

    #[test]
    fn test_classify_plain() {
        let c = classify("bg-red-500");
        assert_eq!(c.group, ModifierGroup::Base);
        assert_eq!(c.body, "bg-red-500");
    }

    #[test]
    fn test_classify_breakpoint() {
        let c = classify("md:p-4");
        assert_eq!(c.group, ModifierGroup::Breakpoint(Breakpoint::Md));
        assert_eq!(c.body, "p-4");
    }

    #[test]
    fn test_classify_2xl_is_not_xl() {
        let c = classify("2xl:p-4");
        assert_eq!(c.group, ModifierGroup::Breakpoint(Breakpoint::Xxl));
        assert_eq!(c.body, "p-4");
    }

    #[test]
    fn test_classify_pseudo() {
        let c = classify("disabled:opacity-50");
        assert_eq!(c.group, ModifierGroup::Pseudo(PseudoClass::Disabled));
        assert_eq!(c.body, "opacity-50");
    }

    #[test]
    fn test_classify_overlapping_prefix_stays_base() {
        // 以 "hover" / "sm" 开头但不是修饰符
        assert_eq!(classify("hover-card").group, ModifierGroup::Base);
        assert_eq!(classify("hoverable:p-4").group, ModifierGroup::Base);
        assert_eq!(classify("smooth").group, ModifierGroup::Base);
    }

    #[test]
    fn test_classify_unknown_modifier_stays_base() {
        let c = classify("focus:p-4");
        assert_eq!(c.group, ModifierGroup::Base);
        assert_eq!(c.body, "focus:p-4");
    }

    #[test]
    fn test_classify_chained_strips_first_only() {
        let c = classify("sm:hover:p-4");
        assert_eq!(c.group, ModifierGroup::Breakpoint(Breakpoint::Sm));
        assert_eq!(c.body, "hover:p-4");
    }

    #[test]
    fn test_group_tokens_order_and_skip_empty() {
        let groups = group_tokens("hover:bg-red-500 p-4 lg:m-2 sm:w-4 hover:p-2");
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.group.type_tag(), g.tokens.iter().map(|t| t.as_str()).collect()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("core", vec!["p-4"]),
                ("sm", vec!["w-4"]),
                ("lg", vec!["m-2"]),
                ("hover", vec!["bg-red-500", "p-2"]),
            ]
        );
    }

    #[test]
    fn test_group_tokens_empty_input_keeps_base() {
        let groups = group_tokens("");
        assert_eq!(groups.len(), 1);
        assert!(groups[0].group.is_base());
        assert!(groups[0].tokens.is_empty());
    }
}
