use crate::index::{Category, LookupTable};
use std::sync::OnceLock;

/// 内置速查表数据
const CHEATSHEET_JSON: &str = include_str!("../data/cheatsheet.json");

static DEFAULT_TABLE: OnceLock<LookupTable> = OnceLock::new();

/// 从 JSON 字符串加载查找表
///
/// JSON 格式示例：
/// ```json
/// [
///   {
///     "title": "Spacing",
///     "content": [
///       {
///         "title": "Padding",
///         "table": [
///           ["p-4", "padding: 1rem;"],
///           ["flex-grow", "grow", "flex-grow: 1"]
///         ]
///       }
///     ]
///   }
/// ]
/// ```
pub fn load_from_json(json_str: &str) -> Result<LookupTable, serde_json::Error> {
    let categories: Vec<Category> = serde_json::from_str(json_str)?;
    Ok(LookupTable::new(categories))
}

/// 内置查找表，进程内只解析一次
pub fn default_table() -> &'static LookupTable {
    DEFAULT_TABLE.get_or_init(|| {
        load_from_json(CHEATSHEET_JSON).expect("bundled cheatsheet.json must be a valid lookup table")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw2css_core::Breakpoint;

    #[test]
    fn test_load_from_json_basic() {
        let json = r#"[
            {
                "title": "Spacing",
                "content": [
                    {
                        "title": "Padding",
                        "description": "Utilities for controlling an element's padding.",
                        "table": [
                            ["p-4", "padding: 1rem;"],
                            ["m-2", "margin: 0.5rem;"]
                        ]
                    }
                ]
            }
        ]"#;

        let table = load_from_json(json).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.categories()[0].content[0].title, "Padding");
        assert!(table.rows().any(|r| r.short_name() == "m-2"));
    }

    #[test]
    fn test_load_from_json_invalid() {
        assert!(load_from_json("invalid json").is_err());
        // 行的列数不对
        assert!(load_from_json(r#"[{"title": "x", "content": [{"title": "y", "table": [["a"]]}]}]"#).is_err());
    }

    #[test]
    fn test_default_table_has_all_breakpoint_templates() {
        let table = default_table();
        assert!(!table.is_empty());

        for bp in Breakpoint::ALL {
            let template = table.breakpoint_template(bp).unwrap();
            assert!(template.starts_with("@media"));
            assert!(template.contains("..."));
        }
    }

    #[test]
    fn test_default_table_known_rows() {
        let table = default_table();
        let css_of = |name: &str| {
            table
                .rows()
                .find(|r| r.short_name() == name)
                .map(|r| r.css().to_string())
        };

        assert_eq!(css_of("p-4").as_deref(), Some("padding: 1rem;"));
        assert_eq!(css_of("text-center").as_deref(), Some("text-align: center;"));
        assert_eq!(css_of("bg-red-500").as_deref(), Some("background-color: #ef4444;"));
    }
}
