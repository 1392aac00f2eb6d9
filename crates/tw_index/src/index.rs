use crate::entry::LookupEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tw2css_core::Breakpoint;

/// 断点模板中被替换的占位符
pub const TEMPLATE_PLACEHOLDER: &str = "...";

/// 速查表的一个大类（如 "Layout"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub content: Vec<Section>,
}

/// 大类下的一个小节（如 "Padding"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub table: Vec<LookupEntry>,
}

/// 类名查找表
///
/// 只读；解析器按行顺序扫描。断点模板按名字索引，不依赖行的位置。
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    categories: Vec<Category>,
    templates: HashMap<Breakpoint, String>,
}

impl LookupTable {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut templates = HashMap::new();

        for entry in categories
            .iter()
            .flat_map(|c| c.content.iter())
            .flat_map(|s| s.table.iter())
        {
            if let LookupEntry::Direct { short_name, css } = entry {
                if !css.contains(TEMPLATE_PLACEHOLDER) {
                    continue;
                }
                if let Some(bp) = Breakpoint::from_key(short_name) {
                    // 同名模板以第一行为准
                    templates.entry(bp).or_insert_with(|| css.clone());
                }
            }
        }

        Self {
            categories,
            templates,
        }
    }

    /// 由一组行构建单节查找表，便于测试时注入最小数据
    pub fn from_rows(rows: Vec<LookupEntry>) -> Self {
        Self::new(vec![Category {
            title: "Custom".to_string(),
            content: vec![Section {
                title: "Custom".to_string(),
                description: None,
                table: rows,
            }],
        }])
    }

    /// 按表中顺序遍历所有行
    pub fn rows(&self) -> impl Iterator<Item = &LookupEntry> {
        self.categories
            .iter()
            .flat_map(|c| c.content.iter())
            .flat_map(|s| s.table.iter())
    }

    /// 断点对应的 media query 模板（含 `...` 占位符）
    pub fn breakpoint_template(&self, bp: Breakpoint) -> Option<&str> {
        self.templates.get(&bp).map(|s| s.as_str())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().next().is_none()
    }
}
