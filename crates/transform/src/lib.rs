pub mod assembler;
pub mod resolver;

use tw2css_tw_index::{default_table, LookupTable};
use tw2css_tw_parse::group_tokens;

// Re-exports
pub use assembler::assemble;
pub use resolver::{match_arbitrary, resolve_group, ArbitraryMatch, UnmatchedReason};
pub use tw2css_core::{ConversionResult, ConvertError};

/// 使用内置查找表转换类名字符串
///
/// ```
/// let result = tw2css_transform::convert("p-4 w-[37px]").unwrap();
/// assert!(result.result_css.contains("padding: 1rem;"));
/// assert!(result.result_css.contains("width: 37px;"));
/// assert!(result.not_found.is_empty());
/// ```
pub fn convert(input: &str) -> Result<ConversionResult, ConvertError> {
    convert_with(input, default_table())
}

/// 使用指定查找表转换类名字符串
///
/// 流程：切分分组 → 每组解析一次 → 合并输出。
/// 空字符串直接返回空结果，不扫描查找表。
pub fn convert_with(input: &str, table: &LookupTable) -> Result<ConversionResult, ConvertError> {
    if input.is_empty() {
        return Ok(ConversionResult::empty());
    }

    let outputs = group_tokens(input)
        .into_iter()
        .map(|g| resolve_group(g.group, &g.tokens, table))
        .collect();

    let result = assemble(outputs, table)?;

    if !result.not_found.is_empty() {
        log::debug!("Classes not found: {:?}", result.not_found);
    }

    Ok(result)
}
