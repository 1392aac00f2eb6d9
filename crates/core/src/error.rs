use crate::types::Breakpoint;

/// 转换错误
///
/// 未匹配的类名不是错误，会作为数据出现在 `not_found` 中。
/// 这里只保留无法继续生成 CSS 的情况。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 查找表中缺少断点的 media query 模板
    MissingBreakpointTemplate(Breakpoint),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::MissingBreakpointTemplate(bp) => {
                write!(f, "No media query template for breakpoint '{}'", bp.key())
            }
        }
    }
}

impl std::error::Error for ConvertError {}
