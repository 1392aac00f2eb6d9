use tw2css_core::{ConversionResult, ConvertError, GroupOutput, ModifierGroup, PseudoClass};
use tw2css_tw_index::index::TEMPLATE_PLACEHOLDER;
use tw2css_tw_index::LookupTable;

/// 合并各分组的输出
///
/// - 基础分组：原样追加
/// - 断点分组：声明缩进两格后替换模板中的 `...`
/// - 伪类分组：包在 `:<pseudo> { ... }` 中
///
/// 分组之间以空行分隔，结果去掉末尾空白。not_found 按分组顺序拼接，不去重。
pub fn assemble(outputs: Vec<GroupOutput>, table: &LookupTable) -> Result<ConversionResult, ConvertError> {
    let mut css = String::new();
    let mut not_found = Vec::new();

    for output in outputs {
        not_found.extend(output.not_found);
        css.push('\n');

        match output.group {
            ModifierGroup::Base => css.push_str(&output.css_code),
            ModifierGroup::Breakpoint(bp) => {
                let template = table
                    .breakpoint_template(bp)
                    .ok_or(ConvertError::MissingBreakpointTemplate(bp))?;
                css.push_str(&wrap_breakpoint(template, &output.css_code));
            }
            ModifierGroup::Pseudo(pseudo) => css.push_str(&wrap_pseudo(pseudo, &output.css_code)),
        }
    }

    Ok(ConversionResult {
        result_css: css.trim_end().to_string(),
        not_found,
    })
}

/// 把声明放进断点模板，只替换第一个占位符
fn wrap_breakpoint(template: &str, css_code: &str) -> String {
    let mut indented = String::from("\n");
    for line in css_code.lines() {
        indented.push_str("  ");
        indented.push_str(line);
        indented.push('\n');
    }
    template.replacen(TEMPLATE_PLACEHOLDER, &indented, 1)
}

fn wrap_pseudo(pseudo: PseudoClass, css_code: &str) -> String {
    format!("\n:{} {{\n {}}}", pseudo.key(), css_code)
}
