/// CSS → JSS 对象示例
///
/// 运行示例：
/// ```bash
/// cargo run --example css_to_jss -p tw2css-css
/// ```
use tw2css_css::css_to_object_literal;
use tw2css_transform::convert;

fn main() {
    println!("=== CSS → JSS 示例 ===\n");

    let input = "p-4 text-center opacity-50 md:p-8 hover:bg-red-500";
    let result = match convert(input) {
        Ok(result) => result,
        Err(e) => {
            println!("转换失败: {}", e);
            return;
        }
    };

    println!("输入: {}", input);
    println!("CSS:{}\n", result.result_css);

    match css_to_object_literal(&result.result_css) {
        Some(literal) => println!("JSS: {}", literal),
        None => println!("JSS: CSS 无法解析"),
    }
}
