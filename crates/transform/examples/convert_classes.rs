/// 转换示例：展示分组、断点包裹、伪类包裹和未找到列表
///
/// 运行示例：
/// ```bash
/// cargo run --example convert_classes -p tw2css-transform
/// ```
use tw2css_transform::convert;

fn main() {
    println!("=== tw2css 转换示例 ===\n");

    let inputs = [
        "p-4 text-center",
        "p-4 md:p-8 hover:bg-red-500",
        "w-[37px] max-h-[50vh] opacity-50",
        "lg:truncate disabled:opacity-50 flex-grow",
        "p-4 unknown-class md:nope",
    ];

    for input in inputs {
        println!("输入: {}", input);
        match convert(input) {
            Ok(result) => {
                println!("CSS:{}", result.result_css);
                if !result.not_found.is_empty() {
                    println!("未找到: {:?}", result.not_found);
                }
            }
            Err(e) => println!("转换失败: {}", e),
        }
        println!("{}", "-".repeat(40));
    }
}
