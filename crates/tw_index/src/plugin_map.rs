use phf::phf_map;

/// 任意值别名到 CSS 属性的映射
///
/// 只有这些别名支持 `<alias>-[<value>]` 语法，如 `w-[13px]` → `width: 13px;`
static ARBITRARY_PROPERTY_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Spacing
    "p" => "padding",
    "pt" => "padding-top",
    "pr" => "padding-right",
    "pb" => "padding-bottom",
    "pl" => "padding-left",
    "m" => "margin",
    "mt" => "margin-top",
    "mr" => "margin-right",
    "mb" => "margin-bottom",
    "ml" => "margin-left",

    // Sizing
    "w" => "width",
    "h" => "height",
    "min-w" => "min-width",
    "min-h" => "min-height",
    "max-w" => "max-width",
    "max-h" => "max-height",
    "aspect" => "aspect-ratio",

    // Position
    "top" => "top",
    "right" => "right",
    "bottom" => "bottom",
    "left" => "left",

    // Colors
    "bg" => "background",
    "border" => "border-color",
    "text" => "color",
    "color" => "color",
};

/// 查询任意值别名对应的 CSS 属性
pub fn get_arbitrary_property(alias: &str) -> Option<&'static str> {
    ARBITRARY_PROPERTY_MAP.get(alias).copied()
}
