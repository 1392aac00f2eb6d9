use phf::phf_set;

/// 数值会被转成数字的属性（camelCase 形式）
static UNITLESS: phf::Set<&'static str> = phf_set! {
    "boxFlex",
    "boxFlexGroup",
    "columnCount",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    "fillOpacity",
    "strokeDashoffset",
    "strokeOpacity",
    "strokeWidth",
};

pub fn is_unitless(key: &str) -> bool {
    UNITLESS.contains(key)
}

/// CSS 属性名 → 对象键名
///
/// - `background-color` → `backgroundColor`
/// - `-webkit-transition` → `WebkitTransition`
/// - `-ms-flex` → `msFlex`
/// - `float` → `cssFloat`
/// - `--brand` → `--brand`（自定义属性保持原样）
pub fn property_key(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let property = property.to_ascii_lowercase();
    if property == "float" {
        return "cssFloat".to_string();
    }

    match property.strip_prefix("-ms-") {
        Some(rest) => camelize(&format!("ms-{}", rest)),
        None => camelize(&property),
    }
}

fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper = false;

    for c in s.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("padding"), "padding");
        assert_eq!(property_key("background-color"), "backgroundColor");
        assert_eq!(property_key("Border-Top-Width"), "borderTopWidth");
    }

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(property_key("-webkit-transition"), "WebkitTransition");
        assert_eq!(property_key("-ms-flex"), "msFlex");
    }

    #[test]
    fn test_special_names() {
        assert_eq!(property_key("float"), "cssFloat");
        assert_eq!(property_key("--tw-ring-color"), "--tw-ring-color");
    }

    #[test]
    fn test_unitless() {
        assert!(is_unitless("opacity"));
        assert!(is_unitless("zIndex"));
        assert!(!is_unitless("width"));
    }
}
