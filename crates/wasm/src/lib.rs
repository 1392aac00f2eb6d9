use serde::Serialize;
use wasm_bindgen::prelude::*;

use tw2css_transform::{convert_with, ConversionResult};
use tw2css_tw_index::{default_table, load_from_json, LookupTable};

const DOCS_SEARCH_URL: &str = "https://google.com/search?btnI=1&q=site:tailwindcss.com/docs%20";

fn serialize_result(result: &ConversionResult) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    result
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn convert_to_js(input: &str, table: &LookupTable) -> Result<JsValue, JsError> {
    let result = convert_with(input, table).map_err(|e| JsError::new(&e.to_string()))?;
    serialize_result(&result)
}

/// 未找到类名的文档搜索链接（"手气不错"直接跳到官方文档页）
pub fn docs_search_url(class_name: &str) -> String {
    format!("{}{}", DOCS_SEARCH_URL, class_name)
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 使用内置速查表转换类名
///
/// @param input - 以空白分隔的 Tailwind 类名
/// @returns `{ resultCss, notFound }`
#[wasm_bindgen(js_name = "convert")]
pub fn convert(input: &str) -> Result<JsValue, JsError> {
    convert_to_js(input, default_table())
}

/// CSS 文本转为对象字面量（JSON）文本
///
/// @returns 解析失败时为 `undefined`
#[wasm_bindgen(js_name = "cssToObjectLiteral")]
pub fn css_to_object_literal(css: &str) -> Option<String> {
    tw2css_css::css_to_object_literal(css)
}

#[wasm_bindgen(js_name = "docsSearchUrl")]
pub fn docs_search_url_js(class_name: &str) -> String {
    docs_search_url(class_name)
}

/// 使用自定义速查表的转换器
#[wasm_bindgen]
pub struct Engine {
    table: LookupTable,
}

#[wasm_bindgen]
impl Engine {
    /// @param tableJson - 与内置 cheatsheet.json 结构相同的 JSON
    #[wasm_bindgen(constructor)]
    pub fn new(table_json: &str) -> Result<Engine, JsError> {
        let table = load_from_json(table_json)
            .map_err(|e| JsError::new(&format!("Invalid lookup table: {}", e)))?;
        Ok(Engine { table })
    }

    /// @returns `{ resultCss, notFound }`
    pub fn convert(&self, input: &str) -> Result<JsValue, JsError> {
        convert_to_js(input, &self.table)
    }

    /// 表中的行数
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.table.len()
    }
}
