//! Rust 值与 `JsValue` 之间的转换（自定义事件的 `detail` 载荷）

use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsValue;

/// 大整数按 JS number 输出，避免 BigInt 导致 `JSON.stringify` 失败
pub fn to_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let serializer =
        serde_wasm_bindgen::Serializer::new().serialize_large_number_types_as_bigints(false);
    value.serialize(&serializer)
}

pub fn from_value<T: DeserializeOwned>(value: JsValue) -> Result<T, serde_wasm_bindgen::Error> {
    serde_wasm_bindgen::from_value(value)
}
