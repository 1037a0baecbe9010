mod error;
mod input;
mod label;
mod mapper;
mod summary;

pub use error::{MapperError, Result};
pub use input::MapperInput;
pub use label::Label;
#[cfg(feature = "yaml")]
pub use mapper::summarize_yaml;
pub use mapper::{
    report_batch, summarize, summarize_batch, summarize_labels, summarize_str, summarize_value,
};
pub use summary::{BatchReport, FlagSummary};

use serde_json::Value;
use wasm_bindgen::prelude::*;

type JsResult<T> = std::result::Result<T, JsValue>;

#[wasm_bindgen]
pub fn summarize_json(input_json: String) -> JsResult<String> {
    let summary = summarize_str(&input_json)
        .map_err(|err| JsValue::from_str(&format!("input parse error: {err}")))?;
    serde_json::to_string(&summary)
        .map_err(|err| JsValue::from_str(&format!("summary serialize error: {err}")))
}

#[wasm_bindgen]
pub fn summarize_batch_json(inputs_json: String) -> JsResult<String> {
    let report = parse_batch(&inputs_json)
        .map_err(|err| JsValue::from_str(&format!("batch parse error: {err}")))?;
    serde_json::to_string(&report)
        .map_err(|err| JsValue::from_str(&format!("batch serialize error: {err}")))
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Summarizes every element of a JSON array and totals the batch.
pub fn parse_batch(inputs_json: &str) -> Result<BatchReport> {
    let inputs: Vec<Value> = serde_json::from_str(inputs_json)
        .map_err(|err| MapperError::Deserialize(err.to_string()))?;
    Ok(report_batch(&inputs))
}
