//! 响应体解码
//!
//! 响应体是 gzip 压缩的 JSON 数组：
//! `[{"allcount": N}, {record}, {record}, ...]`

use flate2::read::GzDecoder;
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::NarouApiError;
use crate::domain::search::NovelRecord;

/// 数组首元素
#[derive(Debug, Deserialize)]
struct ResultMeta {
    allcount: u64,
}

fn decode_array(body: &[u8]) -> Result<Vec<Value>, NarouApiError> {
    serde_json::from_reader(GzDecoder::new(body))
        .map_err(|e| NarouApiError::InvalidResponse(format!("Failed to decode gzip JSON: {}", e)))
}

/// 读取首元素的 `allcount`
pub fn decode_count(body: &[u8]) -> Result<u64, NarouApiError> {
    let meta = decode_array(body)?
        .into_iter()
        .next()
        .ok_or_else(|| NarouApiError::InvalidResponse("Empty response array".to_string()))?;

    let meta: ResultMeta = serde_json::from_value(meta)
        .map_err(|e| NarouApiError::InvalidResponse(format!("Missing allcount: {}", e)))?;
    Ok(meta.allcount)
}

/// 跳过首元素，其余解码为记录
pub fn decode_records(body: &[u8]) -> Result<Vec<NovelRecord>, NarouApiError> {
    decode_array(body)?
        .into_iter()
        .skip(1)
        .map(|value| {
            serde_json::from_value(value)
                .map_err(|e| NarouApiError::InvalidResponse(format!("Invalid record: {}", e)))
        })
        .collect()
}
