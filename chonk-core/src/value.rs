//! Dynamic chunking over JSON values
//!
//! Loosely-typed callers (config pipelines, FFI layers) dispatch on the
//! closed set of JSON shapes instead of probing runtime capabilities:
//! strings take the text path, arrays take the element path, and everything
//! else fails with a matchable error kind.

use crate::chunker::Chunker;
use crate::error::{ChonkError, Result};
use crate::segmenter::Segmenter;
use serde_json::Value;

/// Chunk a JSON value into at most `size`-element chunks.
///
/// Strings are chunked by Unicode scalar values (not grapheme-safe; see
/// [`chunk_value_graphemes`]), arrays by element. Fails with
/// [`ChonkError::InvalidArgument`] for `null` input or a zero size, and
/// with [`ChonkError::UnsupportedType`] for objects, numbers and booleans,
/// which have no ordered-sequence interpretation.
pub fn chunk_value(value: &Value, size: usize) -> Result<Vec<Value>> {
    let chunker = Chunker::new(size)?;
    match value {
        Value::Null => Err(ChonkError::InvalidArgument(
            "input must not be null".to_string(),
        )),
        Value::String(text) => Ok(chunker
            .chunk_text(text)
            .into_iter()
            .map(Value::String)
            .collect()),
        Value::Array(items) => Ok(chunker
            .chunk_slice(items)
            .into_iter()
            .map(Value::Array)
            .collect()),
        other => Err(ChonkError::UnsupportedType(shape_name(other).to_string())),
    }
}

/// Grapheme-safe variant of [`chunk_value`].
///
/// Strings are chunked by grapheme clusters so no user-perceived character
/// is split; every other shape behaves exactly as in [`chunk_value`].
pub fn chunk_value_graphemes(value: &Value, size: usize) -> Result<Vec<Value>> {
    match value {
        Value::String(text) => {
            let chunker = Chunker::new(size)?;
            Ok(chunker
                .chunk_segments(text, &Segmenter::default())
                .into_iter()
                .map(Value::String)
                .collect())
        }
        other => chunk_value(other, size),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
