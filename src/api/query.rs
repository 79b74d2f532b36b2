// src/api/query.rs
//! Bracketed query-string encoding.
//!
//! Canvas expects repeated fields as `key[]=a&key[]=b`, while generic form
//! encoders emit `key[0]=a&key[1]=b`, which Canvas rejects. This encoder
//! writes the bracket form directly. Values are written as-is: nothing is
//! percent-encoded here, so a value containing `&` or `=` changes the
//! meaning of the query string. Callers that need escaping must do it
//! before building the `ParamSet`.

use crate::types::{ParamSet, ParamValue};

/// Encodes a parameter set as `key=value` pairs joined by `&`.
pub fn encode_query(params: &ParamSet) -> String {
    let mut pairs = Vec::with_capacity(params.len());

    for (key, value) in params {
        match value {
            ParamValue::Scalar(scalar) => pairs.push(format!("{}={}", key, scalar)),
            ParamValue::Group(entries) => {
                for (group_key, scalar) in entries {
                    pairs.push(format!("{}[{}]={}", key, group_key.bracket_label(), scalar));
                }
            }
        }
    }

    pairs.join("&")
}
