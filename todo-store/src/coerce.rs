//! 请求字段的类型转换
//!
//! 布尔字段接受 `true/false`、`0/1`、`"true"/"false"`、`"0"/"1"`，
//! 字符串字段接受数字；无法转换的值仍然返回反序列化错误。

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringLike {
    Str(String),
    Int(i64),
    Float(f64),
}

/// 可选布尔字段，`null` 与缺省均为 `None`
pub fn option_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<BoolLike>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(value) => value,
    };

    let coerced = match value {
        BoolLike::Bool(b) => b,
        BoolLike::Int(0) => false,
        BoolLike::Int(1) => true,
        BoolLike::Int(n) => {
            return Err(D::Error::custom(format!("无法将整数 {} 转换为布尔值", n)))
        }
        BoolLike::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => return Err(D::Error::custom(format!("无法将字符串 \"{}\" 转换为布尔值", s))),
        },
    };
    Ok(Some(coerced))
}

/// 可选字符串字段，数字按十进制文本保存
pub fn option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringLike>::deserialize(deserializer)?.map(|value| match value {
        StringLike::Str(s) => s,
        StringLike::Int(n) => n.to_string(),
        StringLike::Float(f) => f.to_string(),
    }))
}
