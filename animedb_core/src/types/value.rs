use crate::types::datatype::DataType;

/// A concrete value ready to be bound at a placeholder position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

/// Coerces a raw user string into a bindable value for the given column type.
/// Text columns take the string as-is; Int columns must parse.
pub fn coerce(dtype: DataType, raw: &str) -> Result<BindValue, String> {
    match dtype {
        DataType::Int => {
            let n: i64 = raw
                .parse()
                .map_err(|_| format!("Expected int but got '{raw}'"))?;
            Ok(BindValue::Int(n))
        }
        DataType::Text => Ok(BindValue::Text(raw.to_string())),
    }
}
