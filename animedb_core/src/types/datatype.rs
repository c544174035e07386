#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Text,
}

impl DataType {
    /// Short lowercase label used in column prompts
    pub fn label(self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Text => "text",
        }
    }
}
