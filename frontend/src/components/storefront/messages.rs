use serde_json::Value;

pub enum Msg {
    Loaded(Vec<Value>),
    LoadFailed(String),
    /// A filter control was clicked; carries its `data-filter` value.
    SetFilter(String),
}
