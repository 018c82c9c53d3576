use common::storefront::form::FormField;
use serde_json::Value;

pub enum Msg {
    Reload,
    Loaded(Vec<Value>),
    /// Start editing the record at this index.
    Edit(usize),
    /// Clear the form for a new record.
    New,
    SetField(FormField, String),
    Save,
    Delete(usize),
    /// A change was committed; carries the toast text.
    Saved(String),
    Failed(String),
    ImageSelected(web_sys::File),
    ImageUploaded(String),
}
