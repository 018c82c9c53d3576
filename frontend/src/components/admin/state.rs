use common::storefront::form::CarForm;
use serde_json::Value;
use yew::NodeRef;

pub struct AdminComponent {
    /// Records as last loaded from the backend.
    pub cars: Vec<Value>,
    pub form: CarForm,
    /// Index being edited; `None` while adding a new record.
    pub editing: Option<usize>,
    /// A request is in flight; actions are disabled meanwhile.
    pub busy: bool,
    pub loaded: bool,
    pub file_input_ref: NodeRef,
}

impl AdminComponent {
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            form: CarForm::default(),
            editing: None,
            busy: false,
            loaded: false,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Record to submit: the form applied over the record being edited, so
    /// fields the form does not show are kept.
    pub fn record_to_save(&self) -> Value {
        let original = self.editing.and_then(|index| self.cars.get(index));
        self.form.to_record(original)
    }

    pub fn reset_form(&mut self) {
        self.form = CarForm::default();
        self.editing = None;
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
