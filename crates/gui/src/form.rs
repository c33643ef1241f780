//! The form model behind the window, kept free of widget code.

use std::path::Path;

use genui_core::arguments::Arguments;
use genui_core::parameter::{Parameter, Widget};
use genui_core::parameter_list::ParameterList;
use genui_core::validation::{validate, RawInput};
use genui_core::value::Value;
use log::{debug, info};

/// Separator for list values typed into a single text field.
pub const LIST_DELIMITER: char = ',';

/// Input state of one parameter.
#[derive(Debug, Clone)]
pub struct Field {
    pub parameter: Parameter,
    pub text: String,
    pub checked: bool,
    /// Message of the last failed validation, shown below the input.
    pub error: Option<String>,
}

impl Field {
    fn new(parameter: &Parameter) -> Self {
        let checked = matches!(parameter.default, Some(Value::Bool(true)));
        Self {
            parameter: parameter.clone(),
            text: String::new(),
            checked,
            error: None,
        }
    }

    pub fn widget(&self) -> Widget {
        self.parameter.effective_widget()
    }

    /// Hint shown in an empty text field.
    ///
    /// The default value when there is one, so leaving the field empty visibly
    /// means "use the default".
    pub fn placeholder(&self) -> String {
        if let Some(default) = &self.parameter.default {
            return default.to_string();
        }

        match self.widget() {
            Widget::File => "Pick a file...".to_string(),
            Widget::Dir => "Pick a directory...".to_string(),
            Widget::FileOrDir => "Pick a file or directory...".to_string(),
            _ if self.parameter.nargs.is_list() => {
                format!("Enter {}, separated by '{LIST_DELIMITER}'...", self.parameter.label())
            }
            _ => format!("Enter {}...", self.parameter.label()),
        }
    }

    /// Reduces the field to what the dispatcher expects.
    ///
    /// A blank field is [`RawInput::Absent`]. Single values are passed on as typed;
    /// list parameters split their text on [`LIST_DELIMITER`], trimming pieces and
    /// dropping empty ones.
    pub fn raw_input(&self) -> RawInput {
        if self.widget() == Widget::Checkbox {
            return RawInput::Flag(self.checked);
        }

        if self.text.trim().is_empty() {
            return RawInput::Absent;
        }

        if self.parameter.nargs.is_list() {
            RawInput::Many(
                self.text
                    .split(LIST_DELIMITER)
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .map(ToString::to_string)
                    .collect(),
            )
        } else {
            RawInput::Single(self.text.clone())
        }
    }
}

/// All fields of the window, in parameter order.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new(parameters: &ParameterList) -> Self {
        Self {
            fields: parameters.iter().map(Field::new).collect(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn set_text(&mut self, index: usize, text: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.text = text;
            field.error = None;
        }
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(field) = self.fields.get_mut(index) {
            field.checked = checked;
        }
    }

    /// Fills a field from a file or directory picker.
    pub fn set_path(&mut self, index: usize, path: &Path) {
        self.set_text(index, path.display().to_string());
    }

    /// Validates every field.
    ///
    /// Each failing field keeps its own error message, so one submit reports all
    /// problems at once. Returns the arguments only when every field passed.
    pub fn submit(&mut self) -> Option<Arguments> {
        let mut arguments = Arguments::new();
        let mut failures = 0;

        for field in &mut self.fields {
            match validate(&field.parameter, field.raw_input()) {
                Ok(value) => {
                    field.error = None;
                    arguments.insert(field.parameter.name.clone(), value);
                }
                Err(e) => {
                    debug!("Field `{}` rejected: {}", field.parameter.name, e);
                    field.error = Some(e.to_string());
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            info!("Form kept open, {failures} field(s) rejected");
            return None;
        }

        info!("Form input accepted");
        Some(arguments)
    }
}
