use std::sync::{Arc, Mutex};

use genui_core::arguments::Arguments;
use genui_core::config::InterfaceSettings;
use genui_core::parameter_list::ParameterList;
use iced::keyboard::{self, key, Key};
use iced::{Element, Subscription, Task};
use log::{info, warn};

use crate::app::Message;
use crate::dialogs;
use crate::form::Form;

/// Where the window leaves the accepted arguments once it closes.
pub type ResultSlot = Arc<Mutex<Option<Arguments>>>;

pub struct FormApp {
    pub title: String,
    pub version: String,
    pub form: Form,
    result: ResultSlot,
}

impl FormApp {
    pub fn new(settings: &InterfaceSettings, parameters: &ParameterList, result: ResultSlot) -> Self {
        Self {
            title: settings.title.clone(),
            version: settings.version.clone(),
            form: Form::new(parameters),
            result,
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(index, text) => {
                self.form.set_text(index, text);
                Task::none()
            }
            Message::FlagToggled(index, checked) => {
                self.form.set_checked(index, checked);
                Task::none()
            }
            Message::Browse(index, picker) => {
                let start = self
                    .form
                    .fields()
                    .get(index)
                    .and_then(|field| dialogs::start_directory(&field.text));
                Task::perform(dialogs::pick(picker, start), move |picked| {
                    Message::Picked(index, picked)
                })
            }
            Message::Picked(index, picked) => {
                if let Some(path) = picked {
                    self.form.set_path(index, &path);
                }
                Task::none()
            }
            Message::Submit => match self.form.submit() {
                Some(arguments) => {
                    let mut slot = self.result.lock().unwrap_or_else(|e| {
                        warn!("Result slot was poisoned, storing the input anyway");
                        e.into_inner()
                    });
                    *slot = Some(arguments);
                    iced::exit()
                }
                None => Task::none(),
            },
            Message::Cancel => {
                info!("Form dismissed");
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        crate::ui::views::main_view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(key::Named::Escape) => Some(Message::Cancel),
            _ => None,
        })
    }
}
