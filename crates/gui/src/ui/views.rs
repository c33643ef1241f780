use crate::app::{FormApp, Message};
use crate::ui::components;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};

pub fn main_view(app: &FormApp) -> Element<Message> {
    let fields = app
        .form
        .fields()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(15).padding(10), |column, (index, field)| {
            column.push(components::parameter_field(index, field))
        });

    let content = Column::new()
        .spacing(15)
        .padding(20)
        .push(text(app.title.as_str()).size(24))
        .push(scrollable(fields).height(Length::Fill))
        .push(components::action_buttons(&app.version));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
