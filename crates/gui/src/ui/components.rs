use crate::app::Message;
use crate::dialogs::pickers;
use crate::form::Field;
use genui_core::parameter::Widget;
use iced::widget::{button, checkbox, container, row, text, text_input, tooltip, Column, Row};
use iced::{Element, Length};

const ERROR_COLOR: [f32; 3] = [0.8, 0.2, 0.2];

/// One labelled input, with its help as a tooltip and its last error below.
pub fn parameter_field(index: usize, field: &Field) -> Element<Message> {
    let mut column = Column::new().spacing(5);

    if field.widget() == Widget::Checkbox {
        let input = checkbox(field.parameter.label(), field.checked)
            .on_toggle(move |checked| Message::FlagToggled(index, checked))
            .size(18);
        column = column.push(with_help(input.into(), field.parameter.help.as_deref()));
    } else {
        let label = text(field.parameter.label()).size(14);
        column = column
            .push(with_help(label.into(), field.parameter.help.as_deref()))
            .push(input_row(index, field));
    }

    if let Some(error) = &field.error {
        column = column.push(text(error.as_str()).size(12).color(ERROR_COLOR));
    }

    column.into()
}

fn input_row(index: usize, field: &Field) -> Row<Message> {
    let input = text_input(&field.placeholder(), &field.text)
        .on_input(move |value| Message::InputChanged(index, value))
        .on_submit(Message::Submit)
        .secure(field.widget() == Widget::Password)
        .padding(8)
        .size(16)
        .width(Length::Fill);

    let pickers = pickers(field.widget());
    let single = pickers.len() == 1;

    pickers.iter().fold(row![input].spacing(5), |row, picker| {
        row.push(
            button(text(picker.button_label(single)).size(14))
                .padding([8, 12])
                .style(button::secondary)
                .on_press(Message::Browse(index, *picker)),
        )
    })
}

fn with_help<'a>(content: Element<'a, Message>, help: Option<&'a str>) -> Element<'a, Message> {
    match help {
        Some(help) => tooltip(
            content,
            container(text(help).size(12)).padding(6).style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into(),
        None => content,
    }
}

pub fn action_buttons(version: &str) -> Row<'static, Message> {
    row![
        button(text("Run").size(16))
            .padding([10, 20])
            .style(button::success)
            .on_press(Message::Submit),
        button(text("Cancel").size(16))
            .padding([10, 20])
            .style(button::secondary)
            .on_press(Message::Cancel),
        text(format!("v{version}")).size(12),
    ]
    .spacing(10)
    .align_y(iced::Center)
}
