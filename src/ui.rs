use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use poehali_studio::contact::ContactField;
use poehali_studio::landing::{Section, EXAMPLE_DESCRIPTIONS, FOOTER};
use poehali_studio::{PreviewLine, ToastVariant, WorkflowState};

use crate::app::{App, FocusPane, InputMode};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);

    let [nav_area, content_area] = Layout::horizontal([
        Constraint::Length(18),
        Constraint::Min(0),
    ])
    .areas(body_area);

    render_navigation(app, frame, nav_area);
    render_section(app, frame, content_area);
    render_footer(app, frame, footer_area);

    // Popups on top
    if app.generator.is_open() {
        render_generator_dialog(app, frame, area);
    }
    render_toasts(app, frame, area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " 🚀 ПОЕХАЛИ ",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Создаём сайты будущего", Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_navigation(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == FocusPane::Navigation && app.input_mode == InputMode::Normal;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Разделы ");

    let items: Vec<ListItem> = app
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| ListItem::new(format!("{} {}", i + 1, section.nav_title())))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.section_state);
}

fn render_section(app: &App, frame: &mut Frame, area: Rect) {
    let section = app.selected_section();
    let focused = app.focus == FocusPane::Content;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", section.heading()));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            section.subtitle(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];

    if section == Section::Home {
        lines.push(Line::from(vec![
            Span::styled(" a ", Style::default().bg(Color::Magenta).fg(Color::White)),
            Span::raw(" Создать сайт за 1 минуту с ИИ"),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(FOOTER, Style::default().fg(Color::DarkGray))));
    }

    for card in section.cards() {
        lines.push(Line::from(Span::styled(
            card.title,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )));
        if let Some(meta) = card.meta {
            lines.push(Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))));
        }
        lines.push(Line::from(card.description));
        if !card.tags.is_empty() {
            let tags: Vec<Span> = card
                .tags
                .iter()
                .flat_map(|tag| {
                    [
                        Span::styled(format!(" {} ", tag), Style::default().bg(Color::Blue)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            lines.push(Line::from(tags));
        }
        lines.push(Line::default());
    }

    if section == Section::Contact {
        lines.extend(contact_form_lines(app));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.content_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn contact_form_lines(app: &App) -> Vec<Line<'static>> {
    let editing = app.input_mode == InputMode::Editing && !app.generator.is_open();
    let mut lines = vec![Line::from(Span::styled(
        "Оставить заявку",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for field in ContactField::all() {
        let active = editing && app.contact.focus == field;
        let input = app.contact.field(field);
        let marker = if active { "> " } else { "  " };
        let value = if input.as_str().is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(input.as_str().to_string())
        };
        let label_style = if active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}: ", marker, field.label()), label_style),
            value,
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        if editing {
            "Enter — отправить заявку"
        } else {
            "c — заполнить форму"
        },
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = if app.generator.is_open() {
        " AI "
    } else {
        match app.input_mode {
            InputMode::Normal => " BROWSE ",
            InputMode::Editing => " FORM ",
        }
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let keys: &[(&str, &str)] = if app.generator.is_open() {
        match app.generator.state() {
            WorkflowState::Succeeded(_) => &[("r", "another"), ("s", "save"), ("Esc", "close")],
            WorkflowState::InFlight(_) => &[("Esc", "close")],
            _ => &[("Enter", "generate"), ("Esc", "close")],
        }
    } else if app.input_mode == InputMode::Editing {
        &[("Tab", "next field"), ("Enter", "send"), ("Esc", "cancel")]
    } else {
        &[
            ("j/k", "nav"),
            ("1-6", "jump"),
            ("Tab", "focus"),
            ("a", "AI generator"),
            ("c", "contact"),
            ("x", "dismiss"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    for (key, label) in keys {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {} ", label), label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_generator_dialog(app: &App, frame: &mut Frame, area: Rect) {
    let popup_area = centered(area, 72, 22);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" ✨ ИИ-Генератор сайтов ");

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    match app.generator.preview() {
        Some(preview) => render_preview(frame, inner, &preview),
        None => render_generator_form(app, frame, inner),
    }
}

fn render_generator_form(app: &App, frame: &mut Frame, area: Rect) {
    let [intro_area, input_area, examples_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("Опишите ваш проект — ИИ создаст структуру сайта за минуту")
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        intro_area,
    );

    let in_flight = app.generator.is_in_flight();
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if in_flight { Color::DarkGray } else { Color::Yellow }))
        .title(" Опишите ваш сайт ");

    let input = app.generator.input();
    let inner_width = input_area.width.saturating_sub(2) as usize;

    // Keep the cursor visible by scrolling the text horizontally
    let scroll_offset = if inner_width == 0 {
        0
    } else {
        input.cursor().saturating_sub(inner_width.saturating_sub(1))
    };
    let visible: String = input.as_str().chars().skip(scroll_offset).take(inner_width).collect();
    let input_text = if input.as_str().is_empty() {
        Span::styled(
            "Например: Сайт для кофейни с уютной атмосферой и меню",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(visible)
    };
    frame.render_widget(Paragraph::new(Line::from(input_text)).block(input_block), input_area);

    if !in_flight {
        let cursor_x = (input.cursor() - scroll_offset) as u16;
        frame.set_cursor_position((input_area.x + 1 + cursor_x, input_area.y + 1));
    }

    let mut example_lines = vec![Line::from(Span::styled(
        "💡 Примеры описаний:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for example in EXAMPLE_DESCRIPTIONS {
        example_lines.push(Line::from(Span::styled(
            format!("  • {}", example),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(
        Paragraph::new(example_lines).wrap(Wrap { trim: false }),
        examples_area,
    );

    let status = match app.generator.state() {
        WorkflowState::InFlight(_) => {
            // Animated ellipsis: cycles through ".", "..", "..."
            let dots = ".".repeat((app.animation_frame as usize) + 1);
            Line::from(Span::styled(
                format!("⏳ Генерирую сайт{}", dots),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ))
        }
        WorkflowState::Failed(message) => Line::from(vec![
            Span::styled(format!("✖ {} ", message), Style::default().fg(Color::Red)),
            Span::styled("Enter — повторить", Style::default().fg(Color::Gray)),
        ]),
        _ => Line::from(Span::styled(
            "Enter — Создать сайт",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Styled lines for the generated site summary
pub fn preview_lines(preview: &[PreviewLine]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut structure_started = false;

    for entry in preview {
        match entry {
            PreviewLine::Title(title) => lines.push(Line::from(Span::styled(
                format!("✔ {}", title),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ))),
            PreviewLine::Description(description) => {
                lines.push(Line::from(description.clone()));
            }
            _ => {
                if !structure_started {
                    structure_started = true;
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(
                        "Структура сайта:",
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.label().unwrap_or_default()),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                if let Some(detail) = entry.detail() {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", detail),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }
    }
    lines
}

fn render_preview(frame: &mut Frame, area: Rect, preview: &[PreviewLine]) {
    let [body_area, actions_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(preview_lines(preview)).wrap(Wrap { trim: true }),
        body_area,
    );

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let actions = Line::from(vec![
        Span::styled(" r ", key_style),
        Span::raw(" Создать другой  "),
        Span::styled(" s ", key_style),
        Span::raw(" Сохранить проект"),
    ]);
    frame.render_widget(Paragraph::new(actions), actions_area);
}

fn render_toasts(app: &App, frame: &mut Frame, area: Rect) {
    let width = 44u16.min(area.width.saturating_sub(2));
    let mut y = area.y + 1;

    for toast in app.toasts.iter() {
        let height = 4;
        if y + height > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(area.x + area.width.saturating_sub(width + 1), y, width, height);

        let color = match toast.variant {
            ToastVariant::Default => Color::Green,
            ToastVariant::Destructive => Color::Red,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", toast.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(toast.description.as_str())
                .block(block)
                .wrap(Wrap { trim: true }),
            toast_area,
        );
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_preview_lines_layout() {
        let preview = vec![
            PreviewLine::Title("Coffee Shop".to_string()),
            PreviewLine::Description("Cozy site".to_string()),
            PreviewLine::Hero(Some("Welcome".to_string())),
            PreviewLine::Features(3),
            PreviewLine::Contacts,
        ];

        let text: Vec<String> = preview_lines(&preview).iter().map(plain).collect();

        assert_eq!(
            text,
            vec![
                "✔ Coffee Shop",
                "Cozy site",
                "",
                "Структура сайта:",
                "  Главный экран",
                "    Welcome",
                "  Преимущества",
                "    3 блоков",
                "  Контакты",
            ]
        );
    }
}
