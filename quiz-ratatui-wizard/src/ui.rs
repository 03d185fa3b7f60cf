//! Screen rendering.

use quiz_flow::{DisplayState, Phase, QuestionKind, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::Theme;
use crate::input::InputState;

/// Draw whatever the session is currently doing.
pub(crate) fn draw(
    frame: &mut Frame,
    title: &str,
    theme: &Theme,
    session: &Session,
    input: &InputState,
) {
    match session.phase() {
        Phase::Loading => draw_status(
            frame,
            theme,
            theme.primary,
            " Loading ",
            "Loading questions...",
        ),
        Phase::Active(_) => {
            if let Some(view) = session.display_state() {
                draw_question(frame, title, theme, &view, input);
            }
        }
        Phase::Submitting(_) => draw_status(
            frame,
            theme,
            theme.primary,
            " Submitting ",
            "Submitting your responses...\n\nPlease wait while we process your assessment.",
        ),
        Phase::Done => draw_status(
            frame,
            theme,
            theme.success,
            " Complete ",
            "Thank You for Completing the Assessment!\n\nPress Enter to exit.",
        ),
        Phase::LoadFailed(err) => draw_status(
            frame,
            theme,
            theme.error,
            " Error ",
            &format!("{err}\n\nPress r to retry, Esc to exit."),
        ),
        Phase::SubmitFailed(err) => draw_status(
            frame,
            theme,
            theme.error,
            " Submission Error ",
            &format!("{err}\n\nPress r to try again, Esc to exit."),
        ),
    }
}

fn draw_question(
    frame: &mut Frame,
    title: &str,
    theme: &Theme,
    view: &DisplayState<'_>,
    input: &InputState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Progress
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(title.to_string())
        .style(Style::default().fg(theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.primary).bg(theme.background))
        .ratio(view.progress.clamp(0.0, 1.0))
        .label(view.position());
    frame.render_widget(gauge, chunks[1]);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Min(5),    // Input
            Constraint::Length(2), // Error
        ])
        .split(chunks[2]);

    if view.question.is_heading() {
        let heading = Paragraph::new(view.question.text().to_string())
            .style(Style::default().fg(theme.highlight).bold())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(" Section ")
                    .title_style(Style::default().fg(theme.highlight)),
            );
        frame.render_widget(heading, content[0]);
    } else {
        let prompt = Paragraph::new(view.question.text().to_string())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .title(" Question ")
                    .title_style(Style::default().fg(theme.highlight)),
            );
        frame.render_widget(prompt, content[0]);
        draw_input(frame, theme, view, input, content[1]);
    }

    if let Some(error) = &input.error {
        let error = Paragraph::new(error.clone())
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(error, content[2]);
    }

    let help = Paragraph::new(help_text(view))
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

fn draw_input(
    frame: &mut Frame,
    theme: &Theme,
    view: &DisplayState<'_>,
    input: &InputState,
    area: Rect,
) {
    let kind = view.question.kind();
    match kind {
        QuestionKind::Text | QuestionKind::Email | QuestionKind::LongText => {
            let label = match kind {
                QuestionKind::Email => " Email ",
                QuestionKind::LongText => " Answer (optional) ",
                _ => " Answer ",
            };
            let field = Paragraph::new(input.text.clone())
                .style(Style::default().fg(theme.text))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(label)
                        .title_style(Style::default().fg(theme.secondary)),
                );
            frame.render_widget(field, area);

            let width = area.width.saturating_sub(2).max(1);
            let cursor = u16::try_from(input.cursor).unwrap_or(u16::MAX);
            let row = (cursor / width).min(area.height.saturating_sub(3));
            frame.set_cursor_position((area.x + 1 + cursor % width, area.y + 1 + row));
        }
        QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
            let (on, off, label) = if kind == QuestionKind::SingleChoice {
                ("(•)", "( )", " Select one ".to_string())
            } else {
                let count = input.selected.iter().filter(|&&s| s).count();
                ("[✓]", "[ ]", format!(" Select any ({count} selected) "))
            };

            let items: Vec<ListItem> = view
                .question
                .options()
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let checked = input.selected.get(i).copied().unwrap_or(false);
                    let style = if i == input.highlighted {
                        Style::default().fg(theme.highlight).bold()
                    } else if checked {
                        Style::default().fg(theme.secondary)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    let mark = if checked { on } else { off };
                    ListItem::new(format!("{mark} {option}")).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(label)
                        .title_style(Style::default().fg(theme.secondary)),
                )
                .highlight_symbol("► ");

            let mut list_state = ListState::default();
            list_state.select(Some(input.highlighted));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
        QuestionKind::Heading => {}
    }
}

fn help_text(view: &DisplayState<'_>) -> String {
    let forward = format!("Enter: {}", view.forward);
    let back = if view.can_go_back { "  PgUp: Back" } else { "" };
    match view.question.kind() {
        QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
            format!("↑/↓: Move  Space: Select  {forward}{back}  Esc: Cancel")
        }
        _ => format!("{forward}{back}  Esc: Cancel"),
    }
}

fn draw_status(frame: &mut Frame, theme: &Theme, accent: Color, title: &str, text: &str) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(title.to_string())
        .title_style(Style::default().fg(accent).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(5),
            Constraint::Percentage(35),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

#[cfg(test)]
mod tests {
    use example_catalogs::cybersecurity_assessment;
    use quiz_flow::RawInput;
    use quiz_flow::test_support::{FailingSink, StaticSource};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(session: &Session, input: &InputState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| draw(frame, "Assessment", &Theme::default(), session, input))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded() -> Session {
        let mut session = Session::new();
        session.load(&StaticSource::new(
            cybersecurity_assessment().questions().to_vec(),
        ));
        session
    }

    #[test]
    fn first_question_screen() {
        let session = loaded();
        let input = InputState::from_display(session.display_state().as_ref());
        let screen = render(&session, &input);

        assert!(screen.contains("Assessment"));
        assert!(screen.contains("Question 1 of 5"));
        assert!(screen.contains("What is your company's name?"));
        assert!(screen.contains("Enter: Next"));
        assert!(!screen.contains("PgUp: Back"));
    }

    #[test]
    fn choice_screen_lists_options() {
        let mut session = loaded();
        session.go_next(&RawInput::text("Acme")).unwrap();
        session.go_next(&RawInput::text("ops@acme.io")).unwrap();
        session.record_answer(&RawInput::selected(["HIPAA"]));

        let input = InputState::from_display(session.display_state().as_ref());
        let screen = render(&session, &input);

        assert!(screen.contains("[ ] GDPR"));
        assert!(screen.contains("[✓] HIPAA"));
        assert!(screen.contains("1 selected"));
        assert!(screen.contains("PgUp: Back"));
    }

    #[test]
    fn validation_message_is_shown() {
        let session = loaded();
        let mut input = InputState::from_display(session.display_state().as_ref());
        input.error = Some("Please provide a valid answer before proceeding.".to_string());
        let screen = render(&session, &input);
        assert!(screen.contains("Please provide a valid answer"));
    }

    #[test]
    fn submission_error_offers_retry() {
        let mut session = Session::new();
        session.load(&StaticSource::new(vec![quiz_flow::Question::common(
            "Notes?",
            QuestionKind::LongText,
        )]));
        session.go_next(&RawInput::text("")).unwrap();
        session.submit(&FailingSink::new("503 Service Unavailable"));

        let screen = render(&session, &InputState::default());
        assert!(screen.contains("Submission Error"));
        assert!(screen.contains("503 Service Unavailable"));
        assert!(screen.contains("Press r to try again"));
    }
}
