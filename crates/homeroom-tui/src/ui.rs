use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use homeroom_core::Role;

use crate::app::{App, Screen};

pub fn draw(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::ApiKey => draw_api_key(f, app),
        Screen::IdeaSelect => draw_idea_select(f, app),
        Screen::Chat => draw_chat(f, app),
    }
}

fn draw_api_key(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 9, f.size());
    f.render_widget(Clear, area);

    let masked: String = "•".repeat(app.key_input.chars().count());
    let text = Text::from(vec![
        Line::from("🚨 선생님이 칠판을 준비하지 못했어요. (API 키를 설정해주세요)"),
        Line::from(""),
        Line::from(format!("API Key: {masked}")),
        Line::from(""),
        Line::from(Span::styled(
            "Enter 입력 완료  |  Esc 종료  |  GEMINI_API_KEY 환경변수도 사용할 수 있어요",
            Style::default().fg(Color::Gray),
        )),
    ]);

    let entry = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("⚙️ 설정")
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(entry, area);
}

fn draw_idea_select(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(6),  // Welcome
            Constraint::Min(9),     // Options
            Constraint::Length(3),  // Custom input
            Constraint::Length(1),  // Status bar
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);

    let welcome = Paragraph::new(
        "안녕하세요! 선생님입니다.\n\
         오늘은 여러분이 직접 생각해낸 아이디어를 현실적인 창업 아이디어로 발전시켜보는 시간입니다.\n\
         어떤 물건이나 아이디어를 생각해 내서 팔아보고 싶어요?\n\
         아래에서 가장 관심 있는 분야를 선택해주세요.",
    )
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("👩‍🏫 창업 멘토링실"));
    f.render_widget(welcome, chunks[1]);

    let items: Vec<ListItem> = app
        .idea_labels()
        .into_iter()
        .map(ListItem::new)
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(app.idea_cursor));

    let options = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("💡 아이디어 선택하기 (↑/↓ 이동, Enter 선택)")
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol(">> ");
    f.render_stateful_widget(options, chunks[2], &mut list_state);

    let custom_active = app.custom_idea_selected();
    let custom = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("어떤 종류의 아이디어를 원하시나요? (예: 운동용품, 반려동물 용품)")
            .border_style(if custom_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(custom, chunks[3]);
    if custom_active {
        f.set_cursor(
            chunks[3].x + 1 + app.input.width() as u16,
            chunks[3].y + 1,
        );
    }

    draw_status_bar(f, app, chunks[4]);
}

fn draw_chat(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Messages
            Constraint::Length(3),  // Input
            Constraint::Length(1),  // Status bar
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);
    draw_messages(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
    draw_status_bar(f, app, chunks[3]);

    if app.celebrate_ticks > 0 {
        draw_balloons(f, app, chunks[1]);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_text = Line::from(vec![
        Span::styled(" 👩‍🏫 ", Style::default()),
        Span::styled(
            "창업 아이디어 멘토링",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Cyan),
        ),
        Span::styled("  |  ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("주제: {}", app.state.category.label()),
            Style::default().fg(Color::Green),
        ),
        if app.is_thinking {
            Span::styled(
                format!("  {} 선생님이 아이디어를 검토하고 있습니다...", app.spinner_frame()),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::raw("")
        },
    ]);

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .alignment(Alignment::Left);
    f.render_widget(header, area);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .state
        .transcript
        .visible()
        .map(|message| ListItem::new(format_message(message.role, &message.content)))
        .collect();

    if app.is_thinking {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} ...", app.spinner_frame()),
            Style::default().fg(Color::Yellow),
        ))));
    }

    let messages = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("상담 기록 ({}턴)", app.state.transcript.visible_len()))
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(messages, area);
}

fn format_message(role: Role, content: &str) -> Text<'static> {
    let (avatar, name_style) = match role {
        Role::Assistant => ("👩‍🏫 선생님", Style::default().fg(Color::Magenta)),
        Role::User => ("🧒 학생", Style::default().fg(Color::Cyan)),
        Role::System => ("· 시스템", Style::default().fg(Color::DarkGray)),
    };

    let mut lines = vec![Line::from(Span::styled(
        avatar.to_string(),
        name_style.add_modifier(Modifier::BOLD),
    ))];
    for line in content.lines() {
        lines.push(Line::from(format!("  {line}")));
    }
    lines.push(Line::from(""));
    Text::from(lines)
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_thinking {
        "잠시만요, 선생님이 검토 중입니다"
    } else {
        "아이디어를 구체적으로 설명해주세요 (예: 칠판 지우개 청소 로봇)"
    };

    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if app.is_thinking {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow)
            }),
    );
    f.render_widget(input, area);
    if !app.is_thinking {
        f.set_cursor(area.x + 1 + app.input.width() as u16, area.y + 1);
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status {
        Some(status) => status.clone(),
        None => {
            "Enter 보내기 | Ctrl+T 주제 변경 | Ctrl+S 일지 저장 | Ctrl+L 새로 시작 | Esc 종료"
                .to_string()
        }
    };
    let bar = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Gray),
    )));
    f.render_widget(bar, area);
}

/// Balloon rows drift upward while the celebration ticks run down.
fn draw_balloons(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }
    let row = area.y + 1 + (u16::from(app.celebrate_ticks) % (area.height - 2));
    let balloon_area = Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1);
    let balloons = Paragraph::new("🎈   🎈    🎈   🎈    🎈   🎈").alignment(Alignment::Center);
    f.render_widget(Clear, balloon_area);
    f.render_widget(balloons, balloon_area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
