//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus};
use crate::application::{Document, NovelSection};
use crate::domain::search::SortOrder;
use crate::infrastructure::worker::SearchState;

const APP_TITLE: &str = " 小説家になろう検索 ";
const LOADING: &str = "Now loading...";

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 关键词
            Constraint::Length(3), // 排序
            Constraint::Min(5),    // 结果
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    render_keyword_input(frame, app, chunks[0]);
    render_order_selector(frame, app, chunks[1]);
    render_results(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

fn render_keyword_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Keyword;
    let input = block(APP_TITLE, focused);
    let inner = input.inner(area);

    let paragraph = if app.keyword.value().is_empty() {
        Paragraph::new(Span::styled(
            "キーワードで検索",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(app.keyword.value())
    };
    frame.render_widget(paragraph.block(input), area);

    if focused {
        let before = Span::raw(&app.keyword.text[..app.keyword.cursor]).width() as u16;
        let x = inner.x.saturating_add(before).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_order_selector(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Order;
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(
            app.order.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", arrow_style),
        Span::styled(
            format!("  ({}/{})", app.order.index() + 1, SortOrder::ALL.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block(" 並べ順 ", focused)), area);
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let results = block(" 検索結果 ", app.focus == Focus::Results);
    let inner = results.inner(area);
    let paragraph =
        Paragraph::new(state_lines(app.controller.state())).wrap(Wrap { trim: false });

    // `scroll` 按折行后的行数计算，最后一行停在视口底部
    let rows = paragraph.line_count(inner.width);
    let max_scroll = rows
        .saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16;
    app.scroll = app.scroll.min(max_scroll);

    frame.render_widget(paragraph.block(results).scroll((app.scroll, 0)), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.controller.state() {
        SearchState::Idle => String::new(),
        SearchState::Searching { id } => format!("#{} 検索中", id),
        SearchState::Displaying { id, document } => {
            format!("#{} {}件表示", id, document.section_count())
        }
    };

    let line = Line::from(vec![
        Span::styled(status, Style::default().fg(Color::Yellow)),
        Span::styled(
            "  Enter 検索 · Tab 移動 · ←/→ 並べ順 · ↑/↓ PgUp/PgDn スクロール · Esc 終了",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 结果区的内容
pub fn state_lines(state: &SearchState) -> Vec<Line<'static>> {
    match state {
        SearchState::Idle => Vec::new(),
        SearchState::Searching { .. } => vec![Line::from(LOADING)],
        SearchState::Displaying { document, .. } => document_lines(document),
    }
}

fn rule() -> Line<'static> {
    Line::styled("─".repeat(40), Style::default().fg(Color::DarkGray))
}

/// 把文档转换成带样式的行
pub fn document_lines(document: &Document) -> Vec<Line<'static>> {
    match document {
        Document::Empty => Vec::new(),
        Document::Message(message) => vec![Line::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )],
        Document::Results(results) => {
            let mut lines = vec![
                rule(),
                Line::styled(
                    results.header(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                rule(),
            ];
            for section in &results.sections {
                lines.extend(section_lines(section));
                lines.push(rule());
            }
            lines
        }
    }
}

fn section_lines(section: &NovelSection) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            section.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(section.writer.clone(), Style::default().fg(Color::Gray)),
        Line::styled(
            section.link(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Line::default(),
    ];
    lines.extend(section.story.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::default());
    lines.push(Line::styled(
        section.trailer(),
        Style::default().fg(Color::DarkGray),
    ));
    lines
}
