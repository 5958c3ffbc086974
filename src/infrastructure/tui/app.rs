//! Main application state and event loop

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

use super::input::KeywordInput;
use super::ui;
use crate::domain::search::SortOrder;
use crate::infrastructure::worker::SearchController;

/// 每帧等待输入的最长时间
const TICK_RATE: Duration = Duration::from_millis(50);

/// 滚动一页的行数
const PAGE_SCROLL: u16 = 10;

/// 当前焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyword,
    Order,
    Results,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Keyword => Focus::Order,
            Focus::Order => Focus::Results,
            Focus::Results => Focus::Keyword,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Keyword => Focus::Results,
            Focus::Order => Focus::Keyword,
            Focus::Results => Focus::Order,
        }
    }
}

/// TUI 状态
pub struct App {
    pub keyword: KeywordInput,
    pub order: SortOrder,
    pub focus: Focus,
    /// 结果区滚动位置（行）
    pub scroll: u16,
    pub controller: SearchController,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: SearchController, default_order: SortOrder) -> Self {
        Self {
            keyword: KeywordInput::new(),
            order: default_order,
            focus: Focus::Keyword,
            scroll: 0,
            controller,
            should_quit: false,
        }
    }

    /// 以当前关键词和排序提交检索
    pub fn submit(&mut self) {
        self.scroll = 0;
        self.controller.submit(self.keyword.value(), self.order);
    }

    /// 收取检索结果
    pub fn on_tick(&mut self) {
        if self.controller.poll() {
            self.scroll = 0;
        }
    }

    fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.scroll_down(3),
                MouseEventKind::ScrollUp => self.scroll_up(3),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Enter, _) => {
                self.submit();
                return;
            }
            (KeyCode::Tab, _) => {
                self.focus = self.focus.next();
                return;
            }
            (KeyCode::BackTab, _) => {
                self.focus = self.focus.prev();
                return;
            }
            (KeyCode::PageUp, _) => {
                self.scroll_up(PAGE_SCROLL);
                return;
            }
            (KeyCode::PageDown, _) => {
                self.scroll_down(PAGE_SCROLL);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Keyword => match key.code {
                KeyCode::Up => self.scroll_up(1),
                KeyCode::Down => self.scroll_down(1),
                _ => {
                    self.keyword.handle_key(key.code, key.modifiers);
                }
            },
            Focus::Order => match key.code {
                KeyCode::Left | KeyCode::Up => self.order = self.order.prev(),
                KeyCode::Right | KeyCode::Down => self.order = self.order.next(),
                _ => {}
            },
            Focus::Results => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
                KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// 需在 tokio 多线程运行时内调用（检索任务在运行时的工作线程上执行）
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?);
        }
        if app.should_quit {
            break;
        }

        app.on_tick();
    }

    app.controller.cancel();
    tracing::info!("TUI closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SearchNovelsHandler;
    use crate::infrastructure::adapters::{FakeNarouClient, FakeNarouClientConfig};
    use crate::infrastructure::memory::InMemorySearchSlot;
    use crate::infrastructure::worker::SearchState;
    use std::sync::Arc;

    fn app() -> App {
        let fake = Arc::new(FakeNarouClient::new(FakeNarouClientConfig {
            total_count: 3,
            ..Default::default()
        }));
        let handler = Arc::new(SearchNovelsHandler::new(fake));
        let controller = SearchController::new(handler, Arc::new(InMemorySearchSlot::new()));
        App::new(controller, SortOrder::New)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[tokio::test]
    async fn test_typing_and_submit() {
        let mut app = app();
        for c in "剣".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.is_searching());

        let document = app.controller.wait().await.unwrap();
        assert_eq!(document.to_markdown(), "---\n剣の検索結果（全3件）\n---\n---");
    }

    #[tokio::test]
    async fn test_submit_empty_keyword() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.controller.state(), SearchState::Displaying { .. }));
    }

    #[tokio::test]
    async fn test_order_selector_and_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Order);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.order, SortOrder::FavNovelCnt);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.order, SortOrder::Old);

        // 排序焦点下字符不会进入输入框
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.keyword.value(), "");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Keyword);
    }

    #[tokio::test]
    async fn test_scroll_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, PAGE_SCROLL);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, PAGE_SCROLL - 1);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
