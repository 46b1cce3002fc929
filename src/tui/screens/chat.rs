// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat screen
//!
//! Transcript, input area, and the sidebar from the desktop shell. The
//! assistant side is the placeholder engine: every send schedules one
//! canned reply, delivered through the app event channel. Tearing the
//! screen down cancels anything still queued.

use std::time::Duration;

use ratatui::prelude::*;
use tracing::debug;

use crate::assistant::{ReplyScheduler, GREETING};
use crate::tui::events::EventSender;
use crate::tui::state::{InputState, ScrollState, Transcript};
use crate::tui::widgets::{render_input_with_hints, render_messages, InputArea, StatusBar};

/// Sidebar quick actions (visual only, matching the desktop shell)
pub const QUICK_ACTIONS: &[&str] = &[
    "New Conversation",
    "AI Analysis",
    "Quick Tasks",
    "Settings",
];

/// Static recent-conversation entries shown in the sidebar
pub const RECENT_CONVERSATIONS: &[(&str, &str)] = &[
    ("Getting Started with Nyra", "2 minutes ago"),
    ("Project Planning Help", "1 hour ago"),
    ("Code Review Session", "Yesterday"),
];

const SIDEBAR_WIDTH: u16 = 30;

/// Chat screen state
#[derive(Debug)]
pub struct ChatScreen {
    pub transcript: Transcript,
    pub input: InputState,
    pub scroll: ScrollState,
    pub replies: ReplyScheduler,
    /// Mic toggle; purely visual, no capture happens
    pub is_listening: bool,
    pub sidebar_visible: bool,
}

impl ChatScreen {
    /// Create the screen with the greeting already in the transcript
    pub fn new(tx: EventSender, reply_delay: Duration) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_assistant(GREETING);

        Self {
            transcript,
            input: InputState::new(),
            scroll: ScrollState::new(),
            replies: ReplyScheduler::with_delay(tx, reply_delay),
            is_listening: false,
            sidebar_visible: true,
        }
    }

    /// Submit the input buffer as a message
    pub fn send_current_input(&mut self) {
        let text = self.input.submit();
        self.send(&text);
    }

    /// Append a user message and schedule its reply.
    /// Blank or whitespace-only input is ignored entirely.
    pub fn send(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.transcript.push_user(text);
        self.scroll.invalidate_cache();
        self.replies.schedule();
    }

    /// Deliver a due assistant reply into the transcript
    pub fn apply_reply(&mut self, text: String) {
        self.transcript.push_assistant(text);
        self.scroll.invalidate_cache();
    }

    pub fn toggle_listening(&mut self) {
        self.is_listening = !self.is_listening;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Cancel all pending replies; called when the screen goes away
    pub fn teardown(&mut self) {
        let pending = self.replies.pending_count();
        if pending > 0 {
            debug!(pending, "cancelling pending assistant replies");
        }
        self.replies.cancel_all();
    }

    /// Render the chat screen into the full frame area
    pub fn render(&mut self, f: &mut Frame, area: Rect, platform: &str) {
        let (sidebar_area, main_area) = if self.sidebar_visible && area.width > 2 * SIDEBAR_WIDTH
        {
            let chunks = Layout::horizontal([
                Constraint::Length(SIDEBAR_WIDTH),
                Constraint::Min(20),
            ])
            .split(area);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, area)
        };

        if let Some(sidebar) = sidebar_area {
            self.render_sidebar(f, sidebar);
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // status bar
            Constraint::Min(4),    // messages
            Constraint::Length(4), // input + hints
        ])
        .split(main_area);

        let pending = self.replies.pending_count();
        f.render_widget(
            StatusBar::new(platform)
                .listening(self.is_listening)
                .pending_replies(pending),
            chunks[0],
        );

        self.render_messages_area(f, chunks[1]);
        self.render_input_area(f, chunks[2], pending);
    }

    fn render_messages_area(&mut self, f: &mut Frame, area: Rect) {
        self.scroll.update_viewport_height(area.height);
        let total = self.scroll.total_height(self.transcript.messages(), area.width);
        self.scroll.maybe_follow(total);

        render_messages(
            self.transcript.messages(),
            area,
            f.buffer_mut(),
            self.scroll.scroll_offset,
        );
    }

    fn render_input_area(&self, f: &mut Frame, area: Rect, pending: usize) {
        let mut widget = InputArea::new(&self.input)
            .prompt("> ")
            .placeholder("Type your message here...")
            .busy(pending > 0);
        if pending > 0 {
            widget = widget.title(format!(" Thinking ({pending} queued) "));
        }

        let input_rect = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let (cursor_x, cursor_y) = widget.cursor_position(input_rect);

        let mic = if self.is_listening { "mic off" } else { "mic on" };
        let hints: [(&str, &str); 4] = [
            ("Enter", "Send"),
            ("Ctrl+L", mic),
            ("PgUp/PgDn", "Scroll"),
            ("Esc", "Quit"),
        ];
        render_input_with_hints(area, f.buffer_mut(), widget, &hints);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    fn render_sidebar(&self, f: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders};

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = vec![
            Line::from(vec![
                Span::styled(" Nyra", Style::default().fg(Color::Cyan).bold()),
                Span::styled("  AI Assistant", Style::default().fg(Color::DarkGray)),
            ]),
            Line::default(),
            Line::from(Span::styled(
                " Quick Actions",
                Style::default().fg(Color::Gray).bold(),
            )),
        ];
        for action in QUICK_ACTIONS {
            lines.push(Line::from(Span::styled(
                format!("   {action}"),
                Style::default().fg(Color::White),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Recent Conversations",
            Style::default().fg(Color::Gray).bold(),
        )));
        for (title, when) in RECENT_CONVERSATIONS {
            lines.push(Line::from(Span::styled(
                format!("   {title}"),
                Style::default().fg(Color::White),
            )));
            lines.push(Line::from(Span::styled(
                format!("     {when}"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        f.render_widget(ratatui::widgets::Paragraph::new(Text::from(lines)), inner);
    }
}

impl Drop for ChatScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{CANNED_REPLY, REPLY_DELAY};
    use crate::tui::events::{create_event_channel, AppEvent};
    use crate::tui::state::Author;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_new_screen_is_seeded_with_greeting() {
        let (tx, _rx) = create_event_channel();
        let screen = ChatScreen::new(tx, REPLY_DELAY);

        assert_eq!(screen.transcript.len(), 1);
        let greeting = screen.transcript.last().unwrap();
        assert_eq!(greeting.author, Author::Assistant);
        assert_eq!(greeting.text, GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_send_is_a_noop() {
        let (tx, mut rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        screen.send("");
        screen.send("   \t  ");

        assert_eq!(screen.transcript.len(), 1); // just the greeting
        tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_message_and_schedules_reply() {
        let (tx, mut rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        screen.send("Hello");

        assert_eq!(screen.transcript.len(), 2);
        let last = screen.transcript.last().unwrap();
        assert_eq!(last.author, Author::User);
        assert_eq!(last.text, "Hello");

        tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
        match rx.try_recv() {
            Ok(AppEvent::AssistantReply(text)) => {
                screen.apply_reply(text.clone());
                assert_eq!(text, CANNED_REPLY);
            }
            other => panic!("expected reply event, got {other:?}"),
        }

        assert_eq!(screen.transcript.len(), 3);
        assert_eq!(screen.transcript.last().unwrap().author, Author::Assistant);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_sends_produce_two_replies_in_order() {
        let (tx, mut rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        screen.send("first");
        screen.send("second");
        assert_eq!(screen.transcript.count_by(Author::User), 2);

        tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
        while let Ok(AppEvent::AssistantReply(text)) = rx.try_recv() {
            screen.apply_reply(text);
        }

        assert_eq!(screen.transcript.count_by(Author::User), 2);
        // Greeting plus one reply per send
        assert_eq!(screen.transcript.count_by(Author::Assistant), 3);

        // User entries come in send order
        let users: Vec<&str> = screen
            .transcript
            .messages()
            .iter()
            .filter(|m| m.author == Author::User)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(users, vec!["first", "second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_current_input_clears_buffer() {
        let (tx, _rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        screen.input.set_buffer("Hello".to_string());
        screen.send_current_input();

        assert!(screen.input.is_empty());
        assert_eq!(screen.transcript.last().unwrap().text, "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_replies() {
        let (tx, mut rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        screen.send("Hello");
        screen.teardown();

        tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_replies() {
        let (tx, mut rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        screen.send("Hello");
        drop(screen);

        tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_toggles() {
        let (tx, _rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        assert!(!screen.is_listening);
        screen.toggle_listening();
        assert!(screen.is_listening);
        screen.toggle_listening();
        assert!(!screen.is_listening);

        assert!(screen.sidebar_visible);
        screen.toggle_sidebar();
        assert!(!screen.sidebar_visible);
    }

    #[tokio::test]
    async fn test_render_wide_terminal_shows_sidebar() {
        let (tx, _rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| screen.render(f, f.area(), "linux"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Quick Actions"));
        assert!(text.contains("Recent Conversations"));
        assert!(text.contains("Nyra Assistant"));
        assert!(text.contains("Type your message here..."));
    }

    #[tokio::test]
    async fn test_render_narrow_terminal_hides_sidebar() {
        let (tx, _rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        let backend = TestBackend::new(50, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| screen.render(f, f.area(), "linux"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("Quick Actions"));
    }

    #[tokio::test]
    async fn test_render_tiny_terminal_does_not_panic() {
        let (tx, _rx) = create_event_channel();
        let mut screen = ChatScreen::new(tx, REPLY_DELAY);

        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| screen.render(f, f.area(), "linux"))
            .unwrap();
    }
}
