// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Integration tests for the TUI
//!
//! These tests exercise the screen router and chat flow without an
//! actual terminal.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use nyra::assistant::{CANNED_REPLY, GREETING, REPLY_DELAY};
use nyra::config::Settings;
use nyra::host::HostInfo;
use nyra::tui::app::{App, Screen};
use nyra::tui::state::Author;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn test_app() -> App {
    App::new(Settings::default(), HostInfo::detect())
}

// ===== Full Flow Integration Tests =====

#[tokio::test]
async fn test_full_navigation_flow_welcome_to_chat() {
    let mut app = test_app();
    assert!(matches!(app.screen, Screen::Welcome));

    // Get started
    app.handle_key(key(KeyCode::Enter));
    assert!(matches!(app.screen, Screen::Setup(_)));

    // Walk all three wizard steps
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));

    let Screen::Chat(chat) = &app.screen else {
        panic!("expected chat screen after setup completion");
    };
    assert_eq!(chat.transcript.len(), 1);
    assert_eq!(chat.transcript.last().unwrap().text, GREETING);
}

#[tokio::test]
async fn test_backing_all_the_way_out_returns_to_welcome() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Enter)); // -> setup
    app.handle_key(key(KeyCode::Enter)); // -> data step
    app.handle_key(key(KeyCode::Enter)); // -> preferences

    app.handle_key(key(KeyCode::Esc)); // -> data
    app.handle_key(key(KeyCode::Esc)); // -> install
    app.handle_key(key(KeyCode::Esc)); // -> welcome
    assert!(matches!(app.screen, Screen::Welcome));
}

#[tokio::test]
async fn test_wizard_edits_do_not_survive_reentry() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(key(KeyCode::End));
    for c in "/custom".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    if let Screen::Setup(setup) = &app.screen {
        assert!(setup.field.text().ends_with("/custom"));
    }

    // Leave and come back: selections were view state only
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Enter));
    if let Screen::Setup(setup) = &app.screen {
        assert_eq!(setup.field.text(), "/Applications/Nyra");
    } else {
        panic!("expected setup screen");
    }
}

// ===== Chat Flow Integration Tests =====

#[tokio::test(start_paused = true)]
async fn test_send_produces_delayed_canned_reply() {
    let mut app = App::new_at_chat(Settings::default(), HostInfo::detect());

    for c in "Hello".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));

    // User entry is appended synchronously
    if let Screen::Chat(chat) = &app.screen {
        assert_eq!(chat.transcript.count_by(Author::User), 1);
        assert_eq!(chat.transcript.count_by(Author::Assistant), 1); // greeting
    }

    // Let the reply timer fire, then drain the queued event
    tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
    app.drain_events();

    let Screen::Chat(chat) = &app.screen else {
        panic!("expected chat screen");
    };
    assert_eq!(chat.transcript.count_by(Author::Assistant), 2);
    let last = chat.transcript.last().unwrap();
    assert_eq!(last.author, Author::Assistant);
    assert_eq!(last.text, CANNED_REPLY);
}

#[tokio::test(start_paused = true)]
async fn test_two_sends_get_two_replies_in_order() {
    let mut app = App::new_at_chat(Settings::default(), HostInfo::detect());

    for text in ["first", "second"] {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
    app.drain_events();

    let Screen::Chat(chat) = &app.screen else {
        panic!("expected chat screen");
    };
    // Greeting, user, user, reply, reply with user entries in send order
    assert_eq!(chat.transcript.count_by(Author::Assistant), 3);
    assert_eq!(chat.transcript.count_by(Author::User), 2);
    let users: Vec<&str> = chat
        .transcript
        .messages()
        .iter()
        .filter(|m| m.author == Author::User)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(users, vec!["first", "second"]);

    // Ids strictly increase across the whole session
    let ids: Vec<u64> = chat.transcript.messages().iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(start_paused = true)]
async fn test_blank_send_changes_nothing() {
    let mut app = App::new_at_chat(Settings::default(), HostInfo::detect());

    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Enter));

    tokio::time::sleep(REPLY_DELAY + Duration::from_millis(10)).await;
    app.drain_events();

    let Screen::Chat(chat) = &app.screen else {
        panic!("expected chat screen");
    };
    assert_eq!(chat.transcript.len(), 1); // greeting only
}

#[tokio::test(start_paused = true)]
async fn test_quit_cancels_pending_replies() {
    let mut app = App::new_at_chat(Settings::default(), HostInfo::detect());

    for c in "Hello".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Esc)); // quit tears the chat down

    assert!(app.should_quit);
    if let Screen::Chat(chat) = &mut app.screen {
        assert_eq!(chat.replies.pending_count(), 0);
    }
}

// ===== Settings Integration =====

#[tokio::test(start_paused = true)]
async fn test_reply_delay_is_configurable() {
    let settings = Settings::from_toml_str(
        r#"
        [assistant]
        reply_delay_ms = 100
        "#,
    )
    .unwrap();
    let mut app = App::new_at_chat(settings, HostInfo::detect());

    for c in "hi".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));

    tokio::time::sleep(Duration::from_millis(110)).await;
    app.drain_events();

    let Screen::Chat(chat) = &app.screen else {
        panic!("expected chat screen");
    };
    assert_eq!(chat.transcript.count_by(Author::Assistant), 2);
}

#[tokio::test]
async fn test_wizard_defaults_come_from_settings() {
    let settings = Settings::from_toml_str(
        r#"
        [setup]
        install_dir = "/opt/nyra"
        "#,
    )
    .unwrap();
    let mut app = App::new_at_setup(settings, HostInfo::detect());

    if let Screen::Setup(setup) = &mut app.screen {
        assert_eq!(setup.field.text(), "/opt/nyra");
    } else {
        panic!("expected setup screen");
    }
}
