//! Dispatcher behaviour against the in-memory and mocked stores.

mod common;

use common::*;
use hastebot::{Dispatcher, Reply};
use quote_store::{MemoryStore, StateData, StateStore};
use signal_client::{IncomingEvent, MessageSegment};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn setup(data: StateData) -> (Arc<MemoryStore>, Dispatcher) {
    let store = Arc::new(MemoryStore::with_data(data));
    let dispatcher = Dispatcher::new(store.clone());
    (store, dispatcher)
}

fn enabled_group() -> StateData {
    StateData {
        bot_conversations: [GROUP.to_string()].into_iter().collect(),
        ..Default::default()
    }
}

fn payloads(replies: Vec<Reply>) -> Vec<String> {
    replies.into_iter().map(|r| r.payload).collect()
}

#[tokio::test]
async fn test_admin_enables_and_disables() {
    let (store, dispatcher) = setup(StateData::default());

    let replies = dispatcher.dispatch(&admin_event("!bot on")).await;
    assert_eq!(
        replies,
        vec![Reply {
            conversation_id: GROUP.into(),
            payload: "is now enabled.".into(),
        }]
    );
    assert!(store.is_enabled(GROUP).await.unwrap());

    let replies = dispatcher.dispatch(&admin_event("! BOT OFF")).await;
    assert_eq!(payloads(replies), vec!["is now disabled.".to_string()]);
    assert!(!store.is_enabled(GROUP).await.unwrap());
}

#[tokio::test]
async fn test_enable_twice_keeps_one_entry() {
    let (store, dispatcher) = setup(StateData::default());

    dispatcher.dispatch(&admin_event("!bot on")).await;
    let replies = dispatcher.dispatch(&admin_event("!bot on")).await;

    // Still confirmed the second time
    assert_eq!(payloads(replies), vec!["is now enabled.".to_string()]);
    assert_eq!(store.snapshot().await.bot_conversations.len(), 1);
}

#[tokio::test]
async fn test_non_admin_cannot_toggle() {
    let (store, dispatcher) = setup(StateData::default());

    let replies = dispatcher.dispatch(&user_event("!bot on")).await;

    assert!(replies.is_empty());
    assert!(!store.is_enabled(GROUP).await.unwrap());
}

#[tokio::test]
async fn test_admin_toggle_requires_exact_command() {
    let (store, dispatcher) = setup(StateData::default());

    let replies = dispatcher.dispatch(&admin_event("!bot onward")).await;

    assert!(replies.is_empty());
    assert!(!store.is_enabled(GROUP).await.unwrap());
}

#[tokio::test]
async fn test_quotes_ignored_when_disabled() {
    let (store, dispatcher) = setup(StateData {
        quotes_stored: vec!["a".into()],
        ..Default::default()
    });

    assert!(dispatcher.dispatch(&user_event("!quote")).await.is_empty());
    assert!(dispatcher.dispatch(&user_event("quote hello")).await.is_empty());
    assert!(store.pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_quote_count() {
    let mut data = enabled_group();
    data.quotes_stored = vec!["a".into(), "b".into(), "c".into()];
    data.quotes_pending = vec!["d".into(), "e".into()];
    let (_store, dispatcher) = setup(data);

    for command in ["!quote count", "?quote", "? quote", "quote?", "QUOTE? how many"] {
        let replies = dispatcher.dispatch(&user_event(command)).await;
        assert_eq!(
            payloads(replies),
            vec!["has 3 quotes available and 2 pending.".to_string()],
            "{}",
            command
        );
    }
}

#[tokio::test]
async fn test_random_quote() {
    let mut data = enabled_group();
    data.quotes_stored = vec!["first".into(), "second".into()];
    let (_store, dispatcher) = setup(data);

    for command in ["!quote", "! quote", "quote!", "Quote! now"] {
        let replies = payloads(dispatcher.dispatch(&user_event(command)).await);
        assert_eq!(replies.len(), 1, "{}", command);
        assert!(replies[0] == "first" || replies[0] == "second");
    }
}

#[tokio::test]
async fn test_random_quote_reaches_every_quote() {
    let mut data = enabled_group();
    data.quotes_stored = vec!["first".into(), "second".into()];
    let (_store, dispatcher) = setup(data);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let replies = dispatcher.dispatch(&user_event("!quote")).await;
        seen.extend(payloads(replies));
        if seen.len() == 2 {
            break;
        }
    }

    assert!(seen.contains("first"));
    assert!(seen.contains("second"));
}

#[tokio::test]
async fn test_random_quote_empty_sends_empty_reply() {
    let (_store, dispatcher) = setup(enabled_group());

    let replies = dispatcher.dispatch(&user_event("!quote")).await;

    assert_eq!(payloads(replies), vec![String::new()]);
}

#[tokio::test]
async fn test_submit_pending_quote_dedup() {
    let (store, dispatcher) = setup(enabled_group());

    let first = dispatcher.dispatch(&user_event("quote life is good")).await;
    assert_eq!(payloads(first), vec!["has 1 new quotes pending.".to_string()]);

    let second = dispatcher.dispatch(&user_event("QUOTE  life is good")).await;
    assert!(second.is_empty());

    assert_eq!(
        store.pending().await.unwrap(),
        vec!["life is good".to_string()]
    );

    let third = dispatcher.dispatch(&user_event("Quote Fun is fun")).await;
    assert_eq!(payloads(third), vec!["has 2 new quotes pending.".to_string()]);
    assert_eq!(
        store.pending().await.unwrap(),
        vec!["life is good".to_string(), "Fun is fun".to_string()]
    );
}

#[tokio::test]
async fn test_submitted_quote_keeps_line_breaks_and_case() {
    let (store, dispatcher) = setup(enabled_group());

    dispatcher
        .dispatch(&user_event("  Quote Of the day:\nBe Nice  "))
        .await;

    assert_eq!(
        store.pending().await.unwrap(),
        vec!["Of the day:\nBe Nice".to_string()]
    );
}

#[tokio::test]
async fn test_bare_quote_keyword_stores_nothing() {
    let (store, dispatcher) = setup(enabled_group());

    assert!(dispatcher.dispatch(&user_event("quote")).await.is_empty());
    assert!(dispatcher.dispatch(&user_event(" Quote  ")).await.is_empty());
    assert!(store.pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unmatched_text_is_silent() {
    let (store, dispatcher) = setup(enabled_group());

    assert!(dispatcher.dispatch(&user_event("hello there")).await.is_empty());
    assert!(dispatcher.dispatch(&user_event("")).await.is_empty());
    assert!(dispatcher.dispatch(&admin_event("unquote")).await.is_empty());
    assert!(store.pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_attachment_only_message_is_silent() {
    let (_store, dispatcher) = setup(enabled_group());

    let mut event: IncomingEvent = user_event("");
    event.segments = vec![MessageSegment::Other, MessageSegment::Other];

    assert!(dispatcher.dispatch(&event).await.is_empty());
}

#[tokio::test]
async fn test_enablement_read_before_commands_run() {
    let (_store, dispatcher) = setup(StateData {
        quotes_stored: vec!["a".into()],
        ..Default::default()
    });
    let ctx = dispatcher.context(&admin_event("!bot on")).await.unwrap();

    assert!(ctx.is_admin);
    assert!(!ctx.is_enabled);
    let selected: Vec<&str> = dispatcher.select(&ctx).into_iter().map(|h| h.name()).collect();
    assert_eq!(selected, vec!["bot on"]);
}

#[tokio::test]
async fn test_admin_can_also_use_quote_commands() {
    let mut data = enabled_group();
    data.quotes_stored = vec!["only".into()];
    let (_store, dispatcher) = setup(data);

    let replies = dispatcher.dispatch(&admin_event("!quote")).await;
    assert_eq!(payloads(replies), vec!["only".to_string()]);
}

#[tokio::test]
async fn test_storage_failure_on_write_skips_reply() {
    let mut store = MockStore::new();
    store.expect_is_enabled().returning(|_| Ok(false));
    store.expect_enable().times(1).returning(|_| Err(unavailable()));

    let dispatcher = Dispatcher::new(Arc::new(store));

    assert!(dispatcher.dispatch(&admin_event("!bot on")).await.is_empty());
}

#[tokio::test]
async fn test_storage_failure_on_pending_skips_reply() {
    let mut store = MockStore::new();
    store.expect_is_enabled().returning(|_| Ok(true));
    store.expect_add_pending().times(1).returning(|_| Err(unavailable()));
    store.expect_pending().never();

    let dispatcher = Dispatcher::new(Arc::new(store));

    assert!(dispatcher.dispatch(&user_event("quote me")).await.is_empty());
}

#[tokio::test]
async fn test_storage_failure_on_read_skips_event() {
    let mut store = MockStore::new();
    store.expect_is_enabled().returning(|_| Err(unavailable()));
    store.expect_enable().never();

    let dispatcher = Dispatcher::new(Arc::new(store));

    assert!(dispatcher.dispatch(&admin_event("!bot on")).await.is_empty());
}

#[tokio::test]
async fn test_failure_keeps_dispatcher_usable() {
    let mut store = MockStore::new();
    store.expect_is_enabled().returning(|_| Ok(true));
    let calls = AtomicUsize::new(0);
    store.expect_quotes().returning(move || {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(unavailable())
        } else {
            Ok(vec!["back".into()])
        }
    });

    let dispatcher = Dispatcher::new(Arc::new(store));

    assert!(dispatcher.dispatch(&user_event("!quote")).await.is_empty());
    assert_eq!(
        payloads(dispatcher.dispatch(&user_event("!quote")).await),
        vec!["back".to_string()]
    );
}
