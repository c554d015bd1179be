use board::{Intent, SortKey, Token, TokenStatus, WorkingSet};
use board_core::shutdown;
use board_core::store::Store;
use board_core::{AppState, BoardConfig, StoreEvent, ViewEngine};
use std::sync::Arc;
use std::time::Duration;

fn token_a() -> Token {
    Token::new("a", "AAA", "Alpha", TokenStatus::New, 10, 100).with_price(1.0)
}

fn token_b() -> Token {
    Token::new("b", "BBB", "Beta", TokenStatus::New, 20, 200).with_price(1.0)
}

fn ids(tokens: &[Arc<Token>]) -> Vec<&str> {
    tokens.iter().map(|t| t.id().as_str()).collect()
}

/// Walks the canonical scenario through the reducer and the view engine.
#[test]
fn test_board_scenario() {
    let mut state = AppState::new();
    let mut views = ViewEngine::new();
    assert!(!state.is_ready());

    let set = WorkingSet::new(vec![token_a(), token_b()], vec![], vec![]).unwrap();
    state.apply(Intent::BulkLoad(set)).unwrap();
    assert!(state.is_ready());
    assert_eq!(state.sort_key(), SortKey::Recency);
    assert_eq!(ids(&views.view(&state, TokenStatus::New)), vec!["b", "a"]);

    state
        .apply(Intent::update_price(TokenStatus::New, "a", 5.0))
        .unwrap();
    let column = views.view(&state, TokenStatus::New);
    assert_eq!(ids(&column), vec!["b", "a"]);
    assert_eq!(column[1].price(), 5.0);

    state.apply(Intent::SetFilterText("B".into())).unwrap();
    assert_eq!(ids(&views.view(&state, TokenStatus::New)), vec!["b"]);

    state.apply(Intent::select("a")).unwrap();
    let model = views.read_model(&state);
    let selected = model.selected().expect("a is selected");
    assert_eq!(selected.token().id().as_str(), "a");
    assert_eq!(selected.token().price(), 5.0);

    let before = state.clone();
    let event = state
        .apply(Intent::update_price(TokenStatus::New, "nonexistent", 99.0))
        .unwrap();
    assert!(event.is_none());
    assert_eq!(state, before, "state must be structurally unchanged");
}

/// Same scenario, delivered through the store actor.
#[tokio::test]
async fn test_board_scenario_through_store() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (store, handle) = Store::new(&BoardConfig::default());
    let (trigger, listener) = shutdown::channel();
    let task = tokio::spawn(store.run(listener));
    let mut events = handle.events();
    let mut views = ViewEngine::new();

    let set = WorkingSet::new(vec![token_a(), token_b()], vec![], vec![]).unwrap();
    handle.dispatch(Intent::BulkLoad(set)).await.unwrap();
    handle
        .dispatch(Intent::update_price(TokenStatus::New, "a", 5.0))
        .await
        .unwrap();
    handle
        .dispatch(Intent::SetFilterText("B".into()))
        .await
        .unwrap();
    handle.dispatch(Intent::select("a")).await.unwrap();
    handle
        .dispatch(Intent::update_price(TokenStatus::New, "nonexistent", 99.0))
        .await
        .unwrap();
    // A trailing real change proves the miss above was processed without an event.
    handle
        .dispatch(Intent::SetSortKey(SortKey::Volume))
        .await
        .unwrap();

    let mut received = Vec::new();
    loop {
        let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .expect("event expected")
            .unwrap();
        let done = matches!(event, StoreEvent::SortKeyChanged(_));
        received.push(event);
        if done {
            break;
        }
    }

    assert_eq!(received.len(), 5, "no event for the missed update: {:?}", received);
    assert!(matches!(received[0], StoreEvent::Loaded { counts: [2, 0, 0] }));
    assert!(matches!(received[1], StoreEvent::PriceChanged { .. }));
    assert!(matches!(received[2], StoreEvent::FilterTextChanged(_)));
    assert!(matches!(received[3], StoreEvent::SelectionChanged { .. }));

    let state = handle.snapshot();
    assert_eq!(ids(&views.view(&state, TokenStatus::New)), vec!["b"]);
    assert_eq!(
        views.read_model(&state).selected().unwrap().token().price(),
        5.0
    );

    trigger.trigger();
    task.await.unwrap();
}
