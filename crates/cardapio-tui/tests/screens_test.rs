//! End-to-end tests for the menu-item screens.
//!
//! These drive the [`App`] the way the event loop does: key events in, store
//! actions in (standing in for completed requests), and assert on the
//! requests issued, the route, and what the store exposes to the screens.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use cardapio_common::types::{CardapioId, CardapioRef, ItemCardapio, ItemCardapioId};
use cardapio_store::action::Action;
use cardapio_store::dispatch::Dispatch;
use cardapio_tui::app::{App, Exit};
use cardapio_tui::element::{
    FIELD_CARDAPIO, FIELD_CATEGORIA, FIELD_DESCRICAO, FIELD_ID, FIELD_NOME, FIELD_VALOR, find,
};
use cardapio_tui::error::TuiError;
use cardapio_tui::event::TerminalEvent;
use cardapio_tui::route::Route;
use cardapio_tui::ui::detail::DetailView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    GetEntity(String),
    GetEntities,
    DeleteEntity(String),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Dispatch for Recorder {
    fn get_entity(&mut self, id: &ItemCardapioId) {
        self.calls.push(Call::GetEntity(id.to_string()));
    }

    fn get_entities(&mut self) {
        self.calls.push(Call::GetEntities);
    }

    fn delete_entity(&mut self, id: &ItemCardapioId) {
        self.calls.push(Call::DeleteEntity(id.to_string()));
    }
}

fn suco() -> ItemCardapio {
    serde_json::from_str(
        r#"{"id":42,"categoria":"Bebidas","nome":"Suco","descricao":"Suco natural","valor":7.5,"cardapio":{"id":1}}"#,
    )
    .expect("fixture parses")
}

fn key(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn open(path: &str) -> App<Recorder> {
    let route: Route = path.parse().expect("valid route");
    App::new(route, Recorder::default()).expect("route has a screen")
}

fn arroz() -> ItemCardapio {
    ItemCardapio {
        id: Some(ItemCardapioId::new("1")),
        nome: Some("Arroz".into()),
        ..ItemCardapio::default()
    }
}

fn feijoada() -> ItemCardapio {
    ItemCardapio {
        id: Some(ItemCardapioId::new("2")),
        nome: Some("Feijoada".into()),
        ..ItemCardapio::default()
    }
}

fn screen_text(app: &App<Recorder>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("test terminal");
    let _ = terminal.draw(|frame| app.draw(frame)).expect("draw failed");
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn deletes(app: &App<Recorder>) -> Vec<&Call> {
    app.dispatch()
        .calls
        .iter()
        .filter(|c| matches!(c, Call::DeleteEntity(_)))
        .collect()
}

// ── Detail view ──────────────────────────────────────────────────────

#[test]
fn detail_mount_fetches_exactly_once() {
    let app = open("/item-cardapio/42");
    assert_eq!(app.dispatch().calls, [Call::GetEntity("42".into())]);
}

#[test]
fn detail_renders_loaded_scenario_values() {
    let mut app = open("/item-cardapio/42");
    app.apply(Action::FetchEntityRequest {
        id: ItemCardapioId::new("42"),
    });
    app.apply(Action::FetchEntitySuccess(suco()));

    let rows = DetailView::fields(&app.state().entity);
    let value = |id| find(&rows, id).map(|r| r.value.clone()).unwrap();
    assert_eq!(value(FIELD_ID), "42");
    assert_eq!(value(FIELD_CATEGORIA), "Bebidas");
    assert_eq!(value(FIELD_NOME), "Suco");
    assert_eq!(value(FIELD_DESCRICAO), "Suco natural");
    assert_eq!(value(FIELD_VALOR), "7.5");
    assert_eq!(value(FIELD_CARDAPIO), "1");
}

#[test]
fn detail_parent_without_reference_is_empty() {
    let mut app = open("/item-cardapio/42");
    let mut item = suco();
    item.cardapio = Some(CardapioRef {
        id: None,
        nome: None,
    });
    app.apply(Action::FetchEntitySuccess(item));

    let rows = DetailView::fields(&app.state().entity);
    assert_eq!(find(&rows, FIELD_CARDAPIO).unwrap().value, "");
}

#[test]
fn detail_back_returns_to_list_and_fetches_it() {
    let mut app = open("/item-cardapio/42");
    app.handle_event(key(KeyCode::Char('b')));

    assert_eq!(app.route(), &Route::List);
    assert_eq!(app.history(), [Route::List]);
    assert_eq!(app.dispatch().calls.last(), Some(&Call::GetEntities));
}

#[test]
fn detail_edit_hands_off_to_host() {
    let mut app = open("/item-cardapio/42");
    app.apply(Action::FetchEntitySuccess(suco()));
    app.handle_event(key(KeyCode::Char('e')));

    assert!(!app.running);
    assert_eq!(
        app.exit(),
        &Exit::Handoff(Route::Edit(ItemCardapioId::new("42")))
    );
}

// ── Delete dialog ────────────────────────────────────────────────────

#[test]
fn dialog_mount_fetches_exactly_once() {
    let app = open("/item-cardapio/42/delete");
    assert_eq!(app.dispatch().calls, [Call::GetEntity("42".into())]);
    assert!(app.running);
}

#[test]
fn dialog_cancel_never_deletes() {
    let mut app = open("/item-cardapio/42/delete");
    app.apply(Action::FetchEntitySuccess(suco()));
    app.handle_event(key(KeyCode::Esc));

    assert!(deletes(&app).is_empty());
    assert_eq!(app.route(), &Route::List);
}

#[test]
fn dialog_confirm_deletes_by_identifier() {
    let mut app = open("/item-cardapio/42/delete");
    app.apply(Action::FetchEntitySuccess(suco()));
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(deletes(&app), [&Call::DeleteEntity("42".into())]);
    assert_eq!(app.route(), &Route::Delete(ItemCardapioId::new("42")));
}

#[test]
fn dialog_leaves_once_when_delete_succeeds() {
    let mut app = open("/item-cardapio/42/delete");
    app.apply(Action::FetchEntitySuccess(suco()));
    app.handle_event(key(KeyCode::Enter));
    app.apply(Action::DeleteRequest {
        id: ItemCardapioId::new("42"),
    });
    app.apply(Action::DeleteSuccess {
        id: ItemCardapioId::new("42"),
    });

    assert_eq!(app.route(), &Route::List);
    let lists_before = app.history().len();

    // A repeated success must not navigate again.
    app.apply(Action::DeleteSuccess {
        id: ItemCardapioId::new("42"),
    });
    assert_eq!(app.history().len(), lists_before);
    assert_eq!(
        app.history(),
        [Route::Delete(ItemCardapioId::new("42")), Route::List]
    );
}

#[test]
fn dialog_stays_open_when_delete_fails() {
    let mut app = open("/item-cardapio/42/delete");
    app.apply(Action::FetchEntitySuccess(suco()));
    app.handle_event(key(KeyCode::Enter));
    app.apply(Action::DeleteRequest {
        id: ItemCardapioId::new("42"),
    });
    app.apply(Action::DeleteFailure("HTTP 409".into()));

    assert_eq!(app.route(), &Route::Delete(ItemCardapioId::new("42")));
    assert!(!app.state().update_success);
    assert!(app.running);
}

#[test]
fn dialog_ignores_flag_already_set_at_mount() {
    let mut app = open("/item-cardapio");
    let mut other = suco();
    other.id = Some(ItemCardapioId::new("7"));
    app.apply(Action::FetchListSuccess(vec![other, suco()]));
    app.apply(Action::DeleteRequest {
        id: ItemCardapioId::new("7"),
    });
    app.apply(Action::DeleteSuccess {
        id: ItemCardapioId::new("7"),
    });
    assert!(app.state().update_success);

    app.handle_event(key(KeyCode::Char('d')));
    assert_eq!(app.route(), &Route::Delete(ItemCardapioId::new("42")));

    app.apply(Action::FetchEntityRequest {
        id: ItemCardapioId::new("42"),
    });
    app.apply(Action::FetchEntitySuccess(suco()));
    assert_eq!(app.route(), &Route::Delete(ItemCardapioId::new("42")));
    assert!(app.running);
}

#[test]
fn dialog_never_deletes_previously_viewed_record() {
    let mut app = open("/item-cardapio/1");
    app.apply(Action::FetchEntityRequest {
        id: ItemCardapioId::new("1"),
    });
    app.apply(Action::FetchEntitySuccess(arroz()));
    app.handle_event(key(KeyCode::Char('b')));
    app.apply(Action::FetchListSuccess(vec![arroz(), feijoada()]));

    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Char('d')));
    assert_eq!(app.route(), &Route::Delete(ItemCardapioId::new("2")));
    app.apply(Action::FetchEntityRequest {
        id: ItemCardapioId::new("2"),
    });
    app.handle_event(key(KeyCode::Char('y')));
    assert!(deletes(&app).is_empty());

    app.apply(Action::FetchEntitySuccess(feijoada()));
    app.handle_event(key(KeyCode::Char('y')));
    assert_eq!(deletes(&app), [&Call::DeleteEntity("2".into())]);
}

#[test]
fn dialog_ignores_slow_completion_of_earlier_fetch() {
    let mut app = open("/item-cardapio/2/delete");
    for id in ["1", "2"] {
        app.apply(Action::FetchEntityRequest {
            id: ItemCardapioId::new(id),
        });
    }
    app.apply(Action::FetchEntitySuccess(arroz()));
    app.handle_event(key(KeyCode::Enter));
    assert!(deletes(&app).is_empty());
    assert!(!screen_text(&app).contains("ItemCardapio 1?"));
}

#[test]
fn detail_failed_fetch_hides_previous_record() {
    let mut app = open("/item-cardapio/1");
    app.apply(Action::FetchEntityRequest {
        id: ItemCardapioId::new("1"),
    });
    app.apply(Action::FetchEntitySuccess(arroz()));
    assert!(screen_text(&app).contains("Arroz"));

    let mut detail = open("/item-cardapio/99");
    detail.apply(Action::FetchEntitySuccess(arroz()));
    detail.apply(Action::FetchEntityRequest {
        id: ItemCardapioId::new("99"),
    });
    detail.apply(Action::FetchEntityFailure("HTTP 404".into()));

    let text = screen_text(&detail);
    assert!(!text.contains("Arroz"), "stale record shown in\n{text}");
    assert!(!text.contains("404"));
}

#[test]
fn back_and_forth_keeps_history_short() {
    let mut app = open("/item-cardapio");
    app.apply(Action::FetchListSuccess(vec![arroz(), feijoada()]));
    for _ in 0..3 {
        app.handle_event(key(KeyCode::Char('d')));
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Char('b')));
    }
    assert_eq!(app.history(), [Route::List]);
}

// ── List and app shell ───────────────────────────────────────────────

#[test]
fn list_delete_flow_round_trips() {
    let mut app = open("/item-cardapio");
    app.apply(Action::FetchListSuccess(vec![suco()]));
    app.handle_event(key(KeyCode::Char('d')));
    assert_eq!(app.route(), &Route::Delete(ItemCardapioId::new("42")));

    app.apply(Action::FetchEntitySuccess(suco()));
    app.handle_event(key(KeyCode::Char('y')));
    app.apply(Action::DeleteRequest {
        id: ItemCardapioId::new("42"),
    });
    app.apply(Action::DeleteSuccess {
        id: ItemCardapioId::new("42"),
    });

    assert_eq!(app.route(), &Route::List);
    assert!(app.state().entities.is_empty());
    assert_eq!(app.dispatch().calls.last(), Some(&Call::GetEntities));
}

#[test]
fn q_quits_and_ctrl_c_quits() {
    let mut app = open("/item-cardapio/42");
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.running);
    assert_eq!(app.exit(), &Exit::Quit);

    let mut app = open("/item-cardapio");
    app.handle_event(TerminalEvent::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(!app.running);
}

#[test]
fn edit_route_cannot_start_the_app() {
    let route: Route = "/item-cardapio/42/edit".parse().expect("valid route");
    let err = App::new(route, Recorder::default()).expect_err("edit has no screen");
    assert!(matches!(err, TuiError::NoScreen { ref path } if path == "/item-cardapio/42/edit"));
}

#[test]
fn fixture_parent_is_menu_one() {
    assert_eq!(
        suco().cardapio.and_then(|c| c.id),
        Some(CardapioId::new("1"))
    );
}
