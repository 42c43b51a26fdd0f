use std::{cell::RefCell, rc::Rc};

use kallari_router::prelude::*;
use pretty_assertions::assert_eq;

const HOME: &str = "inicio";
const KNOWN: [&str; 7] = [
    "inicio",
    "sobre-nosotros",
    "proyectos",
    "transparencia",
    "involucrate",
    "dona",
    "contactos",
];

fn state_at(fragment: &str) -> (Rc<MemoryHistory>, RouteState) {
    let history = Rc::new(MemoryHistory::with_initial_fragment(fragment));
    let state = RouteState::new(history.clone(), RouterConfig::new(HOME));
    (history, state)
}

#[test]
fn empty_fragment_resolves_home() {
    assert_eq!(state_at("").0.current_fragment(), "");
    assert_eq!(state_at("").1.current(), HOME);
    assert_eq!(state_at("#").1.current(), HOME);
}

#[test]
fn initial_fragment_is_read() {
    let (_, state) = state_at("#transparencia");
    assert_eq!(state.current(), "transparencia");
}

#[test]
fn unknown_fragment_is_kept_as_is() {
    let (_, state) = state_at("#blog");
    assert_eq!(state.current(), "blog");
}

#[test]
fn navigate_waits_for_the_notification() {
    let (history, state) = state_at("");

    state.navigate("proyectos");
    assert_eq!(history.current_fragment(), "proyectos");
    assert_eq!(state.current(), HOME);

    history.flush();
    assert_eq!(state.current(), "proyectos");
}

#[test]
fn navigate_round_trips_every_known_route() {
    let (history, state) = state_at("");

    for id in KNOWN.iter().rev() {
        state.navigate(*id);
        history.flush();
        assert_eq!(state.current(), *id);
    }
}

#[test]
fn navigate_does_not_validate() {
    let (history, state) = state_at("");
    state.navigate("no-existe");
    history.flush();
    assert_eq!(state.current(), "no-existe");
}

#[test]
fn external_changes_are_followed() {
    let (history, state) = state_at("inicio");

    // a clicked `href="#dona"` anchor writes the fragment without going through the router
    history.set_fragment("#dona");
    history.flush();
    assert_eq!(state.current(), "dona");

    history.set_fragment("");
    history.flush();
    assert_eq!(state.current(), HOME);
}

#[test]
fn back_and_forward_are_followed() {
    let (history, state) = state_at("inicio");
    state.navigate("proyectos");
    state.navigate("contactos");
    history.flush();
    assert_eq!(state.current(), "contactos");

    state.go_back();
    history.flush();
    assert_eq!(state.current(), "proyectos");

    state.go_back();
    history.flush();
    assert_eq!(state.current(), "inicio");

    state.go_forward();
    history.flush();
    assert_eq!(state.current(), "proyectos");
}

#[test]
fn on_update_sees_each_change_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let history = Rc::new(MemoryHistory::default());
    let state = RouteState::new(
        history.clone(),
        RouterConfig::new(HOME).on_update({
            let seen = seen.clone();
            move |route| seen.borrow_mut().push(route.to_string())
        }),
    );

    state.navigate("dona");
    state.navigate("dona");
    state.navigate("#dona");
    history.flush();

    // "dona" then "#dona" are two writes, but both resolve to the same route
    assert_eq!(*seen.borrow(), vec!["dona".to_string()]);
}

#[test]
fn immediate_delivery_updates_before_navigate_returns() {
    let history = Rc::new(MemoryHistory::default().with_delivery(Delivery::Immediate));
    let state = RouteState::new(history.clone(), RouterConfig::new(HOME));

    state.navigate("involucrate");
    assert_eq!(state.current(), "involucrate");
}

#[test]
fn dropping_the_state_unsubscribes() {
    let (history, state) = state_at("");
    assert_eq!(history.subscriber_count(), 1);

    drop(state);
    assert_eq!(history.subscriber_count(), 0);

    history.set_fragment("dona");
    assert_eq!(history.flush(), 1);
}

#[test]
fn two_states_share_one_history() {
    let history = Rc::new(MemoryHistory::default());
    let a = RouteState::new(history.clone(), RouterConfig::new(HOME));
    let b = RouteState::new(history.clone(), RouterConfig::new("otra"));

    assert_eq!(a.current(), HOME);
    assert_eq!(b.current(), "otra");

    a.navigate("dona");
    history.flush();
    assert_eq!(a.current(), "dona");
    assert_eq!(b.current(), "dona");
}

#[test]
fn dispatch_follows_the_route() {
    let registry = KNOWN
        .iter()
        .skip(1)
        .fold(ViewRegistry::builder(HOME, HOME), |builder, id| {
            builder.route(*id, *id)
        })
        .build();

    let (history, state) = state_at("");
    assert_eq!(*registry.dispatch(&state.current()), HOME);

    state.navigate("proyectos");
    history.flush();
    assert_eq!(*registry.dispatch(&state.current()), "proyectos");

    for unknown in ["", "blog", "Proyectos", "proyectos/", "#proyectos", "inicio "] {
        assert_eq!(registry.dispatch(&unknown.into()), registry.dispatch(&HOME.into()));
    }
}
