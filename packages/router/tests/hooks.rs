#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use kallari_router::{
    components::HashLink,
    history::{use_history_provider, FragmentHistory, HistoryHandle, MemoryHistory},
    hooks::{use_hash_route, use_route_handle},
    RouterConfig,
};

#[component]
fn Harness(history: HistoryHandle) -> Element {
    use_history_provider(|| history.clone());

    rsx! {
        Page {}
    }
}

fn Page() -> Element {
    let route = use_hash_route(|| RouterConfig::new("inicio"));
    let current = route.current();

    rsx! {
        p { "route: {current}" }
        Child {}
    }
}

fn Child() -> Element {
    let route = use_route_handle();
    let current = route.current();

    rsx! {
        span { "child: {current}" }
        Frame {}
    }
}

/// Does not read the route itself, so it never re-renders on a route change.
fn Frame() -> Element {
    rsx! {
        div { Nested {} }
    }
}

fn Nested() -> Element {
    let current = use_route_handle().current();

    rsx! {
        em { "nested: {current}" }
    }
}

fn render(history: &Rc<MemoryHistory>) -> (VirtualDom, String) {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            history: history.clone().into(),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    (dom, html)
}

#[test]
fn renders_the_initial_route() {
    let history = Rc::new(MemoryHistory::with_initial_fragment("#transparencia"));
    let (_dom, html) = render(&history);

    assert!(html.contains("route: transparencia"), "{html}");
    assert!(html.contains("child: transparencia"), "{html}");
}

#[test]
fn empty_fragment_renders_home() {
    let history = Rc::new(MemoryHistory::default());
    let (_dom, html) = render(&history);

    assert!(html.contains("route: inicio"), "{html}");
}

#[test]
fn rerenders_after_a_fragment_change() {
    let history = Rc::new(MemoryHistory::default());
    let (mut dom, _) = render(&history);
    assert_eq!(history.subscriber_count(), 1);

    history.set_fragment("proyectos");
    history.flush();
    dom.process_events();
    _ = dom.render_immediate_to_vec();

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("route: proyectos"), "{html}");
    assert!(html.contains("child: proyectos"), "{html}");
    assert!(html.contains("nested: proyectos"), "{html}");
}

#[test]
fn every_reader_follows_back_and_forward() {
    let history = Rc::new(MemoryHistory::with_initial_fragment("dona"));
    let (mut dom, _) = render(&history);
    history.set_fragment("contactos");
    history.set_fragment("");

    let mut step = |expected: &str| {
        history.flush();
        dom.process_events();
        _ = dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        for reader in ["route", "child", "nested"] {
            assert!(html.contains(&format!("{reader}: {expected}")), "{html}");
        }
    };

    step("inicio");
    history.go_back();
    step("contactos");
    history.go_back();
    step("dona");
    history.go_forward();
    step("contactos");
}

#[test]
fn dropping_the_dom_unsubscribes() {
    let history = Rc::new(MemoryHistory::default());
    let (dom, _) = render(&history);
    assert_eq!(history.subscriber_count(), 1);

    drop(dom);
    assert_eq!(history.subscriber_count(), 0);
}

#[test]
fn hash_links_point_at_the_fragment() {
    fn Links() -> Element {
        rsx! {
            HashLink { to: "dona", "Dona" }
            HashLink { to: "", class: "muted", "Privacidad" }
        }
    }

    let mut dom = VirtualDom::new(Links);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(r##"href="#dona""##), "{html}");
    assert!(html.contains(r##"href="#""##), "{html}");
    assert!(html.contains(r#"class="muted""#), "{html}");
}
