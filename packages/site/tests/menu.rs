#![allow(non_snake_case)]

use dioxus::prelude::*;
use kallari_site::{
    dropdown::{DropdownState, Menu},
    nav::MENUS,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn open_menu_lists_its_items_in_order() {
    fn App() -> Element {
        let projects = MENUS[1];
        rsx! {
            Menu { label: projects.label, items: projects.items, initial: DropdownState::Open }
        }
    }

    let html = render(App);
    let mut last = 0;
    for item in MENUS[1].items {
        let anchor = format!(r##"href="#{}""##, item.target);
        let at = html[last..]
            .find(item.title)
            .map(|at| at + last)
            .unwrap_or_else(|| panic!("{} missing or out of order in {html}", item.title));
        assert!(html[last..at].contains(&anchor), "{} is not an anchor to #{}", item.title, item.target);
        last = at;
    }
}

#[test]
fn opening_one_menu_leaves_the_others_closed() {
    fn App() -> Element {
        let projects = MENUS[1];
        let involve = MENUS[3];
        rsx! {
            Menu { label: projects.label, items: projects.items, initial: DropdownState::Open }
            Menu { label: involve.label, items: involve.items }
        }
    }

    let html = render(App);
    assert!(html.contains(MENUS[3].label), "{html}");
    for item in MENUS[3].items {
        assert!(!html.contains(item.title), "{} is visible", item.title);
    }
    assert!(html.contains(MENUS[1].items[0].title), "{html}");
}

#[test]
fn closed_menu_shows_only_its_label() {
    fn App() -> Element {
        let about = MENUS[0];
        rsx! {
            Menu { label: about.label, items: about.items }
        }
    }

    let html = render(App);
    assert!(html.contains(MENUS[0].label), "{html}");
    assert!(!html.contains("href"), "{html}");
}
