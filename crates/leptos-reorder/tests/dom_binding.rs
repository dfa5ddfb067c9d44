#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use leptos_reorder::{DomReorder, ReorderConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{DragEvent, DragEventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn make_list(count: usize) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    for i in 0..count {
        let tile: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        tile.set_draggable(true);
        tile.set_text_content(Some(&format!("tile {}", i)));
        tile.style().set_property("height", "40px").unwrap();
        container.append_child(&tile).unwrap();
    }
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn tile(container: &HtmlElement, index: u32) -> HtmlElement {
    container.children().item(index).unwrap().unchecked_into()
}

fn fire(target: &HtmlElement, kind: &str) -> DragEvent {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = DragEvent::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

fn bind(container: &HtmlElement) -> (DomReorder<Vec<u32>>, Rc<RefCell<Vec<(usize, usize)>>>) {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = commits.clone();
    let reorder = DomReorder::initialize(
        container.clone(),
        vec![0, 1, 2, 3],
        ReorderConfig::default().with_transition_ms(0),
        move |from, to| sink.borrow_mut().push((from, to)),
    )
    .unwrap();
    (reorder, commits)
}

#[wasm_bindgen_test]
fn drag_down_commits_once() {
    let container = make_list(4);
    let (reorder, commits) = bind(&container);

    fire(&tile(&container, 0), "dragstart");
    assert!(reorder.is_dragging());
    assert!(tile(&container, 0).class_list().contains("dragging"));

    fire(&tile(&container, 2), "dragenter");
    assert_eq!(reorder.drop_target(), Some(2));
    assert!(tile(&container, 1).class_list().contains("shifted"));
    assert!(tile(&container, 2).class_list().contains("shifted"));

    fire(&tile(&container, 0), "dragend");
    assert!(!reorder.is_dragging());
    assert_eq!(*commits.borrow(), vec![(0, 2)]);
    for i in 0..4 {
        let el = tile(&container, i);
        assert!(!el.class_list().contains("shifted"));
        assert_eq!(el.style().get_property_value("transform").unwrap(), "");
    }

    reorder.clear_listeners();
}

#[wasm_bindgen_test]
fn disabled_drag_prevents_default() {
    let container = make_list(3);
    let (reorder, _) = bind(&container);

    reorder.toggle_drag(false);
    let event = fire(&tile(&container, 1), "dragstart");
    assert!(event.default_prevented());
    assert!(!reorder.is_dragging());

    reorder.clear_listeners();
}

#[wasm_bindgen_test]
fn container_dragover_allows_drop() {
    let container = make_list(2);
    let (reorder, _) = bind(&container);

    let event = fire(&container, "dragover");
    assert!(event.default_prevented());

    reorder.clear_listeners();
}

#[wasm_bindgen_test]
fn clear_listeners_is_idempotent() {
    let container = make_list(3);
    let (reorder, commits) = bind(&container);

    fire(&tile(&container, 0), "dragstart");
    reorder.clear_listeners();
    reorder.clear_listeners();

    assert!(!reorder.is_bound());
    assert!(!reorder.is_dragging());
    assert!(!tile(&container, 0).class_list().contains("dragging"));

    // Detached: further events are not ours
    fire(&tile(&container, 1), "dragstart");
    assert!(!reorder.is_dragging());
    assert!(commits.borrow().is_empty());
}
