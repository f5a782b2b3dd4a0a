//! Render catalog routes to markup without a browser

use crate::mocks::framework::ControlRegistry;
use crate::Route;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use std::cell::RefCell;
use std::rc::Rc;

fn router_root() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Render the catalog as if the browser had opened `path`
pub fn render_route(path: &str) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let mut dom = VirtualDom::new(router_root).with_root_context(history);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

type RegistrySlot = Rc<RefCell<Option<ControlRegistry>>>;

#[derive(Clone)]
struct Harness {
    build: fn(Option<String>) -> ControlRegistry,
    initial_state: Option<String>,
}

fn harness_root(harness: Harness) -> Element {
    let registry = (harness.build)(harness.initial_state);
    let slot = use_context::<RegistrySlot>();
    slot.borrow_mut().replace(registry);
    VNode::empty()
}

/// Mount a control registry so its signals can be driven from a test.
///
/// `build` runs inside a component; signal reads and writes on the returned
/// registry must go through `dom.in_runtime`.
pub fn mount_registry(
    build: fn(Option<String>) -> ControlRegistry,
    initial_state: Option<String>,
) -> (VirtualDom, ControlRegistry) {
    let slot = RegistrySlot::default();
    let mut dom = VirtualDom::new_with_props(
        harness_root,
        Harness {
            build,
            initial_state,
        },
    )
    .with_root_context(slot.clone());
    dom.rebuild_in_place();

    let registry = slot
        .borrow_mut()
        .take()
        .expect("harness root stores the registry on first render");
    (dom, registry)
}
