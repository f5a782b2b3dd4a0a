//! Startup runs once per process, so this file holds a single test.

use dioxus::prelude::*;
use my_app::{components, shell, App, ComponentRegistry, Launcher, ShellConfig, ShellError};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct Mounted {
    anchor_id: String,
    tags: Vec<String>,
    html: String,
}

/// Renders the root to a string instead of a browser page
#[derive(Clone, Default)]
struct RecordingLauncher {
    mounts: Rc<RefCell<Vec<Mounted>>>,
}

impl Launcher for RecordingLauncher {
    fn launch(self, root: fn() -> Element, registry: ComponentRegistry, anchor_id: &str) {
        let tags = registry.tags().map(str::to_string).collect();
        let mut dom = VirtualDom::new(root).with_root_context(registry);
        dom.rebuild_in_place();
        self.mounts.borrow_mut().push(Mounted {
            anchor_id: anchor_id.to_string(),
            tags,
            html: dioxus_ssr::render(&dom),
        });
    }
}

#[test]
fn test_start_mounts_one_tree_once() {
    let launcher = RecordingLauncher::default();
    let config = ShellConfig::default().with_production_tip(true);

    shell::start(config.clone(), launcher.clone(), App, &components()).unwrap();

    assert_eq!(shell::config(), Some(&config));
    {
        let mounts = launcher.mounts.borrow();
        assert_eq!(mounts.len(), 1);
        let mounted = &mounts[0];
        assert_eq!(mounted.anchor_id, "app");
        assert_eq!(mounted.tags, vec!["my-button".to_string()]);
        assert_eq!(mounted.html.matches("<main").count(), 1);
        assert_eq!(mounted.html.matches("<button").count(), 1);
        assert!(mounted.html.contains("Hello from my-app"));
    }

    let again = shell::start(ShellConfig::default(), launcher.clone(), App, &components());
    assert_eq!(again, Err(ShellError::AlreadyConfigured));
    assert_eq!(launcher.mounts.borrow().len(), 1);
}
