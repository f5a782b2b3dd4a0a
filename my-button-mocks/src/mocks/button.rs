//! Button mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use super::url_state::StateBuilder;
use crate::catalog::{button_stories, Scenario, ScenarioPreview};
use crate::Route;
use dioxus::prelude::*;
use my_button::MyButton;
use tracing::info;

const DEFAULT_LABEL: &str = "with text";

/// URL state that opens the mock on `scenario`
pub fn scenario_state(scenario: &Scenario) -> Option<String> {
    let mut state = StateBuilder::new();
    state.set_bool("rounded", scenario.args.is_rounded(), false);
    state.set_string("label", scenario.args.content, DEFAULT_LABEL);
    state.build()
}

/// Button controls, with one preset per catalog scenario
fn button_controls() -> ControlRegistryBuilder {
    let presets = button_stories()
        .scenarios()
        .iter()
        .map(Preset::from_scenario)
        .collect();

    ControlRegistryBuilder::new()
        .bool_control("rounded", "Rounded", false)
        .doc("Adds the rounded style")
        .string_control("label", "Label", DEFAULT_LABEL)
        .doc("Slot content")
        .with_presets(presets)
}

#[component]
pub fn ButtonMock(initial_state: Option<String>) -> Element {
    let stories = button_stories();
    let registry = button_controls().build(initial_state);

    registry.use_url_sync(|state| Route::MockButton { state });

    let rounded = registry.get_bool("rounded");
    let label = registry.get_string("label");
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        MockPanel { title: "Button", registry,
            section { class: "mock-section",
                h3 { class: "mock-muted", "Interactive Demo" }
                div { class: "mock-row",
                    MyButton {
                        rounded,
                        onclick: move |_| {
                            clicks += 1;
                            info!("Button clicked {} time(s)", *clicks.peek());
                        },
                        "{label}"
                    }
                    span { class: "mock-muted", "Clicked {clicks} time(s)" }
                }
            }

            section { class: "mock-section",
                h3 { class: "mock-muted", "All Stories" }
                div { class: "mock-row",
                    for scenario in stories.scenarios().iter().copied() {
                        figure { class: "mock-figure",
                            ScenarioPreview { args: scenario.args }
                            figcaption { class: "mock-muted", "{scenario.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::ControlRegistry;
    use crate::mocks::url_state::parse_state;
    use crate::test_utils::{mount_registry, render_route};

    fn build_controls(initial_state: Option<String>) -> ControlRegistry {
        button_controls().build(initial_state)
    }

    fn button_path(state: Option<String>) -> String {
        match state {
            Some(state) => format!("/button?state={state}"),
            None => "/button".to_string(),
        }
    }

    #[test]
    fn test_scenario_state() {
        let stories = button_stories();

        // first story is the control defaults
        assert_eq!(scenario_state(&stories.scenarios()[0]), None);

        let emoji = scenario_state(stories.find("with emoji").unwrap()).unwrap();
        assert_eq!(
            parse_state(&emoji),
            vec![("label".to_string(), "😀 😎 👍 💯".to_string())]
        );

        let rounded = scenario_state(stories.find("with text").unwrap()).unwrap();
        assert_eq!(
            parse_state(&rounded),
            vec![
                ("label".to_string(), "rounded".to_string()),
                ("rounded".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_button_mock_opens_on_scenario() {
        for scenario in button_stories().scenarios() {
            let html = render_route(&button_path(scenario_state(scenario)));

            assert_eq!(html.matches("mock-chip active").count(), 1, "{html}");
            assert!(
                html.contains(&format!(r#"class="mock-chip active">{}</button>"#, scenario.name)),
                "{}: {html}",
                scenario.name
            );

            // interactive demo plus the rounded story in the "All Stories" row
            let expected_rounded = if scenario.args.is_rounded() { 2 } else { 1 };
            assert_eq!(
                html.matches(r#"class="my-button rounded""#).count(),
                expected_rounded,
                "{}: {html}",
                scenario.name
            );
            assert!(html.contains(scenario.args.content));
        }
    }

    #[test]
    fn test_apply_preset_builds_scenario_state() {
        // start away from every preset so each application changes something
        let (dom, registry) = mount_registry(
            build_controls,
            scenario_state(button_stories().find("with text").unwrap()),
        );

        for scenario in button_stories().scenarios() {
            let preset = Preset::from_scenario(scenario);
            let state = dom.in_runtime(|| {
                registry.apply_preset(&preset);
                registry.build_state()
            });
            assert_eq!(state, scenario_state(scenario), "{}", scenario.name);

            let active: Vec<_> = dom.in_runtime(|| {
                registry
                    .presets
                    .iter()
                    .filter(|p| p.matches(&registry))
                    .map(|p| p.name)
                    .collect()
            });
            assert_eq!(active, vec![scenario.name]);
        }
    }

    #[test]
    fn test_initial_state_restores_controls() {
        for scenario in button_stories().scenarios() {
            let state = scenario_state(scenario);
            let (dom, registry) = mount_registry(build_controls, state.clone());

            dom.in_runtime(|| {
                assert_eq!(registry.get_bool("rounded"), scenario.args.is_rounded());
                assert_eq!(registry.get_string("label"), scenario.args.content);
                assert_eq!(registry.build_state(), state);
            });
        }
    }

    #[test]
    fn test_set_controls_updates_state() {
        let (dom, registry) = mount_registry(build_controls, None);

        let state = dom.in_runtime(|| {
            registry.set_bool("rounded", true);
            registry.set_string("label", "rounded".to_string());
            registry.build_state()
        });
        assert_eq!(state, scenario_state(button_stories().find("with text").unwrap()));

        let state = dom.in_runtime(|| {
            registry.set_bool("rounded", false);
            registry.set_string("label", DEFAULT_LABEL.to_string());
            registry.build_state()
        });
        assert_eq!(state, None);
    }
}
