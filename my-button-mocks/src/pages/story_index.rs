//! Story index and mock page wrappers

use crate::catalog::{all_stories, ScenarioPreview, Stories};
use crate::mocks::{scenario_state, ButtonMock};
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn StoryIndex() -> Element {
    rsx! {
        div { class: "mock-page mock-index",
            h1 { "my-button stories" }

            for stories in all_stories() {
                StoryGroup { stories }
            }

            h2 { class: "mock-muted", "Playground" }
            LinkCard {
                to: Route::MockButton { state: None },
                title: "Button",
                description: "Rounded flag and label with live controls",
            }
        }
    }
}

/// Every scenario of one group, in registration order
#[component]
fn StoryGroup(stories: Stories) -> Element {
    rsx! {
        section { class: "mock-section",
            h2 { {stories.kind()} }
            div { class: "mock-grid",
                for scenario in stories.scenarios().iter().copied() {
                    div { class: "mock-card",
                        h3 { class: "mock-muted", "{scenario.name}" }
                        ScenarioPreview { args: scenario.args }
                        Link {
                            to: Route::MockButton {
                                state: scenario_state(&scenario),
                            },
                            class: "mock-link",
                            "Open in playground →"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Button page wrapper
// ============================================================================

#[component]
pub fn MockButton(state: Option<String>) -> Element {
    rsx! {
        ButtonMock { initial_state: state }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::button_stories;
    use crate::test_utils::render_route;

    #[test]
    fn test_story_index_lists_scenarios_in_order() {
        let html = render_route("/");

        let positions: Vec<usize> = button_stories()
            .scenarios()
            .iter()
            .map(|s| {
                html.find(&format!(">{}</h3>", s.name))
                    .unwrap_or_else(|| panic!("missing story '{}': {html}", s.name))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches(r#"class="my-button rounded""#).count(), 1);
        assert!(html.contains("😀 😎 👍 💯"));
    }

    #[test]
    fn test_story_index_links_into_playground() {
        let html = render_route("/");
        assert_eq!(html.matches("Open in playground").count(), 3);
        assert!(html.contains(r#"href="/button"#), "{html}");
    }
}
