use dioxus::prelude::*;

use crate::content::{self, SkillGroup};

/// Skill constellation: two groups of badges flanking a center monogram.
#[component]
pub fn Skills() -> Element {
    let groups = content::skill_groups();

    rsx! {
        section { id: "skills", class: "skills",
            h2 { class: "skills__title", "Skills" }
            div { class: "skills__constellation",
                if let Some(group) = groups.first() {
                    {render_group(group, "skills__group skills__group--left")}
                }

                div { class: "skills__center",
                    span { class: "skills__center-badge", "AL" }
                }

                if let Some(group) = groups.get(1) {
                    {render_group(group, "skills__group skills__group--right")}
                }
            }
        }
    }
}

fn render_group(group: &SkillGroup, class: &'static str) -> Element {
    rsx! {
        div { class,
            h3 { class: "skills__group-title", "{group.title}" }
            ul { class: "skills__list",
                for skill in group.skills.iter() {
                    li { key: "{skill.name}", class: "skills__skill",
                        span { class: "skills__skill-badge",
                            if let Some(icon) = skill.icon.as_ref() {
                                span { class: "skills__skill-icon", aria_hidden: "true", "{icon}" }
                            }
                            "{skill.name}"
                        }
                    }
                }
            }
        }
    }
}
