use dioxus::prelude::*;

use crate::content::Project;
use crate::core::dom;

fn next_image(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

fn previous_image(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current == 0 {
        count - 1
    } else {
        current - 1
    }
}

/// Detail dialog for one project: image carousel, highlights, metrics, and
/// outbound links. Body scrolling is locked for the dialog's lifetime.
#[component]
pub fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    let mut image_index = use_signal(|| 0usize);
    let image_count = project.images.len();

    use_hook(|| dom::set_body_scroll_locked(true));
    use_drop(|| dom::set_body_scroll_locked(false));

    let current_image = project.images.get(image_index().min(image_count.saturating_sub(1)));

    rsx! {
        div {
            class: "project-modal",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{project.title}",
            onclick: move |_| on_close.call(()),

            div { class: "project-modal__dialog", onclick: move |evt| evt.stop_propagation(),
                button {
                    r#type: "button",
                    class: "project-modal__close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }

                header { class: "project-modal__header",
                    h3 { class: "project-modal__title", "{project.title}" }
                    p { class: "project-modal__meta",
                        "{project.company} · {project.role} · {project.period}"
                    }
                }

                if let Some(image) = current_image {
                    figure { class: "project-modal__carousel",
                        img {
                            class: "project-modal__image",
                            src: "{image.src}",
                            alt: "{image.alt}",
                        }
                        figcaption { class: "project-modal__caption", "{image.caption}" }

                        if image_count > 1 {
                            button {
                                r#type: "button",
                                class: "project-modal__nav project-modal__nav--prev",
                                aria_label: "Previous image",
                                onclick: move |_| {
                                    image_index.set(previous_image(image_index(), image_count));
                                },
                                "‹"
                            }
                            button {
                                r#type: "button",
                                class: "project-modal__nav project-modal__nav--next",
                                aria_label: "Next image",
                                onclick: move |_| {
                                    image_index.set(next_image(image_index(), image_count));
                                },
                                "›"
                            }
                            div { class: "project-modal__dots",
                                for dot in 0..image_count {
                                    button {
                                        key: "{dot}",
                                        r#type: "button",
                                        class: if dot == image_index() {
                                            "project-modal__dot project-modal__dot--active"
                                        } else {
                                            "project-modal__dot"
                                        },
                                        aria_label: format!("Go to image {}", dot + 1),
                                        onclick: move |_| image_index.set(dot),
                                    }
                                }
                            }
                        }
                    }
                }

                p { class: "project-modal__description", "{project.description}" }

                if !project.highlights.is_empty() {
                    ul { class: "project-modal__highlights",
                        for highlight in project.highlights.iter() {
                            li { "{highlight}" }
                        }
                    }
                }

                ul { class: "project-modal__stack",
                    for tech in project.technologies.iter() {
                        li { class: "project-modal__tech", "{tech}" }
                    }
                }

                if !project.metrics.is_empty() {
                    dl { class: "project-modal__metrics",
                        for (label, value) in project.metrics.iter() {
                            div { class: "project-modal__metric",
                                dt { {capitalize(label)} }
                                dd { "{value}" }
                            }
                        }
                    }
                }

                if !project.links.is_empty() {
                    div { class: "project-modal__links",
                        for (label, url) in project.links.clone().into_iter() {
                            button {
                                r#type: "button",
                                class: "project-modal__link",
                                onclick: move |_| dom::open_external(&url),
                                {capitalize(&label)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_in_both_directions() {
        assert_eq!(next_image(0, 3), 1);
        assert_eq!(next_image(2, 3), 0);
        assert_eq!(previous_image(0, 3), 2);
        assert_eq!(previous_image(2, 3), 1);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_image(0, 0), 0);
        assert_eq!(previous_image(0, 0), 0);
    }

    #[test]
    fn metric_labels_are_capitalized_for_display() {
        assert_eq!(capitalize("users"), "Users");
        assert_eq!(capitalize(""), "");
    }
}
