use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::ProjectModal;
use crate::content::{self, Project};

/// Below this container width the cards stack in one column and dragging is
/// disabled; repositioning is a pointer-and-desktop affordance.
const DRAG_MIN_CONTAINER_WIDTH: f64 = 640.0;

/// Movement below this distance still counts as a click on the card.
const DRAG_CLICK_THRESHOLD_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
struct DragState {
    id: u32,
    start_x: f64,
    start_y: f64,
    base_dx: f64,
    base_dy: f64,
    bounds: DragBounds,
    moved: bool,
}

/// Translate-offset window that keeps a card inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragBounds {
    min_dx: f64,
    max_dx: f64,
    min_dy: f64,
    max_dy: f64,
}

fn drag_bounds(origin: (f64, f64), card: (f64, f64), container: (f64, f64)) -> DragBounds {
    let min_dx = -origin.0;
    let min_dy = -origin.1;
    DragBounds {
        min_dx,
        max_dx: (container.0 - card.0 - origin.0).max(min_dx),
        min_dy,
        max_dy: (container.1 - card.1 - origin.1).max(min_dy),
    }
}

fn clamp_offset(dx: f64, dy: f64, bounds: DragBounds) -> (f64, f64) {
    (
        dx.clamp(bounds.min_dx, bounds.max_dx),
        dy.clamp(bounds.min_dy, bounds.max_dy),
    )
}

/// Project cards with desktop drag-reposition; clicking a card (without
/// dragging it) opens the detail modal.
#[component]
pub fn Projects() -> Element {
    let projects = content::projects();

    let mut selected = use_signal(|| None::<Project>);
    let mut offsets = use_signal(HashMap::<u32, (f64, f64)>::new);
    let mut drag = use_signal(|| None::<DragState>);
    let mut suppress_click = use_signal(|| false);
    let mut container_mount = use_signal(|| None::<Rc<MountedData>>);
    let mut card_mounts = use_signal(HashMap::<u32, Rc<MountedData>>::new);

    let begin_drag = move |id: u32, start_x: f64, start_y: f64| {
        spawn(async move {
            let Some(container) = container_mount.peek().clone() else {
                return;
            };
            let Some(card) = card_mounts.peek().get(&id).cloned() else {
                return;
            };
            let (Ok(container_rect), Ok(card_rect)) =
                (container.get_client_rect().await, card.get_client_rect().await)
            else {
                return;
            };
            if container_rect.size.width < DRAG_MIN_CONTAINER_WIDTH {
                return;
            }

            let (base_dx, base_dy) = offsets.peek().get(&id).copied().unwrap_or((0.0, 0.0));
            let origin = (
                card_rect.origin.x - container_rect.origin.x - base_dx,
                card_rect.origin.y - container_rect.origin.y - base_dy,
            );
            let bounds = drag_bounds(
                origin,
                (card_rect.size.width, card_rect.size.height),
                (container_rect.size.width, container_rect.size.height),
            );

            drag.set(Some(DragState {
                id,
                start_x,
                start_y,
                base_dx,
                base_dy,
                bounds,
                moved: false,
            }));
        });
    };

    let mut end_drag = move || {
        if let Some(state) = drag.peek().as_ref().copied() {
            if state.moved {
                suppress_click.set(true);
            }
        }
        if drag.peek().is_some() {
            drag.set(None);
        }
    };

    let dragging_id = drag().map(|state| state.id);

    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "projects__title", "Projects" }
            p { class: "projects__hint", "Click a card for the full story — or just rearrange the desk." }

            div {
                class: "projects__board",
                onmounted: move |evt| container_mount.set(Some(evt.data())),
                onmousemove: move |evt| {
                    let Some(mut state) = drag.peek().as_ref().copied() else {
                        return;
                    };
                    let point = evt.client_coordinates();
                    let travel_x = point.x - state.start_x;
                    let travel_y = point.y - state.start_y;
                    if travel_x.hypot(travel_y) > DRAG_CLICK_THRESHOLD_PX {
                        state.moved = true;
                    }
                    let (dx, dy) = clamp_offset(
                        state.base_dx + travel_x,
                        state.base_dy + travel_y,
                        state.bounds,
                    );
                    offsets.with_mut(|map| {
                        map.insert(state.id, (dx, dy));
                    });
                    drag.set(Some(state));
                },
                onmouseup: move |_| end_drag(),
                onmouseleave: move |_| end_drag(),

                for project in projects.iter() {
                    {render_card(
                        project,
                        offsets().get(&project.id).copied(),
                        dragging_id == Some(project.id),
                        card_mounts,
                        selected,
                        suppress_click,
                        begin_drag,
                    )}
                }
            }

            if let Some(project) = selected() {
                ProjectModal {
                    project,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    project: &Project,
    offset: Option<(f64, f64)>,
    dragging: bool,
    mut card_mounts: Signal<HashMap<u32, Rc<MountedData>>>,
    mut selected: Signal<Option<Project>>,
    mut suppress_click: Signal<bool>,
    mut begin_drag: impl FnMut(u32, f64, f64) + 'static,
) -> Element {
    let id = project.id;
    let card = project.clone();
    let style = offset
        .map(|(dx, dy)| format!("transform: translate({dx}px, {dy}px);"))
        .unwrap_or_default();
    let class = if dragging {
        "project-card project-card--dragging"
    } else {
        "project-card"
    };

    rsx! {
        article {
            key: "{id}",
            class: "{class}",
            style: "{style}",
            onmounted: move |evt| {
                card_mounts.with_mut(|map| {
                    map.insert(id, evt.data());
                });
            },
            onmousedown: move |evt| {
                let point = evt.client_coordinates();
                begin_drag(id, point.x, point.y);
            },
            onclick: move |_| {
                if suppress_click() {
                    suppress_click.set(false);
                    return;
                }
                selected.set(Some(card.clone()));
            },

            header { class: "project-card__header",
                h3 { class: "project-card__name", "{project.title}" }
                span { class: "project-card__company", "{project.company}" }
            }
            p { class: "project-card__description", "{project.description}" }
            ul { class: "project-card__stack",
                for tech in project.technologies.iter() {
                    li { class: "project-card__tech", "{tech}" }
                }
            }
            span { class: "project-card__period", "{project.period}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_confine_the_card_to_the_container() {
        // 300x200 card at (50, 40) inside an 800x600 board.
        let bounds = drag_bounds((50.0, 40.0), (300.0, 200.0), (800.0, 600.0));
        assert_eq!(bounds.min_dx, -50.0);
        assert_eq!(bounds.max_dx, 450.0);
        assert_eq!(bounds.min_dy, -40.0);
        assert_eq!(bounds.max_dy, 360.0);
    }

    #[test]
    fn offsets_clamp_at_the_edges() {
        let bounds = drag_bounds((50.0, 40.0), (300.0, 200.0), (800.0, 600.0));
        assert_eq!(clamp_offset(-500.0, 0.0, bounds), (-50.0, 0.0));
        assert_eq!(clamp_offset(9_000.0, 9_000.0, bounds), (450.0, 360.0));
        assert_eq!(clamp_offset(10.0, -10.0, bounds), (10.0, -10.0));
    }

    #[test]
    fn oversized_card_degenerates_to_its_origin_pin() {
        // Card wider than the container: the window collapses to min == max.
        let bounds = drag_bounds((0.0, 0.0), (900.0, 700.0), (800.0, 600.0));
        assert_eq!(clamp_offset(50.0, 50.0, bounds), (0.0, 0.0));
    }
}
