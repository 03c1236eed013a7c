use std::collections::HashSet;

use serde_json::Value;

/// Content data lint.
/// The site content ships as embedded JSON under `ui/assets/content/`; a
/// malformed edit would only surface as a startup panic at *runtime*. This
/// test parses the raw files and checks the shape the components rely on,
/// so content edits fail fast in CI instead.
///
/// If you add a new content file:
/// 1. Drop it under `ui/assets/content/`
/// 2. Register it in `ui/src/content.rs`
/// 3. Extend this lint with its wrapper key and required fields.
const TIMELINE_JSON: &str = include_str!("../assets/content/timeline.json");
const PROJECTS_JSON: &str = include_str!("../assets/content/projects.json");
const SKILLS_JSON: &str = include_str!("../assets/content/skills.json");

#[test]
fn timeline_file_has_the_expected_shape() {
    let doc: Value = serde_json::from_str(TIMELINE_JSON).expect("timeline.json parses");
    let items = doc
        .get("timelineItems")
        .and_then(Value::as_array)
        .expect("timelineItems array");

    assert!(items.len() >= 3, "timeline needs at least a few eras");

    for (index, item) in items.iter().enumerate() {
        for field in ["year", "title", "description"] {
            let value = item.get(field).and_then(Value::as_str).unwrap_or_default();
            assert!(
                !value.trim().is_empty(),
                "timeline entry {index} has an empty `{field}`"
            );
        }
        let details = item
            .get("details")
            .and_then(Value::as_array)
            .expect("details array");
        assert!(
            !details.is_empty(),
            "timeline entry {index} has no detail lines"
        );
    }
}

#[test]
fn projects_file_has_unique_ids_and_sane_links() {
    let doc: Value = serde_json::from_str(PROJECTS_JSON).expect("projects.json parses");
    let projects = doc
        .get("projects")
        .and_then(Value::as_array)
        .expect("projects array");

    assert!(!projects.is_empty());

    let mut seen_ids = HashSet::new();
    for project in projects {
        let id = project.get("id").and_then(Value::as_u64).expect("numeric id");
        assert!(seen_ids.insert(id), "duplicate project id {id}");

        let links = project
            .get("links")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        for (label, url) in links {
            let url = url.as_str().unwrap_or_default();
            assert!(
                url.starts_with("https://")
                    || url.starts_with("http://")
                    || url.starts_with("mailto:"),
                "project {id} link `{label}` has unexpected scheme: {url}"
            );
        }
    }
}

#[test]
fn skills_file_splits_into_left_and_right_groups() {
    let doc: Value = serde_json::from_str(SKILLS_JSON).expect("skills.json parses");
    let groups = doc
        .get("skillGroups")
        .and_then(Value::as_array)
        .expect("skillGroups array");

    assert_eq!(
        groups.len(),
        2,
        "the constellation layout places one group on each side"
    );

    for group in groups {
        let skills = group
            .get("skills")
            .and_then(Value::as_array)
            .expect("skills array");
        assert!(!skills.is_empty());
        for skill in skills {
            let name = skill.get("name").and_then(Value::as_str).unwrap_or_default();
            assert!(!name.trim().is_empty(), "skill entries need names");
        }
    }
}
