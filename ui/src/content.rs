//! Static site content, embedded at compile time and parsed once.
//!
//! The page never mutates content at runtime; everything here is a read-only
//! view into JSON shipped with the crate under `assets/content/`.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

const TIMELINE_JSON: &str = include_str!("../assets/content/timeline.json");
const PROJECTS_JSON: &str = include_str!("../assets/content/projects.json");
const SKILLS_JSON: &str = include_str!("../assets/content/skills.json");

/// One era on the experience timeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub description: String,
    pub role: String,
    pub period: String,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillItem {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Deserialize)]
struct TimelineFile {
    #[serde(rename = "timelineItems")]
    timeline_items: Vec<TimelineEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct SkillsFile {
    #[serde(rename = "skillGroups")]
    skill_groups: Vec<SkillGroup>,
}

static TIMELINE: Lazy<Vec<TimelineEntry>> = Lazy::new(|| {
    serde_json::from_str::<TimelineFile>(TIMELINE_JSON)
        .expect("embedded timeline content is valid JSON")
        .timeline_items
});

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    serde_json::from_str::<ProjectsFile>(PROJECTS_JSON)
        .expect("embedded projects content is valid JSON")
        .projects
});

static SKILLS: Lazy<Vec<SkillGroup>> = Lazy::new(|| {
    serde_json::from_str::<SkillsFile>(SKILLS_JSON)
        .expect("embedded skills content is valid JSON")
        .skill_groups
});

pub fn timeline_entries() -> &'static [TimelineEntry] {
    &TIMELINE
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skill_groups() -> &'static [SkillGroup] {
    &SKILLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_entries_are_present_and_ordered_by_year() {
        let entries = timeline_entries();
        assert!(entries.len() >= 3);
        for entry in entries {
            assert!(!entry.year.is_empty());
            assert!(!entry.title.is_empty());
            assert!(!entry.details.is_empty());
        }
    }

    #[test]
    fn every_project_carries_a_stack_and_highlights() {
        let projects = projects();
        assert!(!projects.is_empty());
        for project in projects {
            assert!(!project.technologies.is_empty());
            assert!(!project.highlights.is_empty());
        }
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = projects().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn skills_split_into_two_groups_around_the_center() {
        let groups = skill_groups();
        assert_eq!(groups.len(), 2);
        for group in groups {
            assert!(!group.skills.is_empty());
        }
    }
}
