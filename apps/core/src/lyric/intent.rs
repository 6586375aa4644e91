//! Production intent: eight guidance sections, one per musical dimension.
//!
//! Sections only ever grow. Rules overwrite a headline or append directives;
//! nothing removes or reorders an entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// One guidance unit: a headline plus ordered "do" and "don't" directives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YIntentSection {
    pub headline: String,
    #[serde(rename = "do")]
    pub do_list: Vec<String>,
    #[serde(rename = "dont")]
    pub dont_list: Vec<String>,
}

impl YIntentSection {
    pub fn new(headline: &str, do_list: &[&str], dont_list: &[&str]) -> Self {
        Self {
            headline: headline.to_string(),
            do_list: do_list.iter().map(|s| s.to_string()).collect(),
            dont_list: dont_list.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// First "do" directive.
    ///
    /// Every baseline section seeds at least one entry and lists never shrink,
    /// so an empty list here is a broken ruleset rather than bad input.
    pub fn first_do(&self) -> &str {
        first_entry(&self.do_list)
    }

    /// First "don't" directive, see [`YIntentSection::first_do`]
    pub fn first_dont(&self) -> &str {
        first_entry(&self.dont_list)
    }
}

fn first_entry(list: &[String]) -> &str {
    debug_assert!(!list.is_empty(), "intent section lost its baseline entries");
    list.first().map(String::as_str).unwrap_or_default()
}

/// Musical dimension addressed by a [`YIntentSection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Harmony,
    Rhythm,
    Dynamics,
    Texture,
    Space,
    Arrangement,
    Register,
    Tension,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 8] = [
        Section::Harmony,
        Section::Rhythm,
        Section::Dynamics,
        Section::Texture,
        Section::Space,
        Section::Arrangement,
        Section::Register,
        Section::Tension,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Harmony => "harmony",
            Section::Rhythm => "rhythm",
            Section::Dynamics => "dynamics",
            Section::Texture => "texture",
            Section::Space => "space",
            Section::Arrangement => "arrangement",
            Section::Register => "register",
            Section::Tension => "tension",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full production intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YIntent {
    pub harmony: YIntentSection,
    pub rhythm: YIntentSection,
    pub dynamics: YIntentSection,
    pub texture: YIntentSection,
    pub space: YIntentSection,
    pub arrangement: YIntentSection,
    pub register: YIntentSection,
    pub tension: YIntentSection,
}

impl YIntent {
    pub fn section(&self, section: Section) -> &YIntentSection {
        match section {
            Section::Harmony => &self.harmony,
            Section::Rhythm => &self.rhythm,
            Section::Dynamics => &self.dynamics,
            Section::Texture => &self.texture,
            Section::Space => &self.space,
            Section::Arrangement => &self.arrangement,
            Section::Register => &self.register,
            Section::Tension => &self.tension,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut YIntentSection {
        match section {
            Section::Harmony => &mut self.harmony,
            Section::Rhythm => &mut self.rhythm,
            Section::Dynamics => &mut self.dynamics,
            Section::Texture => &mut self.texture,
            Section::Space => &mut self.space,
            Section::Arrangement => &mut self.arrangement,
            Section::Register => &mut self.register,
            Section::Tension => &mut self.tension,
        }
    }

    /// Iterate sections in display order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &YIntentSection)> {
        Section::ALL.into_iter().map(move |s| (s, self.section(s)))
    }
}

static BASE_INTENT: LazyLock<YIntent> = LazyLock::new(|| YIntent {
    harmony: YIntentSection::new(
        "Keep harmony supportive and centered",
        &["Use stable tonal centers", "Reserve shifts for impact"],
        &["Over-modulate", "Mask the vocal with dense chords"],
    ),
    rhythm: YIntentSection::new(
        "Let the lyric set the pulse",
        &["Anchor the groove", "Leave space for phrasing"],
        &["Crowd every bar", "Overcomplicate fills"],
    ),
    dynamics: YIntentSection::new(
        "Shape intensity in gradual arcs",
        &["Build in stages", "Use contrast between sections"],
        &["Flatten levels", "Jump to full intensity too early"],
    ),
    texture: YIntentSection::new(
        "Favor clarity over saturation",
        &["Blend supportive layers", "Use subtle color"],
        &["Overstack competing tones", "Use harsh top-end"],
    ),
    space: YIntentSection::new(
        "Keep a focused spatial field",
        &["Use controlled ambience", "Reserve width for hooks"],
        &["Wash every line", "Pan everything wide"],
    ),
    arrangement: YIntentSection::new(
        "Add elements with intention",
        &["Layer progressively", "Use dropouts for contrast"],
        &["Reveal everything at once", "Ignore transitions"],
    ),
    register: YIntentSection::new(
        "Place the vocal in a stable register",
        &["Hold the core register", "Lift selectively"],
        &["Shift register constantly", "Overlap conflicting ranges"],
    ),
    tension: YIntentSection::new(
        "Use tension to support the narrative",
        &["Delay release", "Create subtle push-pull"],
        &["Resolve too soon", "Overload with dramatic lifts"],
    ),
});

/// A fresh, owned copy of the baseline intent every interpretation starts from
pub fn baseline_intent() -> YIntent {
    BASE_INTENT.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_seeds_every_section() {
        let intent = baseline_intent();
        for (section, body) in intent.sections() {
            assert!(!body.headline.is_empty(), "{section} has no headline");
            assert_eq!(body.do_list.len(), 2, "{section} do list");
            assert_eq!(body.dont_list.len(), 2, "{section} dont list");
        }
    }

    #[test]
    fn test_baseline_copies_are_independent() {
        let mut first = baseline_intent();
        first.harmony.do_list.push("Extra".to_string());
        first.section_mut(Section::Tension).headline = "Changed".to_string();

        let second = baseline_intent();
        assert_eq!(second.harmony.do_list.len(), 2);
        assert_eq!(second.tension.headline, "Use tension to support the narrative");
    }

    #[test]
    fn test_first_entries() {
        let intent = baseline_intent();
        assert_eq!(intent.space.first_do(), "Use controlled ambience");
        assert_eq!(intent.space.first_dont(), "Wash every line");
    }

    #[test]
    fn test_section_serializes_do_and_dont() {
        let json = serde_json::to_value(&baseline_intent().rhythm).unwrap();
        assert_eq!(json["do"][0], "Anchor the groove");
        assert_eq!(json["dont"][1], "Overcomplicate fills");
    }
}
