//! The fixed rule catalog.
//!
//! Each rule is a plain record: a predicate over [`XSignals`], a priority, a
//! status tag, the section edits it makes and three justification strings.
//! Declaration order matters only to break priority ties in the trace.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::intent::{Section, YIntent};
use super::signals::{Level, Narrative, Pace, Register, Sentiment, Structure, XSignals};

/// Bumped whenever a rule, threshold or baseline entry changes
pub const RULESET_VERSION: &str = "0.1.0";

/// Qualitative effect a rule has on the intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Applied,
    Capped,
    Blocked,
}

impl RuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RuleStatus::Applied => "applied",
            RuleStatus::Capped => "capped",
            RuleStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Edit to one section: optional new headline, one "do" and one "don't" appended
#[derive(Debug, Clone, Copy)]
pub struct SectionEdit {
    pub section: Section,
    pub headline: Option<&'static str>,
    pub add_do: &'static str,
    pub add_dont: &'static str,
}

/// Declarative rule record
#[derive(Clone, Copy)]
pub struct RuleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// 1 (most foundational) to 5; orders the trace, never suppresses a rule
    pub priority: u8,
    pub status: RuleStatus,
    pub when: fn(&XSignals) -> bool,
    pub edits: &'static [SectionEdit],
    pub because: &'static str,
    pub prevents: &'static str,
    pub tradeoff: &'static str,
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl RuleDefinition {
    pub fn matches(&self, signals: &XSignals) -> bool {
        (self.when)(signals)
    }

    /// Apply this rule's edits, returning the updated intent
    pub fn apply(&self, mut intent: YIntent) -> YIntent {
        for edit in self.edits {
            let section = intent.section_mut(edit.section);
            if let Some(headline) = edit.headline {
                section.headline = headline.to_string();
            }
            section.do_list.push(edit.add_do.to_string());
            section.dont_list.push(edit.add_dont.to_string());
        }
        intent
    }
}

const fn edit(
    section: Section,
    headline: Option<&'static str>,
    add_do: &'static str,
    add_dont: &'static str,
) -> SectionEdit {
    SectionEdit {
        section,
        headline,
        add_do,
        add_dont,
    }
}

pub static RULES: &[RuleDefinition] = &[
    RuleDefinition {
        id: "density-cap",
        name: "Cap density to protect clarity",
        priority: 1,
        status: RuleStatus::Capped,
        when: |x| x.density == Level::High,
        edits: &[
            edit(
                Section::Harmony,
                Some("Keep harmony sparse and supportive"),
                "Limit chord changes per phrase",
                "Add busy inner movement",
            ),
            edit(
                Section::Arrangement,
                Some("Reduce layers to keep focus"),
                "Mute secondary motifs",
                "Stack dense counterlines",
            ),
        ],
        because: "High word density needs more space around the vocal.",
        prevents: "Overcrowding the mix with harmonic motion.",
        tradeoff: "Less harmonic drama in exchange for clarity.",
    },
    RuleDefinition {
        id: "repetition-hook",
        name: "Repetition strengthens hook focus",
        priority: 2,
        status: RuleStatus::Applied,
        when: |x| x.repetition == Level::High,
        edits: &[
            edit(
                Section::Rhythm,
                Some("Reinforce the hook with steady pulse"),
                "Keep chorus groove consistent",
                "Overcomplicate the hook rhythm",
            ),
            edit(
                Section::Arrangement,
                None,
                "Introduce a clear hook marker",
                "Bury the chorus theme",
            ),
        ],
        because: "High repetition suggests the hook needs an obvious anchor.",
        prevents: "Listeners missing the main refrain.",
        tradeoff: "Less rhythmic variation in exchange for memorability.",
    },
    RuleDefinition {
        id: "slow-pace",
        name: "Slow pace needs spacious groove",
        priority: 3,
        status: RuleStatus::Applied,
        when: |x| x.pace == Pace::Slow,
        edits: &[
            edit(
                Section::Rhythm,
                Some("Let slow phrasing breathe"),
                "Use longer rests",
                "Force busy percussion",
            ),
            edit(
                Section::Space,
                None,
                "Use controlled tails",
                "Clamp everything dry",
            ),
        ],
        because: "Slow pacing benefits from breathing room.",
        prevents: "Rushed delivery that conflicts with the lyric cadence.",
        tradeoff: "Sparser rhythmic motion in exchange for weight.",
    },
    RuleDefinition {
        id: "fast-pace",
        name: "Fast pace needs rhythmic discipline",
        priority: 2,
        status: RuleStatus::Applied,
        when: |x| x.pace == Pace::Fast,
        edits: &[
            edit(
                Section::Rhythm,
                Some("Keep fast phrasing locked"),
                "Use tight subdivisions",
                "Let tempo drift",
            ),
            edit(
                Section::Dynamics,
                None,
                "Control peak transients",
                "Over-compress the vocal",
            ),
        ],
        because: "Fast lines need precise rhythmic anchoring.",
        prevents: "Loss of intelligibility during rapid sections.",
        tradeoff: "Less dynamic swing in exchange for clarity.",
    },
    RuleDefinition {
        id: "high-volatility",
        name: "Volatility calls for restrained resolution",
        priority: 1,
        status: RuleStatus::Blocked,
        when: |x| x.volatility == Level::High,
        edits: &[
            edit(
                Section::Tension,
                Some("Keep tension unresolved longer"),
                "Use suspended tones",
                "Offer clean closure too early",
            ),
            edit(
                Section::Dynamics,
                None,
                "Resist full release",
                "Spike intensity abruptly",
            ),
        ],
        because: "High volatility indicates abrupt shifts that benefit from control.",
        prevents: "A tidy resolution that undercuts the lyric tension.",
        tradeoff: "Reduced closure in favor of lingering friction.",
    },
    RuleDefinition {
        id: "dark-sentiment",
        name: "Dark sentiment delays resolution",
        priority: 2,
        status: RuleStatus::Applied,
        when: |x| x.sentiment == Sentiment::Dark,
        edits: &[
            edit(
                Section::Harmony,
                Some("Lean into minor or ambiguous harmony"),
                "Use modal colors",
                "Use triumphant lifts",
            ),
            edit(
                Section::Tension,
                None,
                "Delay resolution",
                "Resolve to bright cadences",
            ),
        ],
        because: "Dark language suggests unresolved emotional weight.",
        prevents: "An overly bright arc that conflicts with the lyric.",
        tradeoff: "Less immediate uplift in exchange for authenticity.",
    },
    RuleDefinition {
        id: "bright-sentiment",
        name: "Bright sentiment supports lift",
        priority: 3,
        status: RuleStatus::Applied,
        when: |x| x.sentiment == Sentiment::Bright,
        edits: &[
            edit(
                Section::Dynamics,
                Some("Allow a gentle lift in energy"),
                "Open the chorus gradually",
                "Stay flat throughout",
            ),
            edit(
                Section::Space,
                None,
                "Let the hook breathe wider",
                "Collapse the stereo field",
            ),
        ],
        because: "Bright sentiment implies openness and lift.",
        prevents: "A closed-in mix that feels muted.",
        tradeoff: "More exposure in exchange for glow.",
    },
    RuleDefinition {
        id: "fragmented-narrative",
        name: "Fragmented narrative needs anchor",
        priority: 2,
        status: RuleStatus::Applied,
        when: |x| x.narrative == Narrative::Fragmented,
        edits: &[edit(
            Section::Arrangement,
            Some("Keep arrangement predictable"),
            "Repeat a motif",
            "Introduce constant new themes",
        )],
        because: "Fragmented storytelling benefits from a musical anchor.",
        prevents: "Listener disorientation across sections.",
        tradeoff: "Less narrative surprise in exchange for cohesion.",
    },
    RuleDefinition {
        id: "extended-structure",
        name: "Extended structure needs pacing",
        priority: 4,
        status: RuleStatus::Applied,
        when: |x| x.structure == Structure::Extended,
        edits: &[
            edit(
                Section::Arrangement,
                None,
                "Plan sectional escalation",
                "Peak too early",
            ),
            edit(
                Section::Dynamics,
                None,
                "Stage multiple lifts",
                "Use a single huge drop",
            ),
        ],
        because: "Longer structures require pacing across sections.",
        prevents: "Running out of energy before the end.",
        tradeoff: "More gradual growth in exchange for endurance.",
    },
    RuleDefinition {
        id: "high-register",
        name: "High register needs support",
        priority: 5,
        status: RuleStatus::Applied,
        when: |x| x.register == Register::High,
        edits: &[
            edit(
                Section::Register,
                Some("Support the higher register"),
                "Clear the midrange",
                "Compete in the same band",
            ),
            edit(
                Section::Texture,
                None,
                "Use softer textures",
                "Add harsh brightness",
            ),
        ],
        because: "High register vocals need room to shine.",
        prevents: "Harshness or masking in the upper band.",
        tradeoff: "Less aggressive texture in exchange for clarity.",
    },
];

/// Look up a rule by id
pub fn rule(id: &str) -> Option<&'static RuleDefinition> {
    RULES.iter().find(|r| r.id == id)
}
