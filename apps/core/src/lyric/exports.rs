//! Export Composer: four fixed-template summaries of an interpretation.

use serde::{Deserialize, Serialize};

use super::rules_engine::EkkoResult;

/// Human-readable summaries handed to the user for copying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exports {
    pub intent_brief: String,
    pub descriptive_guidance: String,
    pub producer_notes: String,
    pub learning_summary: String,
}

impl Exports {
    /// Label and text pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Intent brief", self.intent_brief.as_str()),
            ("Descriptive guidance", self.descriptive_guidance.as_str()),
            ("Producer notes", self.producer_notes.as_str()),
            ("Learning summary", self.learning_summary.as_str()),
        ]
    }
}

pub fn build_exports(result: &EkkoResult) -> Exports {
    let x = &result.signals;
    let y = &result.intent;

    let intent_brief = format!(
        "Structure: {}, pace: {}, density: {}. Keep harmony {}. Focus on {}.",
        x.structure,
        x.pace,
        x.density,
        y.harmony.headline.to_lowercase(),
        y.arrangement.headline.to_lowercase(),
    );

    let descriptive_guidance = format!(
        "Dynamics: {}. Rhythm: {}. Texture stays {}.",
        y.dynamics.headline,
        y.rhythm.headline,
        y.texture.headline.to_lowercase(),
    );

    let producer_notes = format!(
        "Do: {}; {}; {}. Avoid: {}; {}.",
        y.harmony.first_do(),
        y.rhythm.first_do(),
        y.dynamics.first_do(),
        y.harmony.first_dont(),
        y.space.first_dont(),
    );

    let learning_summary = format!(
        "Ekko flagged {} sentiment with {} volatility. Rules fired: {}. Primary focus: {}.",
        x.sentiment,
        x.volatility,
        result.rules.len(),
        y.tension.headline.to_lowercase(),
    );

    Exports {
        intent_brief,
        descriptive_guidance,
        producer_notes,
        learning_summary,
    }
}
