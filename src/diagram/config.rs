use crate::program::render::Notation;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Fixed words the generator puts into symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramLabels {
    pub input: Cow<'static, str>,
    pub output: Cow<'static, str>,
    pub yes: Cow<'static, str>,
    pub no: Cow<'static, str>,
}

pub const ENGLISH_LABELS: DiagramLabels = DiagramLabels {
    input: Cow::Borrowed("Input"),
    output: Cow::Borrowed("Output"),
    yes: Cow::Borrowed("yes"),
    no: Cow::Borrowed("no"),
};

pub const GERMAN_LABELS: DiagramLabels = DiagramLabels {
    input: Cow::Borrowed("Eingabe"),
    output: Cow::Borrowed("Ausgabe"),
    yes: Cow::Borrowed("ja"),
    no: Cow::Borrowed("nein"),
};

impl Default for DiagramLabels {
    fn default() -> Self {
        ENGLISH_LABELS
    }
}

/// Settings for diagram generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub notation: Notation,
    pub labels: DiagramLabels,
}

impl DiagramConfig {
    /// LaTeX notation with German captions
    pub fn latex_german() -> Self {
        DiagramConfig {
            notation: Notation::Latex,
            labels: GERMAN_LABELS,
        }
    }
}
