//! Feature tour catalogue shown after the notification step.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Slides of the tour, in display order.
pub const FEATURE_TOUR: [FeatureHighlight; 4] = [
    FeatureHighlight {
        title: "THE MAP",
        description: "Identify where sexual violence occurs most frequently in public, \
                      and find out which streets you should avoid.",
    },
    FeatureHighlight {
        title: "THE REPORTING SYSTEM",
        description: "Victims and witnesses can report sexual violence by answering a few questions.",
    },
    FeatureHighlight {
        title: "THE SAFEBUDDY NEWS",
        description: "Keep up with international anniversaries and events.",
    },
    FeatureHighlight {
        title: "THE SOS BUTTON",
        description: "Shake your phone or press the button to raise an SOS immediately.",
    },
];
