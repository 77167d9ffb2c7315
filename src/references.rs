//! Static registry of literature references cited by rationale statements.
//!
//! Reasons carry reference IDs rather than inline citation text, so the
//! engine output stays presentation-agnostic; renderers resolve IDs here.

pub const GLIDE_DERIVATION: &str = "glide-derivation-2024";
pub const TRILUMINATE: &str = "triluminate-pivotal";
pub const TRISCEND_II: &str = "triscend-ii";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation {
    pub id: &'static str,
    pub text: &'static str,
}

pub const CITATIONS: &[Citation] = &[
    Citation {
        id: GLIDE_DERIVATION,
        text: "GLIDE score: a five-component anatomic score predicting acute \
               T-TEER success. JACC Cardiovascular Imaging, 2024.",
    },
    Citation {
        id: TRILUMINATE,
        text: "TRILUMINATE Pivotal: transcatheter edge-to-edge repair for severe \
               tricuspid regurgitation, with many patients reaching TR <= moderate \
               at 1 year.",
    },
    Citation {
        id: TRISCEND_II,
        text: "TRISCEND II: transcatheter tricuspid valve replacement (EVOQUE) with \
               sustained TR elimination but higher pacemaker and RV-failure risk \
               than repair.",
    },
];

pub fn lookup(id: &str) -> Option<&'static Citation> {
    CITATIONS.iter().find(|citation| citation.id == id)
}
