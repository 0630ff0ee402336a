//! Catalog of analysis models selectable by the user.

use std::fmt;

/// Pricing tier of a catalog model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Free,
    Paid,
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

/// One selectable analysis model.
#[derive(Debug, Clone, Copy)]
pub struct Model {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: ModelTier,
    pub description: &'static str,
}

/// Model used when no selection has been stored.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// The selectable model catalog.
pub const AVAILABLE_MODELS: &[Model] = &[
    Model {
        id: "gemini-2.5-flash",
        name: "Gemini 2.5 Flash",
        tier: ModelTier::Free,
        description: "Latest ultra-fast model, best for speed",
    },
    Model {
        id: "gemini-2.5-pro",
        name: "Gemini 2.5 Pro",
        tier: ModelTier::Paid,
        description: "Advanced reasoning with enhanced quality",
    },
    Model {
        id: "gemini-2.0-flash",
        name: "Gemini 2.0 Flash",
        tier: ModelTier::Free,
        description: "Balanced performance and speed",
    },
    Model {
        id: "gemini-2.0-flash-lite",
        name: "Gemini 2.0 Flash Lite",
        tier: ModelTier::Free,
        description: "Lightweight version for simple tasks",
    },
    Model {
        id: "gemini-1.5-flash",
        name: "Gemini 1.5 Flash",
        tier: ModelTier::Free,
        description: "Fast and efficient for most tasks",
    },
    Model {
        id: "gemini-1.5-flash-8b",
        name: "Gemini 1.5 Flash 8B",
        tier: ModelTier::Free,
        description: "Compact model with lower latency",
    },
    Model {
        id: "gemini-1.5-pro",
        name: "Gemini 1.5 Pro",
        tier: ModelTier::Paid,
        description: "Advanced model with higher quality",
    },
    Model {
        id: "gemini-3-flash-preview",
        name: "Gemini 3 Flash Preview",
        tier: ModelTier::Free,
        description: "Preview of next generation",
    },
];

/// Look up a catalog model by ID.
pub fn find_model(id: &str) -> Option<&'static Model> {
    AVAILABLE_MODELS.iter().find(|m| m.id == id)
}
