//! Side effects produced by navigation, for the presentation layer to apply.

use crate::world::Region;

/// Notification styling, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
}

/// A toast shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Progression tracking record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
    pub value: u64,
    /// Unix timestamp (seconds)
    pub logged_at: i64,
}

impl AnalyticsEvent {
    pub fn new(category: &str, action: &str, label: &str, value: u64) -> Self {
        Self {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
            value,
            logged_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// A single event produced by a navigation call.
///
/// The game logic never talks to the UI, battle or analytics layers
/// directly; callers drain these and dispatch them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Notification(Notification),
    /// The battle layer should spawn a fresh wild encounter
    EncounterRequested { region: Region, route: u32 },
    /// Show the ship travel menu
    ShipModalOpened { region: Region },
    Analytics(AnalyticsEvent),
}

impl NavigationEvent {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            NavigationEvent::Notification(n) => Some(n),
            _ => None,
        }
    }
}

/// Why a destination was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("{route_name} does not exist in the {region} region.")]
    UnknownRoute { route_name: String, region: Region },

    #[error("You don't have access to that route yet.\n{}", .hints.join("\n"))]
    RouteLocked { hints: Vec<String> },

    #[error("{0} does not exist.")]
    UnknownTown(String),

    #[error("You don't have access to that location yet.\n{}", .hints.join("\n"))]
    TownLocked { hints: Vec<String> },

    #[error("You cannot access this dock yet")]
    NoHarborAccess,
}

impl AccessError {
    pub fn severity(&self) -> Severity {
        match self {
            AccessError::UnknownRoute { .. } | AccessError::UnknownTown(_) => Severity::Danger,
            AccessError::RouteLocked { .. }
            | AccessError::TownLocked { .. }
            | AccessError::NoHarborAccess => Severity::Warning,
        }
    }
}

impl From<AccessError> for NavigationEvent {
    fn from(err: AccessError) -> Self {
        NavigationEvent::Notification(Notification {
            message: err.to_string(),
            severity: err.severity(),
        })
    }
}
