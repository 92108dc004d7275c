//! Activity-driven mood selection.
//!
//! The engine never decides how the mascot feels — the host does, from
//! whatever signal it watches (typically: how many collaborators are
//! currently active in the room). This module holds that policy: more
//! active collaborators, more energetic mood. Contemplative is not
//! reachable from the signal; hosts set it explicitly while a
//! long-running job is in flight.

use serde::{Deserialize, Serialize};
use wisp_core::Mood;

/// A snapshot of observed room activity. How it is obtained (database,
/// HTTP, message bus) is the host's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomActivity {
    /// Collaborators seen recently enough to count as working.
    pub active_agents: usize,
    /// Collaborators present but quiet.
    pub idle_agents: usize,
    /// Seconds since anything at all happened, if known.
    pub seconds_since_last_event: Option<u64>,
}

impl RoomActivity {
    /// Total collaborators in the room.
    #[must_use]
    pub fn total(&self) -> usize {
        self.active_agents + self.idle_agents
    }
}

/// Thresholds for the activity → mood mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodPolicy {
    /// Active collaborators at or above this count read as a busy,
    /// happy room.
    #[serde(default = "default_upbeat_at")]
    pub upbeat_at: usize,
    /// An event gap longer than this (seconds) puts an empty room to
    /// sleep.
    #[serde(default = "default_quiet_after")]
    pub quiet_after_secs: u64,
}

fn default_upbeat_at() -> usize {
    3
}

fn default_quiet_after() -> u64 {
    1800 // 30 minutes, the classic "still around?" window
}

impl Default for MoodPolicy {
    fn default() -> Self {
        Self {
            upbeat_at: default_upbeat_at(),
            quiet_after_secs: default_quiet_after(),
        }
    }
}

/// Map observed activity to a mood.
#[must_use]
pub fn mood_for(activity: &RoomActivity, policy: &MoodPolicy) -> Mood {
    if activity.active_agents == 0 {
        if let Some(age) = activity.seconds_since_last_event {
            if age > policy.quiet_after_secs {
                return Mood::Dormant;
            }
        }
    }

    if activity.active_agents >= policy.upbeat_at {
        Mood::Upbeat
    } else if activity.active_agents > 0 {
        Mood::Neutral
    } else if activity.idle_agents > 0 {
        Mood::Subdued
    } else {
        Mood::Dormant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(active: usize, idle: usize) -> RoomActivity {
        RoomActivity {
            active_agents: active,
            idle_agents: idle,
            seconds_since_last_event: None,
        }
    }

    #[test]
    fn empty_room_sleeps() {
        assert_eq!(
            mood_for(&activity(0, 0), &MoodPolicy::default()),
            Mood::Dormant
        );
    }

    #[test]
    fn idle_only_room_is_subdued() {
        assert_eq!(
            mood_for(&activity(0, 2), &MoodPolicy::default()),
            Mood::Subdued
        );
    }

    #[test]
    fn some_activity_is_neutral() {
        assert_eq!(
            mood_for(&activity(1, 3), &MoodPolicy::default()),
            Mood::Neutral
        );
    }

    #[test]
    fn busy_room_is_upbeat() {
        assert_eq!(
            mood_for(&activity(3, 0), &MoodPolicy::default()),
            Mood::Upbeat
        );
    }

    #[test]
    fn long_silence_overrides_idlers() {
        let a = RoomActivity {
            active_agents: 0,
            idle_agents: 4,
            seconds_since_last_event: Some(7200),
        };
        assert_eq!(mood_for(&a, &MoodPolicy::default()), Mood::Dormant);
    }

    #[test]
    fn silence_does_not_override_active_work() {
        // A lone agent deep in a long task is still active.
        let a = RoomActivity {
            active_agents: 1,
            idle_agents: 0,
            seconds_since_last_event: Some(7200),
        };
        assert_eq!(mood_for(&a, &MoodPolicy::default()), Mood::Neutral);
    }
}
