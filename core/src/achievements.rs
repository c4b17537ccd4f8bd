use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::ExerciseId;
use crate::recorder::CumulativeStats;

/// Navngitt milepæl; låses opp én gang når predikatet blir sant.
pub struct AchievementDefinition {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub predicate: fn(&CumulativeStats) -> bool,
}

impl fmt::Debug for AchievementDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AchievementDefinition").field("id", &self.id).finish()
    }
}

pub static ACHIEVEMENTS: &[AchievementDefinition] = &[
    AchievementDefinition {
        id: "first_rep",
        icon: "🎯",
        name: "First Rep",
        description: "Complete your first rep",
        predicate: |s| s.total_reps >= 1,
    },
    AchievementDefinition {
        id: "ten_reps",
        icon: "💪",
        name: "10 Rep Club",
        description: "Complete 10 reps",
        predicate: |s| s.total_reps >= 10,
    },
    AchievementDefinition {
        id: "century",
        icon: "💯",
        name: "Century",
        description: "Complete 100 total reps",
        predicate: |s| s.total_reps >= 100,
    },
    AchievementDefinition {
        id: "perfect_form",
        icon: "⭐",
        name: "Perfect Form",
        description: "Score 100% on a session",
        predicate: |s| s.best_frame_score >= 100,
    },
    AchievementDefinition {
        id: "streak3",
        icon: "🔥",
        name: "3-Day Warrior",
        description: "Work out 3 days in a row",
        predicate: |s| s.streak >= 3,
    },
    AchievementDefinition {
        id: "streak7",
        icon: "🏆",
        name: "7-Day Legend",
        description: "Work out 7 days in a row",
        predicate: |s| s.streak >= 7,
    },
    AchievementDefinition {
        id: "speed_demon",
        icon: "⚡",
        name: "Speed Demon",
        description: "Complete 10 reps in 30s",
        predicate: |s| s.fastest_set_secs.is_some_and(|t| t <= 30.0),
    },
    AchievementDefinition {
        id: "all7",
        icon: "🌟",
        name: "All-Rounder",
        description: "Try all 7 exercises",
        predicate: |s| s.exercises_tried.len() >= ExerciseId::ALL.len(),
    },
    AchievementDefinition {
        id: "ai_coach",
        icon: "🤖",
        name: "AI Student",
        description: "Use AI Coach 5 times",
        predicate: |s| s.coaching_uses >= 5,
    },
    AchievementDefinition {
        id: "week_warrior",
        icon: "📅",
        name: "Week Warrior",
        description: "Complete 10 sessions",
        predicate: |s| s.total_sessions >= 10,
    },
    AchievementDefinition {
        id: "recorded",
        icon: "🎬",
        name: "On Camera",
        description: "Record a session",
        predicate: |s| s.has_recorded,
    },
    AchievementDefinition {
        id: "shared",
        icon: "🔗",
        name: "Social Athlete",
        description: "Share a workout card",
        predicate: |s| s.has_shared,
    },
];

pub fn find(id: &str) -> Option<&'static AchievementDefinition> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Hvilke definisjoner som er nye (predikat sant, id ikke allerede låst opp).
/// Ren funksjon; endrer ingenting.
pub fn newly_unlocked(
    stats: &CumulativeStats,
    unlocked: &BTreeSet<String>,
) -> Vec<&'static AchievementDefinition> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !unlocked.contains(a.id) && (a.predicate)(stats))
        .collect()
}

/// Evaluerer og legger nye id-er inn i `unlocked`. Settet vokser bare.
/// Samme statistikk to ganger gir tom liste andre gang.
pub fn evaluate(
    stats: &CumulativeStats,
    unlocked: &mut BTreeSet<String>,
) -> Vec<&'static AchievementDefinition> {
    let fresh = newly_unlocked(stats, unlocked);
    for a in &fresh {
        unlocked.insert(a.id.to_string());
    }
    fresh
}
