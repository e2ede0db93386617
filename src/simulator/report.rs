//! Simulation report generation.

use super::runner::{EncounterStats, RunStats};
use crate::constants::RIVAL_FINAL_STAGE;
use serde::Serialize;
use std::collections::BTreeMap;

/// Averages for every encounter at one stage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StageSummary {
    pub stage: u32,
    pub encounters: u32,
    pub avg_party_size: f64,
    pub avg_bosses: f64,
    pub avg_tera: f64,
    pub avg_late_forms: f64,
    /// Share of encounters with at least one repeated species
    pub duplicate_rate: f64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub total_encounters: u32,
    pub corrupted_encounters: u32,
    pub stages: Vec<StageSummary>,
    /// Primary persona picks by name
    pub rival_counts: BTreeMap<String, u32>,
    pub music_counts: BTreeMap<String, u32>,
    /// First run (1-based) that ended with Nightmare mode unlocked
    pub nightmare_unlocked_at: Option<u32>,

    #[serde(skip)]
    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let encounters: Vec<&EncounterStats> = runs.iter().flat_map(|r| &r.encounters).collect();
        let total_encounters = encounters.len() as u32;
        let corrupted_encounters = encounters.iter().filter(|e| e.corrupted).count() as u32;

        let stages = (1..=RIVAL_FINAL_STAGE)
            .map(|stage| {
                let at_stage: Vec<_> = encounters.iter().filter(|e| e.stage == stage).collect();
                let n = at_stage.len().max(1) as f64;
                StageSummary {
                    stage,
                    encounters: at_stage.len() as u32,
                    avg_party_size: at_stage.iter().map(|e| e.party_size).sum::<usize>() as f64 / n,
                    avg_bosses: at_stage.iter().map(|e| e.boss_count).sum::<usize>() as f64 / n,
                    avg_tera: at_stage.iter().map(|e| e.tera_count).sum::<usize>() as f64 / n,
                    avg_late_forms: at_stage.iter().map(|e| e.late_forms).sum::<usize>() as f64 / n,
                    duplicate_rate: at_stage.iter().filter(|e| e.duplicate_species > 0).count()
                        as f64
                        / n,
                }
            })
            .collect();

        let mut rival_counts = BTreeMap::new();
        for run in &runs {
            *rival_counts
                .entry(run.primary.display_name().to_string())
                .or_insert(0) += 1;
        }

        let mut music_counts = BTreeMap::new();
        for encounter in &encounters {
            *music_counts.entry(encounter.bgm.clone()).or_insert(0) += 1;
        }

        let nightmare_unlocked_at = runs
            .iter()
            .position(|r| r.nightmare_unlocked)
            .map(|i| i as u32 + 1);

        Self {
            num_runs,
            total_encounters,
            corrupted_encounters,
            stages,
            rival_counts,
            music_counts,
            nightmare_unlocked_at,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 RIVAL ENCOUNTER REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, encounters: {} ({} corrupted)\n\n",
            self.num_runs, self.total_encounters, self.corrupted_encounters
        ));

        report.push_str("── STAGES ───────────────────────────────────────────────────────\n");
        report.push_str("  Stage   Count   Size   Bosses   Tera   Forms   Dupes\n");
        report.push_str("  ─────   ─────   ────   ──────   ────   ─────   ─────\n");
        for s in &self.stages {
            if s.encounters == 0 {
                continue;
            }
            report.push_str(&format!(
                "  {:5}   {:5}   {:4.1}   {:6.2}   {:4.2}   {:5.2}   {:4.1}%\n",
                s.stage,
                s.encounters,
                s.avg_party_size,
                s.avg_bosses,
                s.avg_tera,
                s.avg_late_forms,
                s.duplicate_rate * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── RIVALS ───────────────────────────────────────────────────────\n");
        let mut rivals: Vec<_> = self.rival_counts.iter().collect();
        rivals.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (name, count) in rivals {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:<12} {:>4} {:>5.1}% {}\n", name, count, pct, bar));
        }
        report.push('\n');

        report.push_str("── MUSIC ────────────────────────────────────────────────────────\n");
        for (bgm, count) in &self.music_counts {
            report.push_str(&format!("  {:<32} {:>6}\n", bgm, count));
        }
        report.push('\n');

        report.push_str("── ROSTER ───────────────────────────────────────────────────────\n");
        match self.nightmare_unlocked_at {
            Some(run) => report.push_str(&format!("  Nightmare mode unlocked after run {}\n", run)),
            None => report.push_str("  Nightmare mode not unlocked\n"),
        }
        if self.stages.iter().any(|s| s.duplicate_rate > 0.0) {
            report.push_str("  ⚠️  Some parties repeat species - middle pools too small?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Timestamped file name for a saved JSON report.
    pub fn json_filename() -> String {
        format!(
            "rival_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        )
    }
}
