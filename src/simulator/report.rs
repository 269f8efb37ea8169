//! Simulation report and character sheet formatting.

use crate::character::equipment::EquipmentType;
use crate::character::player::Player;
use crate::character::stats::StatType;
use crate::lingo::numerals::{format_timespan, to_roman};
use serde::Serialize;
use std::time::Duration;

/// One level reached during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelMark {
    pub level: u32,
    pub tick: u64,
    pub virtual_ms: u64,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub player: String,
    pub final_level: u32,
    pub act: u32,
    pub ticks: u64,
    pub virtual_ms: u64,
    pub real_ms: u64,
    pub kills: u64,
    pub quests_completed: u64,
    pub acts_completed: u64,
    pub gold: u64,
    pub reached_target: bool,
    pub levels: Vec<LevelMark>,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("  {}\n\n", self.player));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Final level:      {}{}\n",
            self.final_level,
            if self.reached_target { "" } else { " (tick cap hit)" }
        ));
        report.push_str(&format!("  Act:              {}\n", self.act));
        report.push_str(&format!("  Kills:            {}\n", self.kills));
        report.push_str(&format!("  Quests completed: {}\n", self.quests_completed));
        report.push_str(&format!("  Acts completed:   {}\n", self.acts_completed));
        report.push_str(&format!("  Gold:             {}\n\n", self.gold));

        report.push_str("── TIME ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Ticks:            {}\n", self.ticks));
        report.push_str(&format!(
            "  Virtual time:     {}\n",
            format_timespan(Duration::from_millis(self.virtual_ms))
        ));
        report.push_str(&format!(
            "  Real time:        {:.3}s\n",
            self.real_ms as f64 / 1000.0
        ));

        if !self.levels.is_empty() {
            report.push_str("\n── LEVEL CURVE ──────────────────────────────────────────────────\n");
            for mark in &self.levels {
                report.push_str(&format!(
                    "  Level {:3}: {:>8} ({} ticks)\n",
                    mark.level,
                    format_timespan(Duration::from_millis(mark.virtual_ms)),
                    mark.tick
                ));
            }
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Multi-line character sheet printed at every level change.
pub fn character_sheet(player: &Player) -> String {
    let mut sheet = String::new();
    sheet.push_str(&format!("── {} ──\n", player.summary()));

    let stats: Vec<String> = StatType::all()
        .iter()
        .map(|&stat| format!("{} {}", stat.name(), player.stats.get(stat)))
        .collect();
    sheet.push_str(&format!("  Stats:     {}\n", stats.join(", ")));
    sheet.push_str(&format!("  Best stat: {}\n", player.best_stat()));

    let spell = player.spell_book.best();
    if !spell.is_empty() {
        sheet.push_str(&format!("  Best spell: {}\n", spell));
    }
    sheet.push_str(&format!(
        "  Spells:    {}\n",
        player
            .spell_book
            .spells()
            .iter()
            .map(|s| format!("{} {}", s.name, to_roman(s.level as i64)))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    for slot in EquipmentType::all() {
        if let Some(item) = player.equipment.get(slot) {
            sheet.push_str(&format!("  {:<11} {}\n", slot.name(), item));
        }
    }

    sheet.push_str(&format!(
        "  Gold:      {} ({} item kinds, load {}/{})\n",
        player.inventory.gold(),
        player.inventory.items().len(),
        player.inventory.encumbrance.position(),
        player.inventory.encumbrance.max()
    ));
    if let Some(quest) = player.quest_book.current_quest() {
        sheet.push_str(&format!("  Quest:     {}\n", quest));
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::creation::create_player;
    use crate::character::stats::Stats;

    fn sample_report() -> SimReport {
        SimReport {
            player: "Kraeck the Half Orc, level 3 Robot Monk, Act I".into(),
            final_level: 3,
            act: 1,
            ticks: 12_000,
            virtual_ms: 1_200_000,
            real_ms: 42,
            kills: 30,
            quests_completed: 1,
            acts_completed: 1,
            gold: 120,
            reached_target: true,
            levels: vec![LevelMark {
                level: 2,
                tick: 6000,
                virtual_ms: 600_000,
            }],
        }
    }

    #[test]
    fn test_text_report_mentions_key_numbers() {
        let text = sample_report().to_text();
        assert!(text.contains("Final level:      3"));
        assert!(text.contains("~20m"));
        assert!(text.contains("Level   2"));
    }

    #[test]
    fn test_json_report_has_fields() {
        let json = sample_report().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_level"], 3);
        assert_eq!(value["levels"][0]["tick"], 6000);
    }

    #[test]
    fn test_character_sheet_lists_starting_gear() {
        let player = create_player("Bob", "Half Orc", "Robot Monk", Stats::new());
        let sheet = character_sheet(&player);
        assert!(sheet.contains("Bob the Half Orc"));
        assert!(sheet.contains("Sharp Rock"));
        assert!(sheet.contains("-3 Burlap"));
    }
}
