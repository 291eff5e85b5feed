use serde::{Deserialize, Serialize};

use crate::constants::POINTS_PER_WIN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub points: u32,
    pub win_count: u32,
}

impl ScoreRecord {
    pub fn wins_label(&self) -> String {
        if self.win_count == 1 {
            "1 win".to_string()
        } else {
            format!("{} wins", self.win_count)
        }
    }
}

/// Session tally keyed by entrant name. Records are kept in order of first
/// win and are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    records: Vec<ScoreRecord>,
    points_per_win: u32,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::with_points(POINTS_PER_WIN)
    }
}

impl ScoreLedger {
    pub fn with_points(points_per_win: u32) -> Self {
        Self { records: Vec::new(), points_per_win }
    }

    pub fn record_win(&mut self, name: &str) -> &ScoreRecord {
        let position = match self.records.iter().position(|r| r.name == name) {
            Some(position) => position,
            None => {
                self.records.push(ScoreRecord { name: name.to_string(), points: 0, win_count: 0 });
                self.records.len() - 1
            }
        };

        let record = &mut self.records[position];
        record.points = record.points.saturating_add(self.points_per_win);
        record.win_count = record.win_count.saturating_add(1);
        log::info!("{} now has {} points over {}", record.name, record.points, record.wins_label());
        record
    }

    /// Records by descending points; equal points keep first-win order.
    pub fn all_records(&self) -> Vec<ScoreRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.points.cmp(&a.points));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_per_name() {
        let mut ledger = ScoreLedger::default();
        ledger.record_win("A");
        ledger.record_win("A");
        ledger.record_win("B");
        let updated = ledger.record_win("A").clone();
        assert_eq!(updated, ScoreRecord { name: "A".into(), points: 15, win_count: 3 });

        let records = ledger.all_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[1], ScoreRecord { name: "B".into(), points: 5, win_count: 1 });
    }

    #[test]
    fn test_ties_keep_first_win_order() {
        let mut ledger = ScoreLedger::default();
        for name in ["Zed", "Amy", "Bob"] {
            ledger.record_win(name);
        }
        ledger.record_win("Bob");
        let order: Vec<_> = ledger.all_records().into_iter().map(|r| r.name).collect();
        assert_eq!(order, vec!["Bob", "Zed", "Amy"]);
    }

    #[test]
    fn test_custom_increment() {
        let mut ledger = ScoreLedger::with_points(10);
        assert!(ledger.all_records().is_empty());
        assert_eq!(ledger.record_win("A").points, 10);
        assert_eq!(ledger.record_win("A").points, 20);
        assert_eq!(ledger.all_records().len(), 1);
    }

    #[test]
    fn test_wins_label() {
        let mut ledger = ScoreLedger::default();
        assert_eq!(ledger.record_win("A").wins_label(), "1 win");
        assert_eq!(ledger.record_win("A").wins_label(), "2 wins");
    }
}
