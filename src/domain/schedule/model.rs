use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::day::DayOfWeek;
use super::shift::Shift;

type DayShifts = BTreeMap<DayOfWeek, Shift>;

/// Weekly schedule: personnel id → day → shift.
///
/// Sparse on both levels. A personnel entry whose last shift is removed disappears
/// from the map, and entries without shifts are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, DayShifts>", into = "BTreeMap<String, DayShifts>")]
pub struct ScheduleMap {
    entries: BTreeMap<String, DayShifts>,
}

/// What a grid cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState<'a> {
    Empty,
    Occupied(&'a Shift),
}

impl ScheduleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, personnel_id: &str, day: DayOfWeek) -> Option<&Shift> {
        self.entries.get(personnel_id).and_then(|days| days.get(&day))
    }

    pub fn cell_state(&self, personnel_id: &str, day: DayOfWeek) -> CellState<'_> {
        match self.get(personnel_id, day) {
            Some(shift) => CellState::Occupied(shift),
            None => CellState::Empty,
        }
    }

    /// Store `shift` in the cell, returning the shift it replaced.
    pub fn put(&mut self, personnel_id: &str, day: DayOfWeek, shift: Shift) -> Option<Shift> {
        self.entries.entry(personnel_id.to_string()).or_default().insert(day, shift)
    }

    /// Clear the cell, dropping the personnel entry once it has no shift left.
    pub fn remove(&mut self, personnel_id: &str, day: DayOfWeek) -> Option<Shift> {
        let days = self.entries.get_mut(personnel_id)?;
        let removed = days.remove(&day);
        if days.is_empty() {
            self.entries.remove(personnel_id);
        }
        removed
    }

    pub fn days_for(&self, personnel_id: &str) -> Option<&BTreeMap<DayOfWeek, Shift>> {
        self.entries.get(personnel_id)
    }

    pub fn contains_personnel(&self, personnel_id: &str) -> bool {
        self.entries.contains_key(personnel_id)
    }

    /// Number of personnel with at least one shift.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hours worked over the week; day-off cells count for nothing.
    pub fn weekly_hours(&self, personnel_id: &str) -> u32 {
        self.days_for(personnel_id)
            .map(|days| {
                days.values()
                    .filter_map(Shift::duration)
                    .map(|duration| u32::from(duration.hours))
                    .sum()
            })
            .unwrap_or(0)
    }
}

impl From<BTreeMap<String, DayShifts>> for ScheduleMap {
    fn from(mut entries: BTreeMap<String, DayShifts>) -> Self {
        entries.retain(|_, days| !days.is_empty());
        Self { entries }
    }
}

impl From<ScheduleMap> for BTreeMap<String, DayShifts> {
    fn from(map: ScheduleMap) -> Self {
        map.entries
    }
}
