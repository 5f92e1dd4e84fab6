use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Meals
// ---------------------------------------------------------------------------

/// Stable identifier assigned to a meal when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(pub Uuid);

impl MealId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MealId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog entry.
///
/// Meals are never edited or deleted once created. Plans refer to them by
/// [`MealId`], so two meals sharing a name stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    /// Unsuitable for lunch; only ever drawn for dinner slots.
    pub dinner_only: bool,
}

impl Meal {
    /// Create a meal with a freshly generated id.
    pub fn new(name: impl Into<String>, dinner_only: bool) -> Self {
        Self {
            id: MealId::new(),
            name: name.into(),
            dinner_only,
        }
    }

    pub fn is_lunch_eligible(&self) -> bool {
        !self.dinner_only
    }
}

// ---------------------------------------------------------------------------
// Days and courses
// ---------------------------------------------------------------------------

/// One of the seven fixed weekday labels, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in plan order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The label used on disk and in output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = DayParseError;

    /// Accepts full names and three-letter abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                let label = day.label().to_ascii_lowercase();
                lower == label || lower == label[..3]
            })
            .ok_or_else(|| DayParseError(s.to_owned()))
    }
}

/// Error returned when parsing an invalid [`Day`] string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid day: {0:?} (expected Monday..Sunday or mon..sun)")]
pub struct DayParseError(pub String);

/// Which slot of a day a meal occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Lunch,
    Dinner,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// Lunch and dinner assignment for a single day. `None` is an empty slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub lunch: Option<MealId>,
    pub dinner: Option<MealId>,
}

impl DaySlot {
    pub fn get(&self, course: Course) -> Option<MealId> {
        match course {
            Course::Lunch => self.lunch,
            Course::Dinner => self.dinner,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lunch.is_none() && self.dinner.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.lunch.is_some() && self.dinner.is_some()
    }
}

/// A full week of [`DaySlot`]s. Every day is always present.
///
/// Serialized as an object keyed by day label in Monday..Sunday order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPlan {
    days: [DaySlot; 7],
}

impl WeekPlan {
    /// A plan with all fourteen slots empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, day: Day) -> &DaySlot {
        &self.days[day.index()]
    }

    pub fn slot_mut(&mut self, day: Day) -> &mut DaySlot {
        &mut self.days[day.index()]
    }

    /// Days paired with their slots, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &DaySlot)> {
        Day::ALL.into_iter().zip(self.days.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DaySlot::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.days.iter().all(DaySlot::is_full)
    }

    /// Lunch assignments, Monday first.
    pub fn lunches(&self) -> impl Iterator<Item = Option<MealId>> + '_ {
        self.days.iter().map(|slot| slot.lunch)
    }

    /// Dinner assignments, Monday first.
    pub fn dinners(&self) -> impl Iterator<Item = Option<MealId>> + '_ {
        self.days.iter().map(|slot| slot.dinner)
    }
}

impl Serialize for WeekPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Day::ALL.len()))?;
        for (day, slot) in self.iter() {
            map.serialize_entry(day.label(), slot)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeekPlan {
    /// Missing days load as empty slots; unknown labels are rejected.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: HashMap<String, DaySlot> = HashMap::deserialize(deserializer)?;
        let mut plan = WeekPlan::empty();
        for (label, slot) in raw {
            let day = Day::ALL
                .into_iter()
                .find(|d| d.label() == label)
                .ok_or_else(|| de::Error::custom(format!("unknown day label {label:?}")))?;
            *plan.slot_mut(day) = slot;
        }
        Ok(plan)
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Snapshot of a generated plan, stamped with the day it was generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub plan: WeekPlan,
}
