use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    /// Slot order used when scanning a row: lunch before dinner.
    pub const ALL: [MealType; 2] = [MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }

    /// Column holding the weekday label for `day` (e.g. `Lunch Day 1`).
    pub fn day_column(&self, day: u8) -> String {
        format!("{} Day {}", self.as_str(), day)
    }

    /// Column holding the session date for `day` (e.g. `Lunch 1 Date`).
    pub fn date_column(&self, day: u8) -> String {
        format!("{} {} Date", self.as_str(), day)
    }

    /// Column holding the session time for `day` (e.g. `Lunch 1 Time`).
    pub fn time_column(&self, day: u8) -> String {
        format!("{} {} Time", self.as_str(), day)
    }
}
