use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender encoded by the parity of the identifier's 17th digit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Even sequence digits are female, odd are male
    pub fn from_sequence_digit(digit: u32) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Chinese display label as printed on the card
    pub fn as_zh(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

/// Demographic profile decoded from a single identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdProfile {
    /// Region display name, empty when the code is not in the table
    pub region: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}
