// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Date, Time};

/// A calendar date combined with a wall-clock time.
///
/// The derived order compares the date first, then the time, so it is
/// chronological.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }
}

impl From<(Date, Time)> for DateTime {
    fn from((date, time): (Date, Time)) -> Self {
        Self { date, time }
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let dt = DateTime::new(Date::new(2021, 3, 9).unwrap(), Time::new(8, 30, 0, 0).unwrap());
        assert_eq!(dt.to_string(), "2021-03-09T08:30:00.000000");
    }
}
