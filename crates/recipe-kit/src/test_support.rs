//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::dto::CreateRecipeDto;

pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    pub(crate) const fn at(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    timestamp(2024, 1, 14, 10, 30, 0)
}

pub(crate) fn fixture_clock() -> FixtureClock {
    FixtureClock::at(fixture_timestamp())
}

pub(crate) fn pancakes_request() -> CreateRecipeDto {
    CreateRecipeDto {
        description: Some("Fluffy breakfast pancakes".to_owned()),
        prep_time: 10,
        cook_time: 15,
        servings: 4,
        tags: vec!["breakfast".to_owned(), "sweet".to_owned()],
        ..CreateRecipeDto::new(
            "Pancakes",
            vec!["Flour".to_owned(), "Milk".to_owned(), "Eggs".to_owned()],
            vec!["Whisk".to_owned(), "Fry".to_owned()],
        )
    }
}
