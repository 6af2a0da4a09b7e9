// ABOUTME: Display formatting shared by the recipe views
// ABOUTME: Card and detail dates, greeting text, ingredient counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Recipe, User};
use chrono::{DateTime, Utc};

/// Shown when a recipe has neither `postedAt` nor `createdAt`
pub const UNKNOWN_DATE: &str = "Unknown date";

/// `Jan 5, 2025`
#[must_use]
pub fn short_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| UNKNOWN_DATE.to_owned(), |d| d.format("%b %-d, %Y").to_string())
}

/// `January 5, 2025`
#[must_use]
pub fn long_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| UNKNOWN_DATE.to_owned(), |d| d.format("%B %-d, %Y").to_string())
}

/// Card date of a recipe
#[must_use]
pub fn card_date(recipe: &Recipe) -> String {
    short_date(recipe.published_at())
}

/// `Welcome, <name>!`, or `None` before the user is known
#[must_use]
pub fn greeting(user: Option<&User>) -> Option<String> {
    user.map(|u| format!("Welcome, {}!", u.greeting_name()))
}

/// `3 ingredients`
#[must_use]
pub fn ingredient_count(recipe: &Recipe) -> String {
    format!("{} ingredients", recipe.ingredient_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dates_use_english_month_names() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).single();
        assert_eq!(short_date(date), "Jan 5, 2025");
        assert_eq!(long_date(date), "January 5, 2025");
        assert_eq!(short_date(None), UNKNOWN_DATE);
    }

    #[test]
    fn test_greeting_prefers_full_name() {
        let mut user = User {
            id: "u1".into(),
            full_name: Some("Ada Lovelace".into()),
            username: "ada".into(),
            email: "ada@example.com".into(),
        };
        assert_eq!(greeting(Some(&user)).as_deref(), Some("Welcome, Ada Lovelace!"));
        user.full_name = None;
        assert_eq!(greeting(Some(&user)).as_deref(), Some("Welcome, ada!"));
        assert_eq!(greeting(None), None);
    }
}
