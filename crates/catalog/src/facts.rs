use chrono::{Datelike, Local, NaiveDate};

/// Rotating "did you know" blurbs surfaced next to the recipe of the day.
pub const CULINARY_FACTS: &[&str] = &[
    "An avocado is a berry, not a vegetable.",
    "The first Margherita pizza was made in 1889 to honour the Queen of Italy.",
    "Honey never spoils thanks to its natural preservatives.",
    "Kopi luwak, the world's most expensive coffee, is made from beans digested by a civet.",
    "The Maya first consumed chocolate as a drink.",
    "Tomatoes were once thought poisonous in Europe and grown only as decoration.",
    "Saffron is the world's most expensive spice, pricier than gold by weight.",
];

pub fn fact_of_the_day() -> &'static str {
    fact_for_date(Local::now().date_naive())
}

/// Pure function of the date: `(day_of_year - 1) mod len`.
pub fn fact_for_date(date: NaiveDate) -> &'static str {
    let index = (date.ordinal() as usize - 1) % CULINARY_FACTS.len();
    CULINARY_FACTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_cycle_weekly() {
        let jan1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let jan8 = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();

        assert_eq!(fact_for_date(jan1), CULINARY_FACTS[0]);
        assert_eq!(fact_for_date(jan2), CULINARY_FACTS[1]);
        assert_eq!(fact_for_date(jan8), CULINARY_FACTS[0]);
    }
}
