//! Content that rotates once per day, keyed on the day of the year.

use crate::content::profile::Quote;
use crate::domain::output::Output;

pub fn pick(items: &[Quote], day_of_year: u32) -> Option<&Quote> {
    if items.is_empty() {
        return None;
    }
    items.get(day_of_year as usize % items.len())
}

pub fn quote_output(quote: Option<&Quote>) -> Output {
    let out = Output::new().title("Daily Inspiration");
    match quote {
        Some(q) => out
            .quote(&q.text, &q.source)
            .hint("A fresh quote every day to fuel your coding journey!"),
        None => out.text("No quotes configured."),
    }
}

pub fn verse_output(verse: Option<&Quote>) -> Output {
    let out = Output::new().title("Daily Bible Verse");
    match verse {
        Some(v) => out
            .quote(&v.text, &v.source)
            .hint("Daily encouragement for the journey ahead."),
        None => out.text("No verses configured."),
    }
}
