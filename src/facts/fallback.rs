use rand::Rng;

use crate::models::DayMonth;

/// Curated sentence for a handful of well-known dates
pub fn curated_fact(date: DayMonth) -> Option<&'static str> {
    let fact = match (date.day(), date.month()) {
        (25, 12) => {
            "December 25 is Christmas, celebrating the birth of Jesus Christ according to Christian tradition."
        }
        (1, 1) => "January 1 marks the start of the new year in the Gregorian calendar.",
        (7, 9) => "On September 7, 1822, Brazil declared its independence from Portugal.",
        (21, 4) => "On April 21, 1960, Brasília was inaugurated as the capital of Brazil.",
        (15, 11) => "On November 15, 1889, the Republic of Brazil was proclaimed.",
        (12, 10) => "October 12 is the day of Our Lady of Aparecida, patron saint of Brazil.",
        (2, 11) => "November 2 is All Souls' Day, a day to remember the departed.",
        (1, 4) => "April 1 is known as April Fools' Day in many countries.",
        (14, 2) => "February 14 is celebrated as Valentine's Day in many countries.",
        (31, 10) => "October 31 is celebrated as Halloween in English-speaking countries.",
        _ => return None,
    };
    Some(fact)
}

/// Offline fact for `date`: the curated sentence when there is one, otherwise one of
/// four generic templates picked at random
pub fn fallback_fact<R: Rng + ?Sized>(date: DayMonth, rng: &mut R) -> String {
    if let Some(fact) = curated_fact(date) {
        return fact.to_string();
    }

    let day = date.day();
    let month = date.month_name();
    match rng.random_range(0..4) {
        0 => format!("On {} {}, many historical events took place over the centuries.", month, day),
        1 => format!("Many important events marked {} {} in world history.", month, day),
        2 => format!("{} {} witnessed significant achievements and discoveries.", month, day),
        _ => format!("Several historical events changed the world on {} {}.", month, day),
    }
}
