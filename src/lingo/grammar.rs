//! English helpers: plurals, articles, and severity adjectives.

/// Pluralizes a noun. Rules are checked in order; the first match wins.
pub fn plural(subject: &str) -> String {
    if let Some(stem) = subject.strip_suffix('y') {
        return format!("{}ies", stem);
    }
    if let Some(stem) = subject.strip_suffix("us") {
        return format!("{}i", stem);
    }
    if ["ch", "x", "s", "sh"].iter().any(|s| subject.ends_with(s)) {
        return format!("{}es", subject);
    }
    if let Some(stem) = subject.strip_suffix('f') {
        return format!("{}ves", stem);
    }
    if subject.ends_with("man") || subject.ends_with("Man") {
        let stem = &subject[..subject.len() - 2];
        return format!("{}en", stem);
    }
    format!("{}s", subject)
}

/// "a sword", "an apple", or "3 swords".
pub fn indefinite(subject: &str, qty: u64) -> String {
    if qty == 1 {
        let article = match subject.chars().next() {
            Some(c) if "AEIOU?aeiou".contains(c) => "an",
            _ => "a",
        };
        format!("{} {}", article, subject)
    } else {
        format!("{} {}", qty, plural(subject))
    }
}

/// "the sword" or "the swords".
pub fn definite(subject: &str, qty: u64) -> String {
    if qty > 1 {
        format!("the {}", plural(subject))
    } else {
        format!("the {}", subject)
    }
}

fn prefix(ladder: &[&str; 5], magnitude: i64, subject: &str, sep: &str) -> String {
    let index = magnitude.unsigned_abs().clamp(1, 5) as usize - 1;
    format!("{}{}{}", ladder[index], sep, subject)
}

/// Decorates an under-levelled monster; smaller deviations are worse off.
pub fn sick(magnitude: i64, subject: &str) -> String {
    prefix(
        &["dead", "comatose", "crippled", "sick", "undernourished"],
        6 - magnitude.abs(),
        subject,
        " ",
    )
}

pub fn young(magnitude: i64, subject: &str) -> String {
    prefix(
        &["foetal", "baby", "preadolescent", "teenage", "underage"],
        6 - magnitude.abs(),
        subject,
        " ",
    )
}

pub fn big(magnitude: i64, subject: &str) -> String {
    prefix(
        &["greater", "massive", "enormous", "giant", "titanic"],
        magnitude,
        subject,
        " ",
    )
}

/// Multi-word subjects get a separate word; single words get a compound.
pub fn special(magnitude: i64, subject: &str) -> String {
    if subject.contains(' ') {
        prefix(
            &["veteran", "cursed", "warrior", "undead", "demon"],
            magnitude,
            subject,
            " ",
        )
    } else {
        prefix(
            &["Battle-", "cursed ", "Were-", "undead ", "demon "],
            magnitude,
            subject,
            "",
        )
    }
}
