use crate::core::dice::Dice;

const ONSETS: &[&str] = &[
    "br", "cr", "dr", "fr", "gr", "j", "kr", "l", "m", "n", "pr", "", "", "", "r", "sh", "tr",
    "v", "wh", "x", "y", "z",
];
const NUCLEI: &[&str] = &[
    "a", "a", "e", "e", "i", "i", "o", "o", "u", "u", "ae", "ie", "oo", "ou",
];
const CODAS: &[&str] = &["b", "ck", "d", "g", "k", "m", "n", "p", "t", "v", "x", "z"];

/// Builds a pronounceable six-syllable-part name such as "Kraeckob".
pub fn generate_name(dice: &mut impl Dice) -> String {
    let parts = [ONSETS, NUCLEI, CODAS];
    let mut name = String::new();
    for i in 0..6 {
        name.push_str(*dice.pick(parts[i % 3]));
    }
    capitalize(&name)
}

/// Uppercases the first letter and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Confirmation prompt shown before a character is deleted.
pub fn terminate_message(player_name: &str, dice: &mut impl Dice) -> String {
    let adjective = dice.pick(&["faithful", "noble", "loyal", "brave"]);
    format!("Terminate {} {}?", adjective, player_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::{LcgDice, RngDice};

    #[test]
    fn test_generated_names_are_capitalized_words() {
        let mut dice = RngDice::seeded(11);
        for _ in 0..200 {
            let name = generate_name(&mut dice);
            assert!(!name.is_empty());
            assert!(name.chars().next().unwrap().is_uppercase());
            assert!(name.chars().skip(1).all(|c| c.is_lowercase()));
            assert!(name.len() <= 12);
        }
    }

    #[test]
    fn test_generate_name_deterministic_with_same_dice() {
        let a = generate_name(&mut LcgDice::new());
        let b = generate_name(&mut LcgDice::new());
        assert_eq!(a, b);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("kraeck"), "Kraeck");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_terminate_message() {
        let msg = terminate_message("Bob", &mut RngDice::seeded(2));
        assert!(msg.starts_with("Terminate "));
        assert!(msg.ends_with(" Bob?"));
    }
}
