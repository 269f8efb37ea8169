//! Narrative interludes played between acts.

use super::items::boring_item;
use super::monsters::{impressive_guy, named_monster};
use crate::core::dice::Dice;
use crate::core::task::Task;
use crate::lingo::numerals::act_name;

/// Builds the cutscene that closes `act`: a run of regular tasks followed
/// by the plot task that loads the next act.
pub fn interplot_cinematic(act: u32, player_level: u32, dice: &mut impl Dice) -> Vec<Task> {
    let mut tasks = Vec::new();
    match dice.below(3) {
        0 => {
            tasks.push(Task::regular(
                "Exhausted, you arrive at a friendly oasis in a hostile land",
                1,
            ));
            tasks.push(Task::regular("You greet old friends and meet new allies", 2));
            tasks.push(Task::regular(
                "You are privy to a council of powerful do-gooders",
                2,
            ));
            tasks.push(Task::regular("There is much to be done. You are chosen!", 1));
        }
        1 => {
            tasks.push(Task::regular(
                "Your quarry is in sight, but a mighty enemy bars your path!",
                1,
            ));
            let nemesis = named_monster(player_level as i64 + 3, dice);
            tasks.push(Task::regular(
                format!("A desperate struggle commences with {}", nemesis),
                4,
            ));
            let mut s = dice.below(3);
            let rounds = dice.below(act as u64 + 2);
            for _ in 0..rounds {
                s += 1 + dice.below(2);
                let line = match s % 3 {
                    0 => format!("Locked in grim combat with {}", nemesis),
                    1 => format!("{} seems to have the upper hand", nemesis),
                    _ => format!("You seem to gain the advantage over {}", nemesis),
                };
                tasks.push(Task::regular(line, 2));
            }
            tasks.push(Task::regular(
                format!(
                    "Victory! {} is slain! Exhausted, you lose conciousness",
                    nemesis
                ),
                3,
            ));
            tasks.push(Task::regular(
                "You awake in a friendly place, but the road awaits",
                2,
            ));
        }
        2 => {
            let nemesis = impressive_guy(dice);
            tasks.push(Task::regular(
                format!(
                    "Oh sweet relief! You've reached the kind protection of {}",
                    nemesis
                ),
                2,
            ));
            tasks.push(Task::regular(
                format!(
                    "There is rejoicing, and an unnerving encouter with {} in private",
                    nemesis
                ),
                3,
            ));
            tasks.push(Task::regular(
                format!("You forget your {} and go back to get it", boring_item(dice)),
                2,
            ));
            tasks.push(Task::regular(
                "What's this!? You overhear something shocking!",
                2,
            ));
            tasks.push(Task::regular(
                format!("Could {} be a dirty double-dealer?", nemesis),
                2,
            ));
            tasks.push(Task::regular(
                "Who can possibly be trusted with this news!? -- Oh yes, of course",
                3,
            ));
        }
        other => unreachable!("below(3) returned {}", other),
    }
    tasks.push(Task::plot(format!("Loading {}", act_name(act + 1)), 1));
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::RngDice;
    use crate::core::task::TaskKind;

    #[test]
    fn test_cinematic_ends_with_plot_task() {
        let mut dice = RngDice::seeded(42);
        for act in 0..30 {
            let tasks = interplot_cinematic(act, 10, &mut dice);
            let (last, rest) = tasks.split_last().unwrap();
            assert_eq!(last.kind, TaskKind::Plot);
            assert_eq!(last.description, format!("Loading {}", act_name(act + 1)));
            assert!(rest.len() >= 4);
            assert!(rest.iter().all(|t| t.kind == TaskKind::Regular));
        }
    }

    #[test]
    fn test_duel_length_bounded_by_act() {
        let mut dice = RngDice::seeded(3);
        for _ in 0..200 {
            let tasks = interplot_cinematic(2, 10, &mut dice);
            if tasks[0].description.starts_with("Your quarry") {
                // intro, struggle, up to act+1 exchanges, victory, awake, plot
                assert!(tasks.len() <= 2 + 3 + 3);
            }
        }
    }
}
