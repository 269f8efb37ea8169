use crate::content::monsters::MonsterRef;
use crate::core::bar::Bar;
use crate::core::constants::{PROLOGUE_PLOT_MAX, QUEST_HISTORY_LIMIT};
use crate::core::signal::Signal;
use crate::lingo::numerals::act_name;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestBookEvent {
    StartAct { act: u32, name: String },
    StartQuest { caption: String },
}

/// Plot and quest tracking: the current act, recent quest captions, and the
/// monster the current quest is about, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestBook {
    act: u32,
    quests: VecDeque<String>,
    pub monster: Option<MonsterRef>,
    pub plot_bar: Bar,
    pub quest_bar: Bar,
    #[serde(skip)]
    pub change: Signal<QuestBookEvent>,
}

impl Default for QuestBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for QuestBook {
    fn eq(&self, other: &Self) -> bool {
        self.act == other.act
            && self.quests == other.quests
            && self.monster == other.monster
            && self.plot_bar == other.plot_bar
            && self.quest_bar == other.quest_bar
    }
}

impl QuestBook {
    pub fn new() -> Self {
        Self {
            act: 0,
            quests: VecDeque::new(),
            monster: None,
            plot_bar: Bar::new(PROLOGUE_PLOT_MAX),
            quest_bar: Bar::new(1.0),
            change: Signal::new(),
        }
    }

    pub fn act(&self) -> u32 {
        self.act
    }

    pub fn act_name(&self) -> String {
        act_name(self.act)
    }

    /// Moves to the next act and announces it.
    pub fn advance_act(&mut self) -> u32 {
        self.act += 1;
        let event = QuestBookEvent::StartAct {
            act: self.act,
            name: act_name(self.act),
        };
        self.change.emit(&event);
        self.act
    }

    pub fn quests(&self) -> impl Iterator<Item = &str> {
        self.quests.iter().map(String::as_str)
    }

    pub fn current_quest(&self) -> Option<&str> {
        self.quests.back().map(String::as_str)
    }

    /// Records a new quest caption, forgetting the oldest past the window.
    pub fn start_quest(&mut self, caption: String) {
        self.quests.push_back(caption.clone());
        while self.quests.len() > QUEST_HISTORY_LIMIT {
            self.quests.pop_front();
        }
        let event = QuestBookEvent::StartQuest { caption };
        self.change.emit(&event);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.change.set_muted(muted);
        self.plot_bar.change.set_muted(muted);
        self.quest_bar.change.set_muted(muted);
    }

    pub fn resync(&mut self) {
        let event = QuestBookEvent::StartAct {
            act: self.act,
            name: act_name(self.act),
        };
        self.change.emit(&event);
        if let Some(caption) = self.current_quest().map(str::to_string) {
            self.change.emit(&QuestBookEvent::StartQuest { caption });
        }
        self.plot_bar.resync();
        self.quest_bar.resync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_in_prologue() {
        let book = QuestBook::new();
        assert_eq!(book.act(), 0);
        assert_eq!(book.act_name(), "Prologue");
        assert_eq!(book.current_quest(), None);
        assert_eq!(book.plot_bar.max(), PROLOGUE_PLOT_MAX);
    }

    #[test]
    fn test_quest_history_is_capped() {
        let mut book = QuestBook::new();
        for i in 0..(QUEST_HISTORY_LIMIT + 5) {
            book.start_quest(format!("Quest {}", i));
        }
        assert_eq!(book.quests().count(), QUEST_HISTORY_LIMIT);
        assert_eq!(book.quests().next(), Some("Quest 5"));
        assert_eq!(
            book.current_quest().map(str::to_string),
            Some(format!("Quest {}", QUEST_HISTORY_LIMIT + 4))
        );
    }

    #[test]
    fn test_advance_act_emits() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut book = QuestBook::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        book.change.connect(move |e| s.borrow_mut().push(e.clone()));

        assert_eq!(book.advance_act(), 1);
        assert_eq!(
            *seen.borrow(),
            vec![QuestBookEvent::StartAct {
                act: 1,
                name: "Act I".into()
            }]
        );
    }
}
