use crate::constants::SHOW_ALL_CONFIRM;
use crate::state::{Command, SiteEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowAllLabel {
    #[default]
    Idle,
    Confirming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    ClearSelection,
    Select(usize),
    SetShowAllLabel(ShowAllLabel),
}

/// Selection state of the store cards next to the map.
#[derive(Debug, Clone, Default)]
pub struct StoreList {
    card_count: usize,
    selected: Option<usize>,
    label: ShowAllLabel,
    label_generation: u64,
}

impl StoreList {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            ..Self::default()
        }
    }

    pub fn attach_cards(&mut self, card_count: usize) {
        self.card_count = card_count;
        if self.selected.is_some_and(|i| i >= card_count) {
            self.selected = None;
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn label(&self) -> ShowAllLabel {
        self.label
    }

    /// Clears every card, then marks `index`. Also drops any pending
    /// confirmation so the show-all label reads idle again.
    pub fn select(&mut self, index: usize) -> Vec<Command> {
        if index >= self.card_count {
            return Vec::new();
        }
        self.selected = Some(index);
        self.label = ShowAllLabel::Idle;
        self.label_generation += 1;
        vec![
            Command::List(ListCommand::ClearSelection),
            Command::List(ListCommand::Select(index)),
            Command::List(ListCommand::SetShowAllLabel(ShowAllLabel::Idle)),
        ]
    }

    /// Clears the selection and shows the confirmation label. Re-triggering
    /// restarts the countdown: only the latest timer reverts the label.
    pub fn confirm_show_all(&mut self) -> Vec<Command> {
        self.selected = None;
        self.label = ShowAllLabel::Confirming;
        self.label_generation += 1;
        vec![
            Command::List(ListCommand::ClearSelection),
            Command::List(ListCommand::SetShowAllLabel(ShowAllLabel::Confirming)),
            Command::Schedule {
                after: SHOW_ALL_CONFIRM,
                event: SiteEvent::ShowAllLabelExpired(self.label_generation),
            },
        ]
    }

    pub fn label_expired(&mut self, generation: u64) -> Vec<Command> {
        if generation != self.label_generation || self.label == ShowAllLabel::Idle {
            return Vec::new();
        }
        self.label = ShowAllLabel::Idle;
        vec![Command::List(ListCommand::SetShowAllLabel(ShowAllLabel::Idle))]
    }
}
