use serde::{Deserialize, Serialize};

pub const MOBILE_GROUP_COUNT: usize = 5;
pub const MOBILE_GROUP_LEN: usize = 2;
pub const CARD_GROUP_COUNT: usize = 4;
pub const CARD_GROUP_LEN: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputGroup {
    pub value: String,
    pub is_focused: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupRow {
    pub groups: Vec<InputGroup>,
    pub group_len: usize,
}

impl GroupRow {
    pub fn new(count: usize, group_len: usize) -> Self {
        Self {
            groups: vec![InputGroup::default(); count],
            group_len,
        }
    }

    pub fn mobile() -> Self {
        Self::new(MOBILE_GROUP_COUNT, MOBILE_GROUP_LEN)
    }

    pub fn card() -> Self {
        Self::new(CARD_GROUP_COUNT, CARD_GROUP_LEN)
    }

    pub fn edit(&mut self, index: usize, raw: &str) -> Option<usize> {
        let sanitized: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.group_len)
            .collect();
        self.groups[index].value = sanitized;

        let filled = self.groups[index].value.len() == self.group_len;
        if filled && index + 1 < self.groups.len() {
            self.set_focus(index + 1);
            Some(index + 1)
        } else {
            None
        }
    }

    pub fn set_focus(&mut self, index: usize) {
        for (i, group) in self.groups.iter_mut().enumerate() {
            group.is_focused = i == index;
        }
    }

    pub fn assembled(&self) -> String {
        self.groups.iter().map(|g| g.value.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.value.is_empty())
    }

    pub fn clear(&mut self) {
        for group in &mut self.groups {
            group.value.clear();
            group.is_focused = false;
        }
    }

    pub fn capacity(&self) -> usize {
        self.groups.len() * self.group_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_strips_non_digits_and_truncates() {
        let mut row = GroupRow::card();
        row.edit(0, "4a1b1c1d999");
        assert_eq!(row.groups[0].value, "4111");
    }

    #[test]
    fn full_group_advances_focus_to_next() {
        let mut row = GroupRow::mobile();
        let advanced = row.edit(0, "98");
        assert_eq!(advanced, Some(1));
        assert!(row.groups[1].is_focused);
        assert!(!row.groups[0].is_focused);
    }

    #[test]
    fn last_group_never_advances() {
        let mut row = GroupRow::card();
        assert_eq!(row.edit(3, "1111"), None);
    }

    #[test]
    fn shrinking_a_full_group_does_not_advance() {
        let mut row = GroupRow::card();
        row.edit(0, "4111");
        assert_eq!(row.edit(0, "411"), None);
    }

    #[test]
    fn focus_is_exclusive_within_row() {
        let mut row = GroupRow::card();
        row.set_focus(2);
        row.set_focus(0);
        let focused: Vec<usize> = row
            .groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_focused)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(focused, vec![0]);
    }

    #[test]
    fn assembled_concatenates_in_index_order() {
        let mut row = GroupRow::card();
        row.edit(0, "4111");
        row.edit(1, "2222");
        row.edit(2, "3333");
        row.edit(3, "4444");
        assert_eq!(row.assembled(), "4111222233334444");
        assert_eq!(row.assembled().len(), row.capacity());
    }
}
