use std::fmt;

/// One of the two answer columns of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Column {
    #[default]
    First,
    Second,
}

impl Column {
    pub const ALL: [Column; 2] = [Column::First, Column::Second];

    pub fn index(self) -> usize {
        match self {
            Column::First => 0,
            Column::Second => 1,
        }
    }

    /// Group name scoping option identities to this column.
    pub fn name(self) -> &'static str {
        match self {
            Column::First => "first",
            Column::Second => "second",
        }
    }

    pub fn other(self) -> Column {
        match self {
            Column::First => Column::Second,
            Column::Second => Column::First,
        }
    }
}

/// Identity of a rendered option: its column plus its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId {
    pub column: Column,
    pub value: i32,
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.column.name(), self.value)
    }
}

/// The respondent's selection for both quantities. `None` means not selected yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Answer {
    pub first: Option<i32>,
    pub second: Option<i32>,
}

impl Answer {
    pub fn new(first: Option<i32>, second: Option<i32>) -> Self {
        Self { first, second }
    }

    pub fn get(&self, column: Column) -> Option<i32> {
        match column {
            Column::First => self.first,
            Column::Second => self.second,
        }
    }

    /// Copy of this answer with only `column` replaced.
    pub fn with(self, column: Column, value: i32) -> Self {
        match column {
            Column::First => Self {
                first: Some(value),
                ..self
            },
            Column::Second => Self {
                second: Some(value),
                ..self
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_only_the_given_slot() {
        let answer = Answer::new(Some(1), Some(2));

        assert_eq!(answer.with(Column::First, 3), Answer::new(Some(3), Some(2)));
        assert_eq!(answer.with(Column::Second, 3), Answer::new(Some(1), Some(3)));
    }

    #[test]
    fn with_keeps_unset_slot_unset() {
        let answer = Answer::default().with(Column::Second, 7);

        assert_eq!(answer.first, None);
        assert_eq!(answer.get(Column::Second), Some(7));
        assert!(!answer.is_complete());
    }

    #[test]
    fn option_ids_are_scoped_by_column() {
        let first = OptionId { column: Column::First, value: 1 };
        let second = OptionId { column: Column::Second, value: 1 };

        assert_ne!(first, second);
        assert_eq!(first.to_string(), "first-1");
        assert_eq!(second.to_string(), "second-1");
    }
}
