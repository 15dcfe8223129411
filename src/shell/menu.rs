//! Main menu options

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewSummary,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// All options in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::ViewSummary,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Number the user types to pick this option
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::ViewSummary => 2,
            MenuChoice::Edit => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Exit => 5,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Expense",
            MenuChoice::ViewSummary => "View Summary",
            MenuChoice::Edit => "Edit Expense",
            MenuChoice::Delete => "Delete Expense",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.number().to_string() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::ViewSummary));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("01".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuChoice::Delete.to_string(), "4. Delete Expense");
    }
}
