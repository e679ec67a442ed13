use std::fmt;

/// Top-level menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Search,
    Exit,
}

impl MenuCommand {
    /// Parse a menu line. Returns None for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "s" | "search" => Some(MenuCommand::Search),
            "2" | "q" | "quit" | "exit" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

/// A valid answer at the result-selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Back,
    /// 1-based position in the displayed list
    Open(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber(String),
    OutOfRange { value: i64, max: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotANumber(_) => write!(f, "Please enter a valid number."),
            SelectionError::OutOfRange { max, .. } => {
                write!(f, "Invalid number. Enter a value between 1 and {}, or 0 to go back.", max)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl Selection {
    /// Parse a selection line against a list of `count` results
    pub fn parse(input: &str, count: usize) -> Result<Self, SelectionError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("back") || input.eq_ignore_ascii_case("b") {
            return Ok(Selection::Back);
        }

        let digits = input.strip_prefix('-').unwrap_or(input);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SelectionError::NotANumber(input.to_string()));
        }

        // Digits that overflow i64 are still a number, just far out of range
        let value: i64 = input.parse().unwrap_or(if input.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        });

        match usize::try_from(value) {
            Ok(0) => Ok(Selection::Back),
            Ok(n) if n <= count => Ok(Selection::Open(n)),
            _ => Err(SelectionError::OutOfRange { value, max: count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_command_aliases() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::Search));
        assert_eq!(MenuCommand::parse(" Search "), Some(MenuCommand::Search));
        assert_eq!(MenuCommand::parse("2"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("QUIT"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("3"), None);
        assert_eq!(MenuCommand::parse(""), None);
        assert_eq!(MenuCommand::parse("12"), None);
    }

    #[test]
    fn test_selection_back() {
        assert_eq!(Selection::parse("0", 5), Ok(Selection::Back));
        assert_eq!(Selection::parse("back", 5), Ok(Selection::Back));
        assert_eq!(Selection::parse("B", 5), Ok(Selection::Back));
    }

    #[test]
    fn test_selection_in_range() {
        assert_eq!(Selection::parse("1", 5), Ok(Selection::Open(1)));
        assert_eq!(Selection::parse(" 5 ", 5), Ok(Selection::Open(5)));
    }

    #[test]
    fn test_selection_out_of_range() {
        assert_eq!(
            Selection::parse("99", 5),
            Err(SelectionError::OutOfRange { value: 99, max: 5 })
        );
        assert_eq!(
            Selection::parse("-1", 5),
            Err(SelectionError::OutOfRange { value: -1, max: 5 })
        );
    }

    #[test]
    fn test_selection_huge_number_is_out_of_range() {
        assert_eq!(
            Selection::parse("99999999999999999999", 5),
            Err(SelectionError::OutOfRange {
                value: i64::MAX,
                max: 5
            })
        );
        assert_eq!(
            Selection::parse("-99999999999999999999", 5),
            Err(SelectionError::OutOfRange {
                value: i64::MIN,
                max: 5
            })
        );
    }

    #[test]
    fn test_selection_not_a_number() {
        assert!(matches!(
            Selection::parse("abc", 5),
            Err(SelectionError::NotANumber(_))
        ));
        assert!(matches!(
            Selection::parse("", 5),
            Err(SelectionError::NotANumber(_))
        ));
        assert!(matches!(
            Selection::parse("1.5", 5),
            Err(SelectionError::NotANumber(_))
        ));
        assert!(matches!(
            Selection::parse("-", 5),
            Err(SelectionError::NotANumber(_))
        ));
        assert!(matches!(
            Selection::parse("+3", 5),
            Err(SelectionError::NotANumber(_))
        ));
    }
}
