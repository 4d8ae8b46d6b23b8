//! Input line tokenizer.
//!
//! Lines are split on whitespace. There is no quoting or escaping: `"my dir"`
//! is two words, `"my` and `dir"`.

/// A command name with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a raw input line. Returns `None` for a blank line.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace().map(str::to_string);
    let name = words.next()?;

    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   \t "), None);
    }

    #[test]
    fn test_name_and_args() {
        let parsed = parse_input("mkdir a  b\tc").unwrap();
        assert_eq!(parsed.name, "mkdir");
        assert_eq!(parsed.args, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let parsed = parse_input("  pwd  ").unwrap();
        assert_eq!(parsed.name, "pwd");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_no_quote_handling() {
        let parsed = parse_input("mkdir \"my dir\"").unwrap();
        assert_eq!(parsed.args, vec!["\"my", "dir\""]);
    }
}
