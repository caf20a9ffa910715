use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-a" | "--all" => flags.all = true,
            "--lower" => flags.lower = true,
            "--no-lower" => flags.no_lower = true,
            "--upper" => flags.upper = true,
            "--digits" => flags.digits = true,
            "--symbols" => flags.symbols = true,
            flag @ ("-l" | "--length") => {
                flags.length = Some(number_arg(args, &mut i, flag)?);
            }
            flag @ ("-n" | "--number") => {
                flags.number = Some(number_arg(args, &mut i, flag)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number_arg(args: &[String], i: &mut usize, flag: &str) -> Result<usize, ParseError> {
    *i += 1;
    let value = args
        .get(*i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterClass, ClassSet};

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args() {
        let flags = parse(&args(&[])).unwrap();
        assert_eq!(flags.length, None);
        assert_eq!(flags.classes(ClassSet::form_default()), ClassSet::form_default());
    }

    #[test]
    fn test_length_and_classes() {
        let flags = parse(&args(&["-l", "12", "--upper", "--digits", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(12));
        assert_eq!(flags.number, Some(3));

        let classes = flags.classes(ClassSet::form_default());
        assert!(classes.contains(CharacterClass::Lowercase));
        assert!(classes.contains(CharacterClass::Uppercase));
        assert!(classes.contains(CharacterClass::Digits));
        assert!(!classes.contains(CharacterClass::Symbols));
    }

    #[test]
    fn test_no_lower_wins() {
        let flags = parse(&args(&["--all", "--no-lower"])).unwrap();
        let classes = flags.classes(ClassSet::form_default());
        assert!(!classes.contains(CharacterClass::Lowercase));
        assert!(classes.contains(CharacterClass::Symbols));

        let flags = parse(&args(&["--no-lower"])).unwrap();
        assert!(flags.classes(ClassSet::form_default()).is_empty());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&args(&["-l", "abc"])).unwrap_err(),
            ParseError::InvalidNumber("abc".into())
        );
        assert_eq!(
            parse(&args(&["-l", "-5"])).unwrap_err(),
            ParseError::InvalidNumber("-5".into())
        );
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
        assert_eq!(
            parse(&args(&["--bogus"])).unwrap_err(),
            ParseError::UnknownArg("--bogus".into())
        );
    }
}
