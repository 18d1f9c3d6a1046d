use std::num::ParseFloatError;

use thiserror::Error;

/// Errors that can occur when parsing a `views:clicks,...` group list.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no groups given")]
    Empty,

    #[error("group {index} (`{entry}`) is not of the form `views:clicks`")]
    Malformed { index: usize, entry: String },

    #[error("group {index} (`{entry}`) has an invalid count: {source}")]
    Number {
        index: usize,
        entry: String,
        source: ParseFloatError,
    },
}

/// Per-group trial and success counts, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Groups {
    pub trials: Vec<f64>,
    pub successes: Vec<f64>,
}

/// Parses comma-separated `views:clicks` pairs, such as `"1:0,10:2"`.
///
/// Whitespace around entries and counts is ignored.
/// Count validity (for example clicks exceeding views) is left to the model.
pub fn parse(input: &str) -> Result<Groups, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    input
        .split(',')
        .enumerate()
        .try_fold(Groups::default(), |mut groups, (index, entry)| {
            let entry = entry.trim();
            let Some((views, clicks)) = entry.split_once(':') else {
                return Err(ParseError::Malformed {
                    index,
                    entry: entry.to_owned(),
                });
            };

            let number = |text: &str| {
                text.trim().parse::<f64>().map_err(|source| ParseError::Number {
                    index,
                    entry: entry.to_owned(),
                    source,
                })
            };

            groups.trials.push(number(views)?);
            groups.successes.push(number(clicks)?);
            Ok(groups)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_groups() {
        let groups = parse("1:0,2:0,3:0,4:0,2:1,3:1,10:2").unwrap();

        assert_eq!(groups.trials, [1.0, 2.0, 3.0, 4.0, 2.0, 3.0, 10.0]);
        assert_eq!(groups.successes, [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn tolerates_whitespace_and_decimals() {
        let groups = parse(" 12.5 : 3 , 4:0 ").unwrap();

        assert_eq!(groups.trials, [12.5, 4.0]);
        assert_eq!(groups.successes, [3.0, 0.0]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            parse("1:0,5"),
            Err(ParseError::Malformed {
                index: 1,
                entry: "5".to_owned()
            })
        );
        assert!(matches!(
            parse("1:0,,2:1"),
            Err(ParseError::Malformed { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            parse("1:0,x:1"),
            Err(ParseError::Number { index: 1, .. })
        ));
        assert!(matches!(
            parse("3:1:2"),
            Err(ParseError::Number { index: 0, .. })
        ));
    }

    #[test]
    fn leaves_count_validation_to_the_model() {
        let groups = parse("1:5").unwrap();

        assert_eq!(groups.trials, [1.0]);
        assert_eq!(groups.successes, [5.0]);
    }
}
