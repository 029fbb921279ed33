//!
//! Header wrapping.
//!

///
/// What happens to words that do not fit into two lines.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WrapOverflow {
    /// The second line takes all remaining words and may grow past the width.
    #[default]
    Extend,
    /// Words that would need a third line are dropped.
    Truncate,
}

///
/// Wraps `text` into at most two lines of `width` characters, breaking only at spaces.
///
/// A word joins the current line while `line + word + 1` fits into `width`. A word that
/// does not fit even into an empty line occupies a line of its own. Text without spaces
/// is returned unchanged.
///
pub fn wrap_lines(text: &str, width: usize, overflow: WrapOverflow) -> Vec<String> {
    if !text.contains(' ') {
        return vec![text.to_owned()];
    }

    let mut lines: Vec<String> = Vec::with_capacity(2);
    let mut current = String::new();
    for word in text.split(' ').filter(|word| !word.is_empty()) {
        let fits = current.chars().count() + word.chars().count() < width;
        if fits || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if lines.len() == 1 {
            match overflow {
                WrapOverflow::Truncate => break,
                WrapOverflow::Extend => {
                    current.push(' ');
                    current.push_str(word);
                    continue;
                }
            }
        }
        lines.push(std::mem::replace(&mut current, word.to_owned()));
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

///
/// Wraps `text` and joins the lines with line breaks.
///
pub fn wrap(text: &str, width: usize, overflow: WrapOverflow) -> String {
    wrap_lines(text, width, overflow).join("\n")
}

impl std::str::FromStr for WrapOverflow {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "extend" => Ok(Self::Extend),
            "truncate" => Ok(Self::Truncate),
            string => anyhow::bail!(
                "Unknown wrap overflow policy `{string}`. Supported policies: {}",
                [Self::Extend, Self::Truncate]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for WrapOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extend => write!(f, "extend"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::wrap;
    use super::wrap_lines;
    use super::WrapOverflow;

    const HEADERS: [&str; 6] = [
        "Average Time",
        "Time 12",
        "Number of stations in the network",
        "A rather long header that certainly needs more than two lines to fit",
        "x y",
        "Uncertainty of the measured mean execution time",
    ];

    #[test]
    fn short_header_is_unchanged() {
        assert_eq!(wrap("Average Time", 30, WrapOverflow::Extend), "Average Time");
    }

    #[test]
    fn single_word_is_unchanged() {
        let word = "Supercalifragilisticexpialidocious";
        assert_eq!(wrap(word, 10, WrapOverflow::Truncate), word);
    }

    #[test]
    fn two_lines() {
        assert_eq!(
            wrap_lines("Average Time", 8, WrapOverflow::Truncate),
            vec!["Average", "Time"]
        );
        assert_eq!(
            wrap("Number of stations in the network", 20, WrapOverflow::Extend),
            "Number of stations\nin the network"
        );
    }

    #[test]
    fn separator_counts_on_an_empty_line() {
        // 5 + 0 + 1 > 5, yet the word still gets a line of its own.
        assert_eq!(
            wrap_lines("abcde fg", 5, WrapOverflow::Truncate),
            vec!["abcde", "fg"]
        );
    }

    #[test]
    fn overflow_policies() {
        let text = "one two three four five";

        assert_eq!(
            wrap_lines(text, 8, WrapOverflow::Truncate),
            vec!["one two", "three"]
        );
        assert_eq!(
            wrap_lines(text, 8, WrapOverflow::Extend),
            vec!["one two", "three four five"]
        );
    }

    #[test]
    fn never_more_than_two_lines() {
        for header in HEADERS {
            for width in 1..40 {
                for overflow in [WrapOverflow::Extend, WrapOverflow::Truncate] {
                    assert!(wrap_lines(header, width, overflow).len() <= 2);
                }
            }
        }
    }

    #[test]
    fn truncated_lines_fit_the_width() {
        for header in HEADERS {
            for width in 1..40 {
                for line in wrap_lines(header, width, WrapOverflow::Truncate) {
                    assert!(line.len() <= width || !line.contains(' '), "{line:?} / {width}");
                }
            }
        }
    }

    #[test]
    fn extended_lines_rejoin_to_the_header() {
        for header in HEADERS {
            for width in 1..40 {
                assert_eq!(wrap_lines(header, width, WrapOverflow::Extend).join(" "), header);
            }
        }
    }

    #[test]
    fn policies_agree_when_two_lines_suffice() {
        for header in HEADERS {
            for width in 1..40 {
                let extended = wrap_lines(header, width, WrapOverflow::Extend);
                let truncated = wrap_lines(header, width, WrapOverflow::Truncate);
                if truncated.join(" ") == header {
                    assert_eq!(extended, truncated);
                }
            }
        }
    }

    #[test]
    fn overflow_policy_parsing() {
        assert_eq!("truncate".parse::<WrapOverflow>().expect("Valid"), WrapOverflow::Truncate);
        assert_eq!("Extend".parse::<WrapOverflow>().expect("Valid"), WrapOverflow::Extend);
        assert!("drop".parse::<WrapOverflow>().is_err());
    }
}
