use super::{EXIT, MARKER, ParseError, lookup};

/// A line of user input, split but not yet validated.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    Call { name: &'a str, args: String },
}

pub fn parse_line(line: &str) -> Result<Input<'_>, ParseError> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().ok_or(ParseError::NoCommand)?;

    if name == EXIT || name == &EXIT[1..] {
        return Ok(Input::Exit);
    }

    if !name.starts_with(MARKER) {
        let marked = format!("{MARKER}{name}");
        if lookup(&marked).is_some() {
            return Err(ParseError::MissingMarker { suggestion: marked });
        }
    }

    Ok(Input::Call {
        name,
        args: tokens.collect::<Vec<_>>().join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_no_command() {
        assert_eq!(parse_line(""), Err(ParseError::NoCommand));
        assert_eq!(parse_line(" \t  "), Err(ParseError::NoCommand));
    }

    #[test]
    fn splits_name_and_rejoins_arguments() {
        assert_eq!(
            parse_line("  @add   p\to  l1 "),
            Ok(Input::Call {
                name: "@add",
                args: "p o l1".to_string()
            })
        );
        assert_eq!(
            parse_line("@status"),
            Ok(Input::Call {
                name: "@status",
                args: String::new()
            })
        );
    }

    #[test]
    fn unmarked_command_suggests_marked_form() {
        assert_eq!(
            parse_line("status"),
            Err(ParseError::MissingMarker {
                suggestion: "@status".to_string()
            })
        );
        assert_eq!(
            parse_line("add p").unwrap_err().to_string(),
            "Did you mean \"@add\"?"
        );
    }

    #[test]
    fn exit_tokens() {
        assert_eq!(parse_line("@exit"), Ok(Input::Exit));
        assert_eq!(parse_line("exit now"), Ok(Input::Exit));
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(
            parse_line("hello world"),
            Ok(Input::Call {
                name: "hello",
                args: "world".to_string()
            })
        );
    }
}
