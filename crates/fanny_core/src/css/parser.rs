//! CSS text parser for style fragments
//!
//! Parses the body of a rule (declarations and nested blocks, no outer
//! selector) into a [`Css`] fragment. Failures carry the line and column of
//! the offending input and the nom context stack, and are logged at DEBUG.

use nom::{
    branch::alt,
    bytes::complete::{escaped, is_not, tag, take_till1, take_until},
    character::complete::{anychar, char, multispace1},
    combinator::{all_consuming, cut, opt, recognize, value},
    error::{context, ContextError, ErrorKind, ParseError, VerboseError, VerboseErrorKind},
    multi::{many0, many1},
    sequence::{delimited, preceded, terminated},
    Finish, IResult,
};
use tracing::debug;

use super::Css;
use crate::error::CssError;

/// Custom parser result type using VerboseError for better diagnostics
type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

enum Item<'a> {
    Declaration(&'a str, &'a str),
    Block(&'a str, Css),
}

pub(super) fn parse_fragment(text: &str) -> crate::Result<Css> {
    match all_consuming(body)(text).finish() {
        Ok((_, css)) => Ok(css),
        Err(err) => {
            let error = from_verbose(text, err);
            debug!("{}", error);
            Err(error)
        }
    }
}

/// Parse whitespace and comments
fn ws<'a, E: ParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value(
        (),
        many0(alt((value((), multispace1), value((), comment)))),
    )(input)
}

/// Parse a block comment /* ... */
fn comment<'a, E: ParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Parse a sequence of items up to a closing brace or the end of input
fn body(input: &str) -> ParseResult<Css> {
    let mut css = Css::new();
    let (mut input, _) = ws::<VerboseError<&str>>(input)?;
    loop {
        if input.is_empty() || input.starts_with('}') {
            return Ok((input, css));
        }
        if let Some(rest) = input.strip_prefix(';') {
            input = ws::<VerboseError<&str>>(rest)?.0;
            continue;
        }
        let (rest, parsed) = item(input)?;
        match parsed {
            Item::Declaration(property, val) => css.insert(property, val),
            Item::Block(selector, block) => css.insert_block(selector, block),
        }
        input = ws::<VerboseError<&str>>(rest)?.0;
    }
}

/// Parse either `property: value;` or `selector { ... }`
fn item(input: &str) -> ParseResult<Item<'_>> {
    let (rest, prelude) = prelude(input)?;

    if rest.starts_with('{') {
        let (rest, block) = context(
            "nested block",
            delimited(char('{'), body, cut(preceded(ws, char('}')))),
        )(rest)?;
        return Ok((rest, Item::Block(prelude.trim(), block)));
    }

    let (rest, _) = opt(char::<&str, VerboseError<&str>>(';'))(rest)?;
    match prelude.split_once(':') {
        Some((property, val)) if is_property(property.trim()) => {
            Ok((rest, Item::Declaration(property.trim(), val.trim())))
        }
        _ => Err(nom::Err::Failure(VerboseError::add_context(
            input,
            "declaration",
            VerboseError::from_error_kind(input, ErrorKind::Verify),
        ))),
    }
}

/// Text up to the next `{`, `;` or `}` outside strings and parentheses
fn prelude(input: &str) -> ParseResult<&str> {
    context(
        "declaration or selector",
        recognize(many1(alt((
            quoted,
            parenthesized,
            take_till1(|c| matches!(c, '{' | ';' | '}' | '"' | '\'' | '(')),
        )))),
    )(input)
}

/// A single- or double-quoted string with backslash escapes
fn quoted(input: &str) -> ParseResult<&str> {
    context(
        "string",
        alt((
            recognize(preceded(
                char('"'),
                cut(terminated(
                    opt(escaped(is_not("\\\""), '\\', anychar)),
                    char('"'),
                )),
            )),
            recognize(preceded(
                char('\''),
                cut(terminated(
                    opt(escaped(is_not("\\'"), '\\', anychar)),
                    char('\''),
                )),
            )),
        )),
    )(input)
}

/// Balanced parentheses, e.g. `url(...)` or `calc(...)`
fn parenthesized(input: &str) -> ParseResult<&str> {
    context(
        "parentheses",
        recognize(preceded(
            char('('),
            cut(terminated(
                many0(alt((quoted, parenthesized, is_not("()\"'")))),
                char(')'),
            )),
        )),
    )(input)
}

fn is_property(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn from_verbose(input: &str, err: VerboseError<&str>) -> CssError {
    let (line, column, fragment) = match err.errors.first() {
        Some((frag, _)) => calculate_position(input, frag),
        None => (1, 1, String::new()),
    };

    let mut contexts: Vec<String> = err
        .errors
        .iter()
        .filter_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some((*ctx).to_string()),
            _ => None,
        })
        .collect();
    contexts.reverse();

    let message = match err.errors.first() {
        Some((frag, _)) if frag.starts_with('}') => "unexpected `}`".to_string(),
        Some((frag, VerboseErrorKind::Char(expected))) if frag.is_empty() => {
            format!("expected `{expected}` before end of input")
        }
        Some((_, VerboseErrorKind::Char(expected))) => format!("expected `{expected}`"),
        Some((_, VerboseErrorKind::Context(ctx))) => format!("invalid {ctx}"),
        Some((_, VerboseErrorKind::Nom(ErrorKind::Verify))) => {
            "expected `property: value`".to_string()
        }
        Some((_, VerboseErrorKind::Nom(kind))) => format!("unexpected input ({kind:?})"),
        None => "invalid CSS".to_string(),
    };

    CssError {
        message,
        line,
        column,
        fragment,
        contexts,
    }
}

fn calculate_position(original: &str, fragment: &str) -> (usize, usize, String) {
    let offset = original.len().saturating_sub(fragment.len());
    let consumed = &original[..offset];

    let line = consumed.matches('\n').count() + 1;
    let column = consumed
        .rfind('\n')
        .map(|pos| offset - pos)
        .unwrap_or(offset + 1);

    let preview: String = fragment.chars().take(30).collect();
    (line, column, preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty() {
        assert!(parse_fragment("").unwrap().is_empty());
        assert!(parse_fragment("  /* nothing */  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_declarations() {
        let css = parse_fragment("display: block; color: #fff").unwrap();
        assert_eq!(css.declaration("display"), Some("block"));
        assert_eq!(css.declaration("color"), Some("#fff"));
    }

    #[test]
    fn test_parse_values_with_colons_and_functions() {
        let css = parse_fragment("background: url(data:image/png;base64,iVBOR) no-repeat;").unwrap();
        assert_eq!(
            css.declaration("background"),
            Some("url(data:image/png;base64,iVBOR) no-repeat")
        );

        let css = parse_fragment("width: calc(100% - (2 * 1rem)); color: red").unwrap();
        assert_eq!(css.declaration("width"), Some("calc(100% - (2 * 1rem))"));
        assert_eq!(css.declaration("color"), Some("red"));

        let css = parse_fragment("box-shadow: 0 0 0 2px theme(palette.primary);").unwrap();
        assert_eq!(
            css.declaration("box-shadow"),
            Some("0 0 0 2px theme(palette.primary)")
        );
    }

    #[test]
    fn test_parse_quoted_values() {
        let css = parse_fragment(r#"content: ";"; color: red;"#).unwrap();
        assert_eq!(css.declaration("content"), Some(r#"";""#));
        assert_eq!(css.declaration("color"), Some("red"));

        let css = parse_fragment(r#"font-family: "Foo;Bar", 'It\'s', sans-serif;"#).unwrap();
        assert_eq!(
            css.declaration("font-family"),
            Some(r#""Foo;Bar", 'It\'s', sans-serif"#)
        );

        let css = parse_fragment(r#"&::before { content: "{"; } &::after { content: '}' }"#).unwrap();
        assert_eq!(css.block("&::before").and_then(|b| b.declaration("content")), Some(r#""{""#));
        assert_eq!(css.block("&::after").and_then(|b| b.declaration("content")), Some("'}'"));
    }

    #[test]
    fn test_parse_error_unterminated_string() {
        let err = parse_fragment(r#"content: "open; color: red;"#).unwrap_err();
        assert_eq!(err.message, "expected `\"` before end of input");
        assert!(err.contexts.contains(&"string".to_string()), "contexts: {:?}", err.contexts);

        let err = parse_fragment("width: calc(100% - 1rem;").unwrap_err();
        assert_eq!(err.message, "expected `)` before end of input");
    }

    #[test]
    fn test_parse_nested_blocks() {
        let text = r#"
            display: inline-flex;
            /* interaction */
            &:hover {
                opacity: 0.9;
                svg { fill: currentColor; }
            }
            @media (max-width: 520px) {
                width: 100%;
            }
        "#;
        let css = parse_fragment(text).unwrap();
        assert_eq!(
            css.canonical(),
            "display:inline-flex;&:hover{opacity:0.9;svg{fill:currentColor;}}@media (max-width: 520px){width:100%;}"
        );
    }

    #[test]
    fn test_parse_self_block_flattens() {
        let css = parse_fragment("display: block; & { color: red; }").unwrap();
        assert_eq!(css.canonical(), "display:block;color:red;");
    }

    #[test]
    fn test_parse_error_unclosed_block() {
        let err = parse_fragment("color: red;\n&:hover { opacity: 1;").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains('}'), "message: {}", err.message);
    }

    #[test]
    fn test_parse_error_missing_colon() {
        let err = parse_fragment("color red;").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 1);
        assert_eq!(err.message, "expected `property: value`");
        assert_eq!(err.contexts, vec!["declaration".to_string()]);
    }

    #[test]
    fn test_parse_error_stray_brace() {
        let err = parse_fragment("color: red; }").unwrap_err();
        assert_eq!(err.message, "unexpected `}`");
        assert_eq!(err.column, 13);
    }
}
