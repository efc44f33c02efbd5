//! `nom` combinators for the descriptor sheet.
//!
//! The parsers here only recognise structure; modifier names are resolved and
//! descriptors validated by the caller.

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{take_till, take_till1, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, not, opt, recognize};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

use super::selectors::split_selectors;

/// A property block before modifier resolution.
#[derive(Debug, PartialEq)]
pub struct RawProperty<'a> {
    pub name: &'a str,
    pub modifier: Option<RawCall<'a>>,
    pub groups: Vec<RawGroup<'a>>,
}

/// A modifier call such as `darken(10%)`.
#[derive(Debug, PartialEq)]
pub struct RawCall<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// One body item. `media` is `None` for top-level selectors.
#[derive(Debug, PartialEq)]
pub struct RawGroup<'a> {
    pub media: Option<&'a str>,
    pub selectors: Vec<&'a str>,
}

/// Parses as many property blocks as possible, returning the unparsed rest.
pub fn parse_properties(input: &str) -> IResult<&str, Vec<RawProperty<'_>>> {
    terminated(many0(preceded(multispace0, parse_property)), multispace0)(input)
}

/// `name [: modifier] { items }`
pub fn parse_property(input: &str) -> IResult<&str, RawProperty<'_>> {
    let (input, name) = parse_ident(input)?;
    let (input, modifier) = opt(preceded(
        tuple((multispace0, char(':'), multispace0)),
        parse_call,
    ))(input)?;
    let (input, _) = multispace0(input)?;

    let (input, items) = delimited(
        char('{'),
        many0(preceded(multispace0, parse_item)),
        preceded(multispace0, char('}')),
    )(input)?;
    let groups = items.into_iter().flatten().collect();

    Ok((
        input,
        RawProperty {
            name,
            modifier,
            groups,
        },
    ))
}

/// Property and modifier names: letters, digits, `-` and `_`.
fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// `name` or `name(arg, ...)`.
fn parse_call(input: &str) -> IResult<&str, RawCall<'_>> {
    let (input, name) = parse_ident(input)?;
    let (input, args) = opt(delimited(char('('), take_till(|c: char| c == ')'), char(')')))(input)?;

    let args = args
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok((input, RawCall { name, args }))
}

/// A body item; a stray `;` yields `None`.
fn parse_item(input: &str) -> IResult<&str, Option<RawGroup<'_>>> {
    alt((
        map(parse_media_group, Some),
        map(parse_noop_group, Some),
        map(char(';'), |_| None),
    ))(input)
}

/// `@prelude { selectors }`
fn parse_media_group(input: &str) -> IResult<&str, RawGroup<'_>> {
    let (input, prelude) = recognize(pair(
        char('@'),
        take_till1(|c: char| c == '{' || c == '}' || c == ';'),
    ))(input)?;
    let (input, body) = delimited(char('{'), take_till(|c: char| c == '}'), char('}'))(input)?;

    Ok((
        input,
        RawGroup {
            media: Some(prelude.trim()),
            selectors: split_selectors(body, &[',', ';']),
        },
    ))
}

/// `selectors;` (the trailing `;` may be omitted before `}`)
fn parse_noop_group(input: &str) -> IResult<&str, RawGroup<'_>> {
    map(
        preceded(
            not(char('@')),
            terminated(
                take_till1(|c: char| c == ';' || c == '{' || c == '}'),
                opt(char(';')),
            ),
        ),
        |text: &str| RawGroup {
            media: None,
            selectors: split_selectors(text, &[',']),
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_property() {
        let (rest, prop) = parse_property("color { .a, .b; }").unwrap();
        assert_eq!(rest, "");
        assert_eq!(prop.name, "color");
        assert_eq!(prop.modifier, None);
        assert_eq!(
            prop.groups,
            vec![RawGroup {
                media: None,
                selectors: vec![".a", ".b"],
            }]
        );
    }

    #[test]
    fn test_parse_modifier_call() {
        let (_, prop) = parse_property("border-color: linear-gradient(to right, 5%) { .x }")
            .unwrap();
        assert_eq!(
            prop.modifier,
            Some(RawCall {
                name: "linear-gradient",
                args: vec!["to right", "5%"],
            })
        );
    }

    #[test]
    fn test_parse_bare_and_empty_calls() {
        let (_, bare) = parse_call("identity {").unwrap();
        assert_eq!(bare.args, Vec::<&str>::new());
        let (_, empty) = parse_call("identity() {").unwrap();
        assert_eq!(empty.args, Vec::<&str>::new());
    }

    #[test]
    fn test_parse_media_group() {
        let source = "color {\n  @media (min-width: 900px) { .c, .d; }\n}";
        let (_, prop) = parse_property(source).unwrap();
        assert_eq!(
            prop.groups,
            vec![RawGroup {
                media: Some("@media (min-width: 900px)"),
                selectors: vec![".c", ".d"],
            }]
        );
    }

    #[test]
    fn test_parse_properties_stops_at_garbage() {
        let (rest, props) = parse_properties("color { .a; }\n}{").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(rest, "}{");
    }

    #[test]
    fn test_stray_semicolons_are_skipped() {
        let source = "color { ; .a;; @media print { .b; }; }";
        let (rest, prop) = parse_property(source).unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            prop.groups,
            vec![
                RawGroup {
                    media: None,
                    selectors: vec![".a"],
                },
                RawGroup {
                    media: Some("@media print"),
                    selectors: vec![".b"],
                },
            ]
        );
    }

    #[test]
    fn test_unclosed_media_block_fails() {
        assert!(parse_property("color { @media print { .a; }").is_err());
    }
}
