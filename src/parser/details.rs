//! Parser implementations.
//!
//! There is one parser function per ABNF rule. Rules refer to each other by calling
//! the functions, so the field validators and the whole-IRI parser share the exact
//! same definitions.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char as char_, satisfy},
    combinator::{all_consuming, map, opt, recognize, success},
    error::ParseError,
    multi::{many0_count, many1_count},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::components::IriComponents;
use crate::parser::char::CharSet;

/// Parses a single character in the given class.
fn class<'a, E: ParseError<&'a str>>(
    set: CharSet,
) -> impl Fn(&'a str) -> IResult<&'a str, char, E> {
    satisfy(move |c| set.allows(c))
}

/// Parses `DIGIT` rule.
fn digit<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, char, E> {
    class::<E>(CharSet::DIGIT)(i)
}

/// Parses `HEXDIG` rule.
fn hexdig<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, char, E> {
    class::<E>(CharSet::HEXDIG)(i)
}

/// Parses `sub-delims` rule.
fn sub_delims<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(class::<E>(CharSet::SUB_DELIMS))(i)
}

/// Parses `iunreserved` rule.
fn iunreserved<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(class::<E>(CharSet::IUNRESERVED))(i)
}

/// Parses `iprivate` rule.
fn iprivate<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(class::<E>(CharSet::IPRIVATE))(i)
}

/// Parses `pct-encoded` rule.
pub(crate) fn pct_encoded<'a, E: ParseError<&'a str>>(
    i: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(tuple((char_('%'), hexdig::<E>, hexdig::<E>)))(i)
}

/// Parses `ipchar` rule.
fn ipchar<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    alt((
        iunreserved::<E>,
        pct_encoded::<E>,
        sub_delims::<E>,
        tag(":"),
        tag("@"),
    ))(i)
}

/// Parses `scheme` rule.
pub(crate) fn scheme<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(pair(
        class::<E>(CharSet::SCHEME_START),
        many0_count(class::<E>(CharSet::SCHEME_CONTINUE)),
    ))(i)
}

/// Parses `iuserinfo` rule.
pub(crate) fn userinfo<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(alt((
        iunreserved::<E>,
        pct_encoded::<E>,
        sub_delims::<E>,
        tag(":"),
    ))))(i)
}

/// Parses `ihost` rule.
///
/// This is either a bracketed literal or a (possibly empty) registered name.
pub(crate) fn host<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    alt((ip_literal::<E>, reg_name::<E>))(i)
}

/// Parses a bracketed host literal: `"[" 1*( unreserved / sub-delims / ":" ) "]"`.
fn ip_literal<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(delimited(
        char_('['),
        many1_count(class::<E>(CharSet::IP_LITERAL_INNER)),
        char_(']'),
    ))(i)
}

/// Parses `ireg-name` rule.
fn reg_name<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(alt((
        iunreserved::<E>,
        pct_encoded::<E>,
        sub_delims::<E>,
    ))))(i)
}

/// Parses `port` rule.
pub(crate) fn port<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(digit::<E>))(i)
}

/// Parses `iauthority` rule, and returns userinfo, host, and port.
#[allow(clippy::type_complexity)]
fn authority<'a, E: ParseError<&'a str>>(
    i: &'a str,
) -> IResult<&'a str, (Option<&'a str>, &'a str, Option<&'a str>), E> {
    tuple((
        opt(terminated(userinfo::<E>, char_('@'))),
        host::<E>,
        opt(preceded(char_(':'), port::<E>)),
    ))(i)
}

/// Parses a path of any shape: `*( "/" / ipchar )`.
pub(crate) fn path<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(alt((tag("/"), ipchar::<E>))))(i)
}

/// Parses `ipath-abempty` rule: `*( "/" isegment )`.
///
/// This is the path following an authority.
fn path_abempty<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(pair(char_('/'), many0_count(ipchar::<E>))))(i)
}

/// Parses `iquery` rule.
pub(crate) fn query<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(alt((
        ipchar::<E>,
        iprivate::<E>,
        tag("/"),
        tag("?"),
    ))))(i)
}

/// Parses `ifragment` rule.
pub(crate) fn fragment<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    recognize(many0_count(alt((ipchar::<E>, tag("/"), tag("?")))))(i)
}

/// Parses the optional authority and the path following it.
#[allow(clippy::type_complexity)]
fn authority_path<'a, E: ParseError<&'a str>>(
    i: &'a str,
) -> IResult<&'a str, (Option<(Option<&'a str>, &'a str, Option<&'a str>)>, &'a str), E> {
    alt((
        pair(
            map(preceded(tag("//"), authority::<E>), Some),
            path_abempty::<E>,
        ),
        pair(success(None), path::<E>),
    ))(i)
}

/// Parses everything after `scheme ":"` to the end of the input.
#[allow(clippy::type_complexity)]
fn after_scheme<'a, E: ParseError<&'a str>>(
    i: &'a str,
) -> IResult<
    &'a str,
    (
        (Option<(Option<&'a str>, &'a str, Option<&'a str>)>, &'a str),
        Option<&'a str>,
        Option<&'a str>,
    ),
    E,
> {
    all_consuming(tuple((
        authority_path::<E>,
        opt(preceded(char_('?'), query::<E>)),
        opt(preceded(char_('#'), fragment::<E>)),
    )))(i)
}

/// Parses a whole IRI reference and decomposes it into components.
///
/// ```text
/// [ scheme ":" ] [ "//" [ userinfo "@" ] host [ ":" port ] ] path [ "?" query ] [ "#" fragment ]
/// ```
///
/// The scheme is tried first. If the rest does not parse with it, the whole input is
/// parsed again as a scheme-less reference.
pub(crate) fn decompose_iri_reference<'a, E: ParseError<&'a str>>(
    i: &'a str,
) -> IResult<&'a str, IriComponents<'a>, E> {
    map(
        alt((
            pair(map(terminated(scheme::<E>, char_(':')), Some), after_scheme::<E>),
            pair(success(None), after_scheme::<E>),
        )),
        |(scheme, ((authority, path), query, fragment))| {
            let (userinfo, host, port) = match authority {
                Some((userinfo, host, port)) => (userinfo, Some(host), port),
                None => (None, None, None),
            };
            IriComponents {
                scheme,
                userinfo,
                host,
                port,
                path,
                query,
                fragment,
            }
        },
    )(i)
}
