use crate::Integer;
use crate::condition::Select;
use crate::err::RpErr;
use crate::num::Num;
use nom::branch::alt;
use nom::character::complete::{char, i64};
use nom::combinator::{eof, map, map_res, opt, verify};
use nom::error::context;
use nom::number::complete::recognize_float;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 使用解析器解析完整的参数值，剩余未解析的内容视为错误。
pub(in crate::parse) fn parse_whole<'a, O, P>(
    parser: P, cmd: &'static str, arg: &'static str, value: &'a str,
) -> Result<O, RpErr>
where
    P: Parser<&'a str, Output = O, Error = ParserError<'a>>,
{
    match terminated(parser, eof).parse(value) {
        Ok((_, output)) => Ok(output),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            Err(RpErr::ArgParseErr { cmd, arg, arg_value: value.to_owned(), error: convert_error(value, err) })
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(RpErr::ArgParseErr { cmd, arg, arg_value: value.to_owned(), error: "incomplete input".to_owned() })
        }
    }
}

/// 数值：能解析为整数时为整数，否则为浮点数。
pub(in crate::parse) fn parse_num(input: &str) -> IResult<&str, Num, ParserError<'_>> {
    context("Num", map_res(recognize_float, |s: &str| s.parse::<Num>())).parse(input)
}

/// 整数范围：`<start>[,[<end>][,<step>]]`，步长不能为0。
pub(in crate::parse) fn parse_gen_range(input: &str) -> IResult<&str, (Integer, Integer, Integer), ParserError<'_>> {
    context(
        "Input::Gen",
        map(
            (
                context("Input::Gen::<start>", i64),
                opt(preceded(
                    char(','),
                    (
                        context("Input::Gen::[<end>]", opt(i64)),
                        opt(preceded(char(','), context("Input::Gen::[<step>]", verify(i64, |step: &Integer| *step != 0)))),
                    ),
                )),
            ),
            |(start, rest)| {
                let (end, step) = rest.unwrap_or((None, None));
                (start, end.unwrap_or(Integer::MAX), step.unwrap_or(1))
            },
        ),
    )
    .parse(input)
}

/// 数值条件：`=<spec>`或`[<min>],[<max>]`。
pub(in crate::parse) fn parse_num_select(input: &str) -> IResult<&str, Select, ParserError<'_>> {
    alt((
        context("Select::NumSpec", map(preceded(char('='), parse_num), Select::new_num_spec)),
        context(
            "Select::NumRange",
            map(
                verify((opt(parse_num), char(','), opt(parse_num)), |(min, _, max): &(Option<Num>, char, Option<Num>)| {
                    min.is_some() || max.is_some()
                }),
                |(min, _, max)| Select::new_num_range(min, max),
            ),
        ),
    ))
    .parse(input)
}
