use crate::err::RpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use std::iter::Peekable;

mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), RpErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RpErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, RpErr> {
    match args.next() {
        // 至少有一个值，直接消耗
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(RpErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    } else {
                        values.push(escaped(value))
                    }
                }
                Err(RpErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(RpErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![escaped(value)])
            }
        }
        None => Err(RpErr::MissingArg { cmd, arg }),
    }
}

fn escaped(arg: String) -> String {
    if arg == "\\[" || arg == "\\]" { arg[1..].to_string() } else { arg }
}

/// 下一个参数满足条件时消耗并返回。
fn consume_if<F>(args: &mut Peekable<impl Iterator<Item = String>>, f: F) -> Option<String>
where
    F: FnOnce(&String) -> bool,
{
    args.next_if(f)
}

/// 下一个参数与命令匹配（忽略大小写）时消耗。
fn consume_cmd(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &str) -> bool {
    consume_if(args, |arg| arg.eq_ignore_ascii_case(cmd)).is_some()
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|arg| !arg.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, Select};
    use crate::num::Num;
    use crate::op::MapExpr;
    use crate::output::CollectTo;

    #[test]
    fn test_parse_full() {
        let args = build_args(":of [ 1 2 3 4 5 ] :filter even :map sq :limit 2 :sum");
        assert_eq!(
            Ok((
                Input::new_of(vec![Num::Integer(1), Num::Integer(2), Num::Integer(3), Num::Integer(4), Num::Integer(5)], false),
                vec![
                    Op::new_filter(Condition::new(Select::new_parity(true), false)),
                    Op::new_map(MapExpr::Square),
                    Op::new_limit(2),
                ],
                Output::Sum
            )),
            parse(args)
        );
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(Ok((Input::new_std_in(), vec![], Output::new_collect(CollectTo::List))), parse(build_args("")));
    }

    #[test]
    fn test_parse_unknown_remaining() {
        assert_eq!(
            Err(RpErr::UnknownArgs { args: vec![":bad".to_string(), "x".to_string()] }),
            parse(build_args(":of 1 :count :bad x"))
        );
    }

    #[test]
    fn test_parse_arg_or_arg1() {
        let mut args = build_args("a");
        assert_eq!(Ok(vec!["a".to_string()]), parse_arg_or_arg1(&mut args, "cmd", "arg"));
        let mut args = build_args("[ a \\[ \\] ] b");
        assert_eq!(
            Ok(vec!["a".to_string(), "[".to_string(), "]".to_string()]),
            parse_arg_or_arg1(&mut args, "cmd", "arg")
        );
        assert_eq!(Some("b".to_string()), args.next());
        let mut args = build_args("[ ]");
        assert_eq!(Err(RpErr::ArgNotEnough { cmd: "cmd", arg: "arg" }), parse_arg_or_arg1(&mut args, "cmd", "arg"));
        let mut args = build_args("[ a");
        assert_eq!(
            Err(RpErr::UnclosingMultiArg { cmd: "cmd", arg: "arg" }),
            parse_arg_or_arg1(&mut args, "cmd", "arg")
        );
        let mut args = build_args("]");
        assert_eq!(
            Err(RpErr::UnexpectedClosingBracket { cmd: "cmd", arg: "arg" }),
            parse_arg_or_arg1(&mut args, "cmd", "arg")
        );
        let mut args = build_args("");
        assert_eq!(Err(RpErr::MissingArg { cmd: "cmd", arg: "arg" }), parse_arg_or_arg1(&mut args, "cmd", "arg"));
    }
}
