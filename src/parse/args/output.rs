use crate::err::RpErr;
use crate::output::{CollectTo, Output, ReduceBy};
use crate::parse::args::{consume_cmd, consume_if};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RpErr> {
    if consume_cmd(args, ":first") {
        Ok(Output::First)
    } else if consume_cmd(args, ":sum") {
        Ok(Output::Sum)
    } else if consume_cmd(args, ":min") {
        Ok(Output::Min)
    } else if consume_cmd(args, ":max") {
        Ok(Output::Max)
    } else if consume_cmd(args, ":count") {
        Ok(Output::Count)
    } else if consume_cmd(args, ":reduce") {
        parse_reduce(args)
    } else if consume_cmd(args, ":collect") {
        parse_collect(args)
    } else {
        Ok(Output::new_collect(CollectTo::List))
    }
}

fn parse_reduce(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RpErr> {
    let Some(by) = args.next() else {
        return Err(RpErr::MissingArg { cmd: ":reduce", arg: "by" });
    };
    let reduce_by = match by.to_ascii_lowercase().as_str() {
        "add" => ReduceBy::Add,
        "mul" => ReduceBy::Mul,
        "min" => ReduceBy::Min,
        "max" => ReduceBy::Max,
        _ => {
            return Err(RpErr::ArgParseErr {
                cmd: ":reduce",
                arg: "by",
                arg_value: by,
                error: "expected one of add, mul, min, max".to_owned(),
            });
        }
    };
    Ok(Output::new_reduce(reduce_by))
}

fn parse_collect(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RpErr> {
    // 收集方式可选，只消耗能识别的参数
    let Some(to) = consume_if(args, |arg| {
        ["list", "set", "uniq", "join"].iter().any(|to| arg.eq_ignore_ascii_case(to))
    }) else {
        return Ok(Output::new_collect(CollectTo::List));
    };
    let collect_to = match to.to_ascii_lowercase().as_str() {
        "set" => CollectTo::Set,
        "uniq" => CollectTo::Uniq,
        "join" => match args.next() {
            Some(delimiter) => CollectTo::Join { delimiter },
            None => return Err(RpErr::MissingArg { cmd: ":collect", arg: "delimiter" }),
        },
        _ => CollectTo::List,
    };
    Ok(Output::new_collect(collect_to))
}
