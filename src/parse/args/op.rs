use crate::condition::{Condition, Select};
use crate::err::RpErr;
use crate::num::Num;
use crate::op::{MapExpr, Op};
use crate::parse::args::consume_cmd;
use crate::parse::token::{parse_num, parse_num_select, parse_whole};
use regex::Regex;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, RpErr> {
    let mut ops = Vec::new();
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RpErr> {
    if consume_cmd(args, ":peek") {
        Ok(Some(Op::new_peek()))
    } else if consume_cmd(args, ":map") {
        parse_map(args).map(Some)
    } else if consume_cmd(args, ":filter") {
        parse_filter(args).map(Some)
    } else if consume_cmd(args, ":limit") {
        parse_limit(args).map(Some)
    } else {
        Ok(None)
    }
}

fn parse_map(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, RpErr> {
    let Some(expr) = args.next() else {
        return Err(RpErr::MissingArg { cmd: ":map", arg: "expr" });
    };
    let expr = match expr.to_ascii_lowercase().as_str() {
        "add" => MapExpr::Add(parse_operand(args)?),
        "sub" => MapExpr::Sub(parse_operand(args)?),
        "mul" => MapExpr::Mul(parse_operand(args)?),
        "div" => {
            let divisor = parse_operand(args)?;
            if divisor.is_zero() {
                return Err(RpErr::DivideByZero { cmd: ":map" });
            }
            MapExpr::Div(divisor)
        }
        "neg" => MapExpr::Neg,
        "abs" => MapExpr::Abs,
        "sq" => MapExpr::Square,
        _ => {
            return Err(RpErr::ArgParseErr {
                cmd: ":map",
                arg: "expr",
                arg_value: expr,
                error: "expected one of add, sub, mul, div, neg, abs, sq".to_owned(),
            });
        }
    };
    Ok(Op::new_map(expr))
}

fn parse_operand(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Num, RpErr> {
    match args.next() {
        Some(value) => parse_whole(parse_num, ":map", "n", &value),
        None => Err(RpErr::MissingArg { cmd: ":map", arg: "n" }),
    }
}

fn parse_filter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, RpErr> {
    let Some(cond) = args.next() else {
        return Err(RpErr::MissingArg { cmd: ":filter", arg: "condition" });
    };
    // `!`前缀表示取反，可以单独作为一个参数，也可以紧贴条件名
    let (not, name) = match cond.strip_prefix('!') {
        Some("") => match args.next() {
            Some(name) => (true, name),
            None => return Err(RpErr::MissingArg { cmd: ":filter", arg: "condition" }),
        },
        Some(name) => (true, name.to_owned()),
        None => (false, cond),
    };
    let select = match name.to_ascii_lowercase().as_str() {
        "even" => Select::new_parity(true),
        "odd" => Select::new_parity(false),
        "integer" => Select::new_num_type(true),
        "float" => Select::new_num_type(false),
        "num" => match args.next() {
            Some(range) => parse_whole(parse_num_select, ":filter", "num", &range)?,
            None => return Err(RpErr::MissingArg { cmd: ":filter", arg: "num" }),
        },
        "reg" => match args.next() {
            Some(regex) => match Regex::new(&regex) {
                Ok(regex) => Select::new_reg_match(regex),
                Err(err) => return Err(RpErr::InvalidRegex { cmd: ":filter", regex, err: err.to_string() }),
            },
            None => return Err(RpErr::MissingArg { cmd: ":filter", arg: "regex" }),
        },
        _ => {
            return Err(RpErr::ArgParseErr {
                cmd: ":filter",
                arg: "condition",
                arg_value: name,
                error: "expected one of even, odd, integer, float, num, reg".to_owned(),
            });
        }
    };
    Ok(Op::new_filter(Condition::new(select, not)))
}

fn parse_limit(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, RpErr> {
    match args.next() {
        Some(count) => match count.parse::<usize>() {
            Ok(count) => Ok(Op::new_limit(count)),
            Err(err) => Err(RpErr::ArgParseErr { cmd: ":limit", arg: "count", arg_value: count, error: err.to_string() }),
        },
        None => Err(RpErr::MissingArg { cmd: ":limit", arg: "count" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    fn filter(select: Select, not: bool) -> Op {
        Op::new_filter(Condition::new(select, not))
    }

    #[test]
    fn test_parse_none() {
        let mut args = build_args(":sum");
        assert_eq!(Ok(vec![]), parse_ops(&mut args));
        assert_eq!(Some(":sum".to_string()), args.next());
    }

    #[test]
    fn test_parse_peek() {
        let mut args = build_args(":peek :PEEK");
        assert_eq!(Ok(vec![Op::new_peek(), Op::new_peek()]), parse_ops(&mut args));
    }

    #[test]
    fn test_parse_map() {
        let mut args = build_args(":map add 1 :map sub 2.5 :map mul -3 :map div 4 :map neg :map abs :map sq");
        assert_eq!(
            Ok(vec![
                Op::new_map(MapExpr::Add(Num::Integer(1))),
                Op::new_map(MapExpr::Sub(Num::from(2.5))),
                Op::new_map(MapExpr::Mul(Num::Integer(-3))),
                Op::new_map(MapExpr::Div(Num::Integer(4))),
                Op::new_map(MapExpr::Neg),
                Op::new_map(MapExpr::Abs),
                Op::new_map(MapExpr::Square),
            ]),
            parse_ops(&mut args)
        );
        let mut args = build_args(":map div 0");
        assert_eq!(Err(RpErr::DivideByZero { cmd: ":map" }), parse_ops(&mut args));
        let mut args = build_args(":map div 0.0");
        assert_eq!(Err(RpErr::DivideByZero { cmd: ":map" }), parse_ops(&mut args));
        let mut args = build_args(":map add");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":map", arg: "n" }), parse_ops(&mut args));
        let mut args = build_args(":map");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":map", arg: "expr" }), parse_ops(&mut args));
        let mut args = build_args(":map pow 2");
        assert!(matches!(parse_ops(&mut args), Err(RpErr::ArgParseErr { cmd: ":map", arg: "expr", .. })));
        let mut args = build_args(":map add x");
        assert!(matches!(parse_ops(&mut args), Err(RpErr::ArgParseErr { cmd: ":map", arg: "n", .. })));
    }

    #[test]
    fn test_parse_filter() {
        let mut args = build_args(":filter even :filter odd :filter integer :filter float");
        assert_eq!(
            Ok(vec![
                filter(Select::new_parity(true), false),
                filter(Select::new_parity(false), false),
                filter(Select::new_num_type(true), false),
                filter(Select::new_num_type(false), false),
            ]),
            parse_ops(&mut args)
        );
        let mut args = build_args(":filter !even :filter ! odd");
        assert_eq!(
            Ok(vec![filter(Select::new_parity(true), true), filter(Select::new_parity(false), true)]),
            parse_ops(&mut args)
        );
        let mut args = build_args(":filter num 1,5 :filter !num =3");
        assert_eq!(
            Ok(vec![
                filter(Select::new_num_range(Some(Num::Integer(1)), Some(Num::Integer(5))), false),
                filter(Select::new_num_spec(Num::Integer(3)), true),
            ]),
            parse_ops(&mut args)
        );
        let mut args = build_args(":filter reg 7$");
        assert_eq!(
            Ok(vec![filter(Select::new_reg_match(Regex::new("7$").unwrap()), false)]),
            parse_ops(&mut args)
        );
    }

    #[test]
    fn test_parse_filter_err() {
        let mut args = build_args(":filter");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":filter", arg: "condition" }), parse_ops(&mut args));
        let mut args = build_args(":filter !");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":filter", arg: "condition" }), parse_ops(&mut args));
        let mut args = build_args(":filter num");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":filter", arg: "num" }), parse_ops(&mut args));
        let mut args = build_args(":filter num ,");
        assert!(matches!(parse_ops(&mut args), Err(RpErr::ArgParseErr { cmd: ":filter", arg: "num", .. })));
        let mut args = build_args(":filter reg (");
        assert!(matches!(parse_ops(&mut args), Err(RpErr::InvalidRegex { cmd: ":filter", .. })));
        let mut args = build_args(":filter prime");
        assert!(matches!(parse_ops(&mut args), Err(RpErr::ArgParseErr { cmd: ":filter", arg: "condition", .. })));
    }

    #[test]
    fn test_parse_limit() {
        let mut args = build_args(":limit 2 :limit 0");
        assert_eq!(Ok(vec![Op::new_limit(2), Op::new_limit(0)]), parse_ops(&mut args));
        let mut args = build_args(":limit -1");
        assert!(matches!(parse_ops(&mut args), Err(RpErr::ArgParseErr { cmd: ":limit", .. })));
        let mut args = build_args(":limit");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":limit", arg: "count" }), parse_ops(&mut args));
    }
}
