use crate::err::RpErr;
use crate::input::Input;
use crate::parse::args::{consume_cmd, parse_arg_or_arg1};
use crate::parse::token::{parse_gen_range, parse_num, parse_whole};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RpErr> {
    if consume_cmd(args, ":in") {
        Ok(Input::new_std_in())
    } else if consume_cmd(args, ":file") {
        Ok(Input::new_file(parse_arg_or_arg1(args, ":file", "file")?))
    } else if consume_cmd(args, ":of") {
        parse_of(args, ":of", false)
    } else if consume_cmd(args, ":rof") {
        parse_of(args, ":rof", true)
    } else if consume_cmd(args, ":gen") {
        parse_gen(args)
    } else {
        Ok(Input::new_std_in()) // 默认从标准输入获取
    }
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, rev: bool) -> Result<Input, RpErr> {
    let values = parse_arg_or_arg1(args, cmd, "value")?
        .iter()
        .map(|value| parse_whole(parse_num, cmd, "value", value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Input::new_of(values, rev))
}

fn parse_gen(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RpErr> {
    // 范围必选，直接消耗
    if let Some(range) = args.next() {
        let (start, end, step) = parse_whole(parse_gen_range, ":gen", "range", &range)?;
        Ok(Input::new_gen(start, end, step))
    } else {
        Err(RpErr::MissingArg { cmd: ":gen", arg: "range" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Num;
    use crate::parse::args::build_args;
    use crate::Integer;

    #[test]
    fn test_parse_default() {
        let mut args = build_args(":sum");
        assert_eq!(Ok(Input::new_std_in()), parse_input(&mut args));
        assert_eq!(Some(":sum".to_string()), args.next());
    }

    #[test]
    fn test_parse_std_in() {
        let mut args = build_args(":in");
        assert_eq!(Ok(Input::new_std_in()), parse_input(&mut args));
        assert!(args.next().is_none());
        let mut args = build_args(":IN");
        assert_eq!(Ok(Input::new_std_in()), parse_input(&mut args));
    }

    #[test]
    fn test_parse_file() {
        let mut args = build_args(":file f.txt");
        assert_eq!(Ok(Input::new_file(vec!["f.txt".to_string()])), parse_input(&mut args));
        let mut args = build_args(":file [ a.txt b.txt ] :count");
        assert_eq!(Ok(Input::new_file(vec!["a.txt".to_string(), "b.txt".to_string()])), parse_input(&mut args));
        assert_eq!(Some(":count".to_string()), args.next());
        let mut args = build_args(":file");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":file", arg: "file" }), parse_input(&mut args));
    }

    #[test]
    fn test_parse_of() {
        let mut args = build_args(":of 1");
        assert_eq!(Ok(Input::new_of(vec![Num::Integer(1)], false)), parse_input(&mut args));
        let mut args = build_args(":of [ 1 2.5 -3 ]");
        assert_eq!(
            Ok(Input::new_of(vec![Num::Integer(1), Num::from(2.5), Num::Integer(-3)], false)),
            parse_input(&mut args)
        );
        let mut args = build_args(":rof [ 1 2 ]");
        assert_eq!(Ok(Input::new_of(vec![Num::Integer(1), Num::Integer(2)], true)), parse_input(&mut args));
        let mut args = build_args(":of [ 1 x ]");
        assert!(matches!(
            parse_input(&mut args),
            Err(RpErr::ArgParseErr { cmd: ":of", arg: "value", arg_value, .. }) if arg_value == "x"
        ));
        let mut args = build_args(":of [ ]");
        assert_eq!(Err(RpErr::ArgNotEnough { cmd: ":of", arg: "value" }), parse_input(&mut args));
    }

    #[test]
    fn test_parse_gen() {
        let mut args = build_args(":gen 0,10,2");
        assert_eq!(Ok(Input::new_gen(0, 10, 2)), parse_input(&mut args));
        let mut args = build_args(":gen 5");
        assert_eq!(Ok(Input::new_gen(5, Integer::MAX, 1)), parse_input(&mut args));
        let mut args = build_args(":gen 0,10,-1");
        assert_eq!(Ok(Input::new_gen(0, 10, -1)), parse_input(&mut args));
        let mut args = build_args(":gen 0,10,0");
        assert!(matches!(parse_input(&mut args), Err(RpErr::ArgParseErr { cmd: ":gen", .. })));
        let mut args = build_args(":gen");
        assert_eq!(Err(RpErr::MissingArg { cmd: ":gen", arg: "range" }), parse_input(&mut args));
    }
}
