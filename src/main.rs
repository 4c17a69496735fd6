use crate::condition::Select;
use crate::config::Config;
use crate::err::RpErr;
use crate::input::Input;
use crate::num::Num;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use rstream::{BasicStream, BoxedStream};

mod condition;
mod config;
mod err;
mod input;
mod num;
mod op;
mod output;
mod parse;
mod print;

/// 整数类型
pub(crate) type Integer = i64;
/// 浮点数类型
pub(crate) type Float = f64;

/// 运行时组装的流水线
pub(crate) type Pipe = BasicStream<BoxedStream<'static, Num>>;

pub(crate) type PipeRes = Result<Pipe, RpErr>;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), RpErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        return print_help(args.next().as_deref());
    }
    if configs.contains(&Config::Version) {
        println!("rst {} (built at {})", env!("CARGO_PKG_VERSION"), env!("RST_BUILD_TIME"));
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    if configs.contains(&Config::Verbose) {
        println_info!("Input:");
        println_info!("    {:?}", input);
        println_info!("Op:");
        println_info!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
        println_info!("Output:");
        println_info!("    {:?}", output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let configs: &'static [Config] = configs.leak();
    let mut pipe = input.pipe(configs)?;
    for op in ops {
        pipe = op.wrap(pipe)?;
    }
    output.handle(pipe);
    Ok(())
}

fn print_help(topic: Option<&str>) -> Result<(), RpErr> {
    let helps = match topic {
        None => {
            println!("Usage: rst [-h [<topic>]] [-V] [-v] [-d] [--skip-err] [<input>] [<op>...] [<output>]");
            println!("Topics: input, op, cond, output");
            return Ok(());
        }
        Some(topic) if topic.eq_ignore_ascii_case("input") => Input::all_help(),
        Some(topic) if topic.eq_ignore_ascii_case("op") => Op::all_help(),
        Some(topic) if topic.eq_ignore_ascii_case("cond") || topic.eq_ignore_ascii_case("condition") => {
            Select::all_help()
        }
        Some(topic) if topic.eq_ignore_ascii_case("output") => Output::all_help(),
        Some(topic) => return Err(RpErr::UnknownHelpTopic(topic.to_string())),
    };
    for (_, help) in helps {
        println!("{help}");
    }
    Ok(())
}
