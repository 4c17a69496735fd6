use crate::config::{Config, skip_err};
use crate::err::RpErr;
use crate::num::Num;
use crate::{Integer, PipeRes};
use cmd_help::CmdHelp;
use rstream::{Stream, from_iter};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::rc::Rc;

const STD_IN_NAME: &str = "<stdin>";

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :in         从标准输入读取输入，每行一个数值，忽略空行。
    ///             未指定输入时的默认输入。
    StdIn,
    /// :file       从文件读取输入，每行一个数值，忽略空行。
    ///             :file <file>|[ <file>[ <file>][...] ]
    ///                 <file>  文件路径，至少指定一个。
    ///             例如：
    ///                 :file input.txt
    ///                 :file [ input1.txt input2.txt input3.txt ]
    File { files: Vec<String> },
    /// :of         使用直接字面值作为输入。
    ///             :of <value>|[ <value>[ <value>][...] ]
    ///                 <value> 数值，至少指定一个。
    /// :rof        使用直接字面值作为输入，逆序产出。
    ///             :rof <value>|[ <value>[ <value>][...] ]
    ///             例如：
    ///                 :of 1
    ///                 :of [ 1 2.5 -3 ]
    ///                 :rof [ 1 2 3 ]      生成：3 2 1
    Of { values: Vec<Num>, rev: bool },
    /// :gen        生成指定范围内的整数作为输入。
    ///             :gen <start>[,[<end>][,<step>]]
    ///                 <start> 起始值，包含，必须。
    ///                 <end>   结束值，不包含，可选。
    ///                         未指定时生成到整数最大值。
    ///                         如果范围为空（起始值不小于结束值），则无数据生成。
    ///                 <step>  步长，不能为0，可选，未指定时取步长为1。
    ///                         如果步长为正值，表示正序生成；
    ///                         如果步长为负值，表示从范围尾部逆序生成。
    ///             例如：
    ///                 :gen 0          生成：0 1 2 3 4 5 ...
    ///                 :gen 0,10       生成：0 1 2 3 4 5 6 7 8 9
    ///                 :gen 0,10,2     生成：0 2 4 6 8
    ///                 :gen 0,,2       生成：0 2 4 6 8 10 12 14 ...
    ///                 :gen 10,0       无数据生成
    ///                 :gen 0,10,-1    生成：9 8 7 6 5 4 3 2 1 0
    Gen { start: Integer, end: Integer, step: Integer },
}

impl Input {
    pub(crate) fn new_std_in() -> Input {
        Input::StdIn
    }
    pub(crate) fn new_file(files: Vec<String>) -> Input {
        Input::File { files }
    }
    pub(crate) fn new_of(values: Vec<Num>, rev: bool) -> Input {
        Input::Of { values, rev }
    }
    pub(crate) fn new_gen(start: Integer, end: Integer, step: Integer) -> Input {
        Input::Gen { start, end, step }
    }

    pub(crate) fn pipe(self, configs: &'static [Config]) -> PipeRes {
        match self {
            Input::StdIn => Ok(from_iter(read_nums(Rc::from(STD_IN_NAME), io::stdin().lock(), configs)).boxed()),
            Input::File { files } => {
                let mut readers = Vec::with_capacity(files.len());
                for file in files {
                    match File::open(&file) {
                        Ok(fin) => readers.push((Rc::<str>::from(file), BufReader::new(fin))),
                        Err(_) if skip_err(configs) => {}
                        Err(err) => return Err(RpErr::OpenInputFileErr { file, err: err.to_string() }),
                    }
                }
                Ok(from_iter(readers.into_iter().flat_map(move |(name, reader)| read_nums(name, reader, configs)))
                    .boxed())
            }
            Input::Of { values, rev } => {
                if rev {
                    Ok(from_iter(values.into_iter().rev()).boxed())
                } else {
                    Ok(from_iter(values).boxed())
                }
            }
            Input::Gen { start, end, step } => {
                let by = (step.unsigned_abs() as usize).max(1);
                if step < 0 {
                    Ok(from_iter((start..end).rev().step_by(by).map(Num::Integer)).boxed())
                } else {
                    Ok(from_iter((start..end).step_by(by).map(Num::Integer)).boxed())
                }
            }
        }
    }
}

/// 逐行读取数值，读取或解析失败时根据配置跳过或终止。
///
/// 跳过错误时只跳过单独一行无效编码的数据；连续两次读取失败或出现其他读取错误时停止读取该来源，
/// 否则持续失败的来源（例如目录）会无限重试。
fn read_nums<B: BufRead + 'static>(
    name: Rc<str>, reader: B, configs: &'static [Config],
) -> impl Iterator<Item = Num> + 'static {
    let mut last_failed = false;
    reader
        .lines()
        .enumerate()
        .map_while(move |(idx, line)| {
            let line_no = idx + 1;
            match line {
                Ok(line) => {
                    last_failed = false;
                    Some(parse_line(&name, line_no, &line, configs))
                }
                Err(err) if skip_err(configs) => {
                    if last_failed || err.kind() != io::ErrorKind::InvalidData {
                        None
                    } else {
                        last_failed = true;
                        Some(None)
                    }
                }
                Err(err) => {
                    if &*name == STD_IN_NAME {
                        RpErr::ReadFromStdInErr { line_no, err: err.to_string() }.termination()
                    } else {
                        RpErr::ReadFromInputFileErr { file: name.to_string(), line_no, err: err.to_string() }
                            .termination()
                    }
                }
            }
        })
        .flatten()
}

fn parse_line(name: &str, line_no: usize, line: &str, configs: &[Config]) -> Option<Num> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<Num>() {
        Ok(num) => Some(num),
        Err(_) if skip_err(configs) => None,
        Err(err) => RpErr::ParseInputNumErr {
            source_name: name.to_string(),
            line_no,
            value: text.to_string(),
            err,
        }
        .termination(),
    }
}
