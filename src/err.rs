use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum RpErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Bad Arg] Invalid regex `{regex}` of cmd `{cmd}`, error: {err}")]
    InvalidRegex { cmd: &'static str, regex: String, err: String },

    #[error("[Bad Arg] Divisor of cmd `{cmd}` can not be zero")]
    DivideByZero { cmd: &'static str },

    #[error("[Help] Unknown help topic `{0}`, available topics: input, op, cond, output")]
    UnknownHelpTopic(String),

    #[error("[Input] Read line `{line_no}` of standard input error: {err}")]
    ReadFromStdInErr { line_no: usize, err: String },

    #[error("[Input] Open input file `{file}` error: {err}")]
    OpenInputFileErr { file: String, err: String },

    #[error("[Input] Read line `{line_no}` of input file `{file}` error: {err}")]
    ReadFromInputFileErr { file: String, line_no: usize, err: String },

    #[error("[Input] Unable to parse `{value}` at line `{line_no}` of `{source_name}` as number: {err}")]
    ParseInputNumErr { source_name: String, line_no: usize, value: String, err: String },
}

impl Termination for RpErr {
    fn report(self) -> ExitCode {
        crate::println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl RpErr {
    /// 报告错误并以对应的退出码结束进程，用于流水线拉取过程中无法向上传递的错误。
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            RpErr::ArgParseErr { .. } => 1,
            RpErr::MissingArg { .. } => 2,
            RpErr::ArgNotEnough { .. } => 3,
            RpErr::UnclosingMultiArg { .. } => 4,
            RpErr::UnexpectedClosingBracket { .. } => 5,
            RpErr::UnknownArgs { .. } => 6,
            RpErr::InvalidRegex { .. } => 7,
            RpErr::DivideByZero { .. } => 8,
            RpErr::UnknownHelpTopic(_) => 9,
            RpErr::ReadFromStdInErr { .. } => 10,
            RpErr::OpenInputFileErr { .. } => 11,
            RpErr::ReadFromInputFileErr { .. } => 12,
            RpErr::ParseInputNumErr { .. } => 13,
        }
    }
}
