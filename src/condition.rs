use crate::num::Num;
use cmd_help::CmdHelp;
use regex::Regex;

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, input: &Num) -> bool {
        match self {
            Condition::Yes(select) => select.select(input),
            Condition::No(select) => !select.select(input),
        }
    }
}

/// 选择
#[derive(Debug, Clone, CmdHelp)]
pub(crate) enum Select {
    /// [!]even
    ///     选择偶数，非整数值的浮点数不选择。
    /// [!]odd
    ///     选择奇数，非整数值的浮点数不选择。
    Parity { even: bool },
    /// [!]integer
    ///     选择整数类型的数值。
    /// [!]float
    ///     选择浮点数类型的数值。
    NumType { integer: bool },
    /// [!]num [<min>],[<max>]
    ///     按照数值范围选择，包含边界，最小值和最大值至少指定其一，支持可选否定。
    ///     例如：
    ///         num 2,
    ///         num 2,5
    ///         num -2.1,5
    ///         num ,5.3
    ///         !num 1,5.3
    NumRange { min: Option<Num>, max: Option<Num> },
    /// [!]num =<spec>
    ///     按照数值特定值选择，整数与浮点数按值比较，支持可选否定。
    ///     例如：
    ///         num =3
    ///         num =3.3
    ///         !num =3
    NumSpec { spec: Num },
    /// [!]reg <exp>
    ///     选择十进制文本匹配给定正则表达式的数值。
    ///     <exp>   正则表达式，必选。
    ///     例如：
    ///         reg '^1\d*$'
    ///         !reg '\.'
    RegMatch { regex: Regex },
}

impl PartialEq for Select {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Select::Parity { even: l }, Select::Parity { even: r }) => l == r,
            (Select::NumType { integer: l }, Select::NumType { integer: r }) => l == r,
            (Select::NumRange { min: l_min, max: l_max }, Select::NumRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (Select::NumSpec { spec: l }, Select::NumSpec { spec: r }) => l == r,
            // Regex 比较模式字符串
            (Select::RegMatch { regex: l }, Select::RegMatch { regex: r }) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

impl Select {
    pub(crate) fn new_parity(even: bool) -> Select {
        Select::Parity { even }
    }
    pub(crate) fn new_num_type(integer: bool) -> Select {
        Select::NumType { integer }
    }
    pub(crate) fn new_num_range(min: Option<Num>, max: Option<Num>) -> Select {
        Select::NumRange { min, max }
    }
    pub(crate) fn new_num_spec(spec: Num) -> Select {
        Select::NumSpec { spec }
    }
    pub(crate) fn new_reg_match(regex: Regex) -> Select {
        Select::RegMatch { regex }
    }

    pub(crate) fn select(&self, input: &Num) -> bool {
        match self {
            Select::Parity { even } => {
                if *even {
                    input.is_even()
                } else {
                    input.is_odd()
                }
            }
            Select::NumType { integer } => input.is_integer() == *integer,
            Select::NumRange { min, max } => {
                min.is_none_or(|min| *input >= min) && max.is_none_or(|max| *input <= max)
            }
            Select::NumSpec { spec } => input == spec,
            Select::RegMatch { regex } => regex.is_match(&input.to_string()),
        }
    }
}
