use crate::Pipe;
use crate::num::Num;
use cmd_help::CmdHelp;
use itertools::Itertools;
use rstream::Stream;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// :first      输出第一个数据，只读取一次上游。
    First,
    /// :sum        累加全部数据，无数据时不输出。
    Sum,
    /// :min        输出最小值，无数据时不输出。
    Min,
    /// :max        输出最大值，无数据时不输出。
    Max,
    /// :count      统计数据数量。
    Count,
    /// :reduce     从左向右合并全部数据，无数据时不输出。
    ///             :reduce add|mul|min|max
    ///             例如：
    ///                 :reduce mul
    Reduce(ReduceBy),
    /// :collect    收集全部数据后输出，未指定输出时的默认输出。
    ///             :collect[ list|set|uniq|join <delimiter>]
    ///                 list                每行一个数据，保持原有顺序，默认。
    ///                 set                 去重并升序排列，每行一个数据。
    ///                 uniq                去重并保持首次出现的顺序，每行一个数据。
    ///                 join <delimiter>    使用<delimiter>连接为一行。
    ///             例如：
    ///                 :collect
    ///                 :collect set
    ///                 :collect join ,
    Collect(CollectTo),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ReduceBy {
    Add,
    Mul,
    Min,
    Max,
}

#[derive(Debug, PartialEq)]
pub(crate) enum CollectTo {
    List,
    Set,
    Uniq,
    Join { delimiter: String },
}

impl Output {
    pub(crate) fn new_reduce(reduce_by: ReduceBy) -> Output {
        Output::Reduce(reduce_by)
    }
    pub(crate) fn new_collect(collect_to: CollectTo) -> Output {
        Output::Collect(collect_to)
    }

    pub(crate) fn handle(self, pipe: Pipe) {
        for line in self.render(pipe) {
            println!("{line}");
        }
    }

    /// 驱动流水线，得到需要输出的每一行。
    fn render(self, pipe: Pipe) -> Vec<String> {
        match self {
            Output::First => lines(pipe.find_first()),
            Output::Sum => lines(pipe.sum()),
            Output::Min => lines(pipe.min()),
            Output::Max => lines(pipe.max()),
            Output::Count => vec![pipe.count().to_string()],
            Output::Reduce(reduce_by) => lines(match reduce_by {
                ReduceBy::Add => pipe.reduce(|acc, next| acc + next),
                ReduceBy::Mul => pipe.reduce(|acc, next| acc * next),
                ReduceBy::Min => pipe.reduce(Ord::min),
                ReduceBy::Max => pipe.reduce(Ord::max),
            }),
            Output::Collect(collect_to) => match collect_to {
                CollectTo::List => lines(pipe.collect::<Vec<_>>()),
                CollectTo::Set => lines(pipe.collect::<BTreeSet<_>>()),
                CollectTo::Uniq => {
                    let mut seen = FxHashSet::default();
                    lines(pipe.filter(move |item| seen.insert(*item)).collect::<Vec<_>>())
                }
                CollectTo::Join { delimiter } => vec![pipe.into_items().join(&delimiter)],
            },
        }
    }
}

fn lines(values: impl IntoIterator<Item = Num>) -> Vec<String> {
    values.into_iter().map(|num| num.to_string()).collect()
}
