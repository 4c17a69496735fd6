use crate::condition::Condition;
use crate::num::Num;
use crate::{Pipe, PipeRes};
use cmd_help::CmdHelp;
use rstream::Stream;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 访问 **************************************** */
    /// :peek       打印每个经过的值到标准输出。
    Peek,
    /* **************************************** 转换 **************************************** */
    /// :map        对每个值进行算术变换。
    ///             :map <expr>
    ///                 <expr>  变换表达式，必选：
    ///                     add <n>     加上<n>
    ///                     sub <n>     减去<n>
    ///                     mul <n>     乘以<n>
    ///                     div <n>     除以<n>，<n>不能为0，不能整除时结果为浮点数
    ///                     neg         取相反数
    ///                     abs         取绝对值
    ///                     sq          平方
    ///             整数运算溢出时结果转为浮点数。
    ///             例如：
    ///                 :map add 1
    ///                 :map div 2.5
    ///                 :map sq
    Map(MapExpr),
    /* **************************************** 减少 **************************************** */
    /// :filter     根据指定条件选择数据保留，其他数据丢弃。
    ///             :filter <condition>
    ///                 <condition> 条件表达式，参考`-h cond`
    ///             例如：
    ///                 :filter even
    ///                 :filter !num 1,5
    ///                 :filter reg '7$'
    Filter(Condition),
    /// :limit      保留前N个数据，丢弃后续的其他数据。
    ///             达到数量后不再从上游读取数据。
    ///             :limit <count>
    ///                 <count> 需要保留的数量，必须为非负整数，必选。
    Limit { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MapExpr {
    Add(Num),
    Sub(Num),
    Mul(Num),
    Div(Num),
    Neg,
    Abs,
    Square,
}

impl MapExpr {
    pub(crate) fn apply(self, value: Num) -> Num {
        match self {
            MapExpr::Add(n) => value + n,
            MapExpr::Sub(n) => value - n,
            MapExpr::Mul(n) => value * n,
            MapExpr::Div(n) => value / n,
            MapExpr::Neg => -value,
            MapExpr::Abs => value.abs(),
            MapExpr::Square => value * value,
        }
    }
}

impl Op {
    pub(crate) fn new_peek() -> Op {
        Op::Peek
    }
    pub(crate) fn new_map(expr: MapExpr) -> Op {
        Op::Map(expr)
    }
    pub(crate) fn new_filter(cond: Condition) -> Op {
        Op::Filter(cond)
    }
    pub(crate) fn new_limit(count: usize) -> Op {
        Op::Limit { count }
    }

    /// 以当前节点为上游包装出新的节点。
    pub(crate) fn wrap(self, pipe: Pipe) -> PipeRes {
        match self {
            Op::Peek => Ok(pipe
                .map(|item| {
                    println!("{item}");
                    item
                })
                .boxed()),
            Op::Map(expr) => Ok(pipe.map(move |item| expr.apply(item)).boxed()),
            Op::Filter(cond) => Ok(pipe.filter(move |item| cond.test(item)).boxed()),
            Op::Limit { count } => Ok(pipe.limit(count).boxed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Select;
    use rstream::from_iter;

    fn pipe_of(values: &[i64]) -> Pipe {
        from_iter(values.iter().copied().map(Num::Integer).collect::<Vec<_>>()).boxed()
    }

    fn run(values: &[i64], ops: Vec<Op>) -> Vec<Num> {
        let mut pipe = pipe_of(values);
        for op in ops {
            pipe = op.wrap(pipe).unwrap();
        }
        pipe.collect()
    }

    #[test]
    fn test_filter() {
        let even = Op::new_filter(Condition::new(Select::new_parity(true), false));
        assert_eq!(run(&[1, 2, 3, 4, 5], vec![even]), vec![Num::Integer(2), Num::Integer(4)]);
    }

    #[test]
    fn test_map() {
        let square = Op::new_map(MapExpr::Square);
        assert_eq!(run(&[1, 2, 3], vec![square]), vec![Num::Integer(1), Num::Integer(4), Num::Integer(9)]);
        let add_half = Op::new_map(MapExpr::Add(Num::from(0.5)));
        assert_eq!(run(&[1, -2], vec![add_half]), vec![Num::from(1.5), Num::from(-1.5)]);
        assert_eq!(run(&[7], vec![Op::new_map(MapExpr::Div(Num::Integer(2)))]), vec![Num::from(3.5)]);
        assert_eq!(run(&[-7], vec![Op::new_map(MapExpr::Abs), Op::new_map(MapExpr::Neg)]), vec![Num::Integer(-7)]);
        let sub_then_mul = vec![Op::new_map(MapExpr::Sub(Num::Integer(3))), Op::new_map(MapExpr::Mul(Num::Integer(2)))];
        assert_eq!(run(&[10], sub_then_mul), vec![Num::Integer(14)]);
    }

    #[test]
    fn test_limit() {
        assert_eq!(run(&[5, 3, 8, 1], vec![Op::new_limit(2)]), vec![Num::Integer(5), Num::Integer(3)]);
        assert_eq!(run(&[5, 3], vec![Op::new_limit(0)]), vec![]);
    }

    #[test]
    fn test_peek_passes_through() {
        assert_eq!(run(&[1, 2], vec![Op::new_peek()]), vec![Num::Integer(1), Num::Integer(2)]);
    }

    #[test]
    fn test_chain_order() {
        let odd = || Op::new_filter(Condition::new(Select::new_parity(false), false));
        // 先取前3个再过滤，与先过滤再取前3个结果不同
        assert_eq!(
            run(&[1, 2, 3, 4, 5, 6, 7], vec![Op::new_limit(3), odd()]),
            vec![Num::Integer(1), Num::Integer(3)]
        );
        assert_eq!(
            run(&[1, 2, 3, 4, 5, 6, 7], vec![odd(), Op::new_limit(3)]),
            vec![Num::Integer(1), Num::Integer(3), Num::Integer(5)]
        );
    }
}
