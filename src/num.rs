use crate::{Float, Integer};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// 流水线中流动的数值，整数运算溢出时提升为浮点数。
#[derive(Debug, Clone, Copy)]
pub(crate) enum Num {
    Integer(Integer),
    Float(OrderedFloat<Float>),
}

impl Num {
    pub(crate) fn is_integer(&self) -> bool {
        matches!(self, Num::Integer(_))
    }

    pub(crate) fn is_even(&self) -> bool {
        match self {
            Num::Integer(i) => i % 2 == 0,
            Num::Float(f) => f.0.fract() == 0.0 && f.0 % 2.0 == 0.0,
        }
    }

    pub(crate) fn is_odd(&self) -> bool {
        match self {
            Num::Integer(i) => i % 2 != 0,
            Num::Float(f) => f.0.fract() == 0.0 && f.0 % 2.0 != 0.0,
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Num::Integer(i) => *i == 0,
            Num::Float(f) => f.0 == 0.0,
        }
    }

    pub(crate) fn abs(self) -> Num {
        match self {
            Num::Integer(i) => i.checked_abs().map(Num::Integer).unwrap_or_else(|| Num::from(-(i as Float))),
            Num::Float(f) => Num::from(f.0.abs()),
        }
    }

    fn as_float(&self) -> Float {
        match self {
            Num::Integer(i) => *i as Float,
            Num::Float(f) => f.0,
        }
    }

    /// 浮点数恰好为`Integer`范围内的整数时返回该整数。
    fn float_as_integer(f: Float) -> Option<Integer> {
        // -2^63可以精确表示，2^63已超出范围
        if f.fract() == 0.0 && f >= Integer::MIN as Float && f < -(Integer::MIN as Float) {
            Some(f as Integer)
        } else {
            None
        }
    }

    fn integer_op(self, rhs: Num, checked: fn(Integer, Integer) -> Option<Integer>, float: fn(Float, Float) -> Float) -> Num {
        match (self, rhs) {
            (Num::Integer(l), Num::Integer(r)) => {
                checked(l, r).map(Num::Integer).unwrap_or_else(|| Num::from(float(l as Float, r as Float)))
            }
            (l, r) => Num::from(float(l.as_float(), r.as_float())),
        }
    }
}

impl From<Integer> for Num {
    fn from(value: Integer) -> Self {
        Num::Integer(value)
    }
}

impl From<Float> for Num {
    fn from(value: Float) -> Self {
        Num::Float(OrderedFloat(value))
    }
}

impl FromStr for Num {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(integer) = s.parse::<Integer>() {
            Ok(Num::Integer(integer))
        } else {
            s.parse::<Float>().map(Num::from).map_err(|err| err.to_string())
        }
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Num::Integer(i) => write!(f, "{i}"),
            Num::Float(v) => write!(f, "{}", v.0),
        }
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Num {}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Num {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Num::Integer(l), Num::Integer(r)) => l.cmp(r),
            (Num::Float(l), Num::Float(r)) => l.cmp(r),
            (Num::Integer(l), Num::Float(r)) => cmp_integer_float(*l, r.0),
            (Num::Float(l), Num::Integer(r)) => cmp_integer_float(*r, l.0).reverse(),
        }
    }
}

/// 精确比较整数与浮点数，不把整数转为浮点数，否则超过2^53的整数会丢失精度。
/// NaN大于一切数值，与`OrderedFloat`一致。
fn cmp_integer_float(i: Integer, f: Float) -> Ordering {
    if f.is_nan() || f >= -(Integer::MIN as Float) {
        return Ordering::Less;
    }
    if f < Integer::MIN as Float {
        return Ordering::Greater;
    }
    let trunc = f.trunc();
    // 截断后必在范围内，转换是精确的
    match i.cmp(&(trunc as Integer)) {
        Ordering::Equal => OrderedFloat(trunc).cmp(&OrderedFloat(f)),
        ordering => ordering,
    }
}

impl Hash for Num {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 与整数相等的浮点数按整数计算，保持与`Eq`一致
        match self {
            Num::Integer(i) => i.hash(state),
            Num::Float(f) => match Num::float_as_integer(f.0) {
                Some(i) => i.hash(state),
                None => f.hash(state),
            },
        }
    }
}

impl Add for Num {
    type Output = Num;

    fn add(self, rhs: Num) -> Num {
        self.integer_op(rhs, Integer::checked_add, |l, r| l + r)
    }
}

impl Sub for Num {
    type Output = Num;

    fn sub(self, rhs: Num) -> Num {
        self.integer_op(rhs, Integer::checked_sub, |l, r| l - r)
    }
}

impl Mul for Num {
    type Output = Num;

    fn mul(self, rhs: Num) -> Num {
        self.integer_op(rhs, Integer::checked_mul, |l, r| l * r)
    }
}

impl Div for Num {
    type Output = Num;

    /// 整数能整除时结果仍为整数，否则为浮点数。
    fn div(self, rhs: Num) -> Num {
        // `checked_rem`同时排除除数为0和`MIN / -1`溢出
        let exact = |l: Integer, r: Integer| if l.checked_rem(r) == Some(0) { l.checked_div(r) } else { None };
        self.integer_op(rhs, exact, |l, r| l / r)
    }
}

impl Neg for Num {
    type Output = Num;

    fn neg(self) -> Num {
        match self {
            Num::Integer(i) => i.checked_neg().map(Num::Integer).unwrap_or_else(|| Num::from(-(i as Float))),
            Num::Float(f) => Num::from(-f.0),
        }
    }
}
