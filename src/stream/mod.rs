mod basic;
mod filter;
mod limit;
mod map;

pub use basic::BasicStream;
pub use filter::FilteringStream;
pub use limit::LimitingStream;
pub use map::MappingStream;

use crate::collect::Collectable;
use crate::produce::{BoxedStream, Producible};
use std::ops::Add;

/// 流水线的构建操作和终止操作，对所有实现了[`Producible`]的类型自动生效。
///
/// 构建操作（`filter`、`map`、`limit`）消耗当前节点并返回包装了它的新节点，此时不会拉取任何元素。
/// 终止操作消耗整个流水线，通过反复调用[`Producible::next`]得到结果，除`find_first`外都会拉取到耗尽为止。
pub trait Stream: Producible + Sized {
    /// 只保留满足谓词的元素。
    fn filter<F>(self, predicate: F) -> FilteringStream<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        FilteringStream::new(self, predicate)
    }

    /// 将每个元素映射为新值，可以改变元素类型。
    fn map<R, M>(self, mapper: M) -> MappingStream<Self, M>
    where
        M: FnMut(Self::Item) -> R,
    {
        MappingStream::new(self, mapper)
    }

    /// 最多保留前`max_count`个元素。
    fn limit(self, max_count: usize) -> LimitingStream<Self> {
        LimitingStream::new(self, max_count)
    }

    /// 擦除具体类型，得到以动态分发拉取的流水线。
    fn boxed<'a>(self) -> BasicStream<BoxedStream<'a, Self::Item>>
    where
        Self: 'a,
    {
        BasicStream::new(Box::new(self))
    }

    /// 转为标准库迭代器。
    fn into_items(self) -> Items<Self> {
        Items { stream: self }
    }

    /// 只拉取一次，返回第一个元素。
    fn find_first(mut self) -> Option<Self::Item> {
        self.next()
    }

    /// 以第一个元素为初始值，按拉取顺序从左向右合并，空流返回`None`。
    fn reduce<F>(mut self, mut function: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc = self.next()?;
        while let Some(next) = self.next() {
            acc = function(acc, next);
        }
        Some(acc)
    }

    /// 累加全部元素，空流返回`None`而不是零值。
    fn sum(self) -> Option<Self::Item>
    where
        Self::Item: Add<Output = Self::Item>,
    {
        self.reduce(|a, b| a + b)
    }

    /// 最小值，相等时保留先出现的元素。
    fn min(mut self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        let mut result = self.next()?;
        while let Some(value) = self.next() {
            if value < result {
                result = value;
            }
        }
        Some(result)
    }

    /// 最大值，相等时保留先出现的元素。
    fn max(mut self) -> Option<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        let mut result = self.next()?;
        while let Some(value) = self.next() {
            if value > result {
                result = value;
            }
        }
        Some(result)
    }

    /// 仅提供“大于”比较时求最小值：新值不大于当前值即替换，所以相等时保留后出现的元素。
    fn min_by_gt<F>(mut self, mut greater: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut result = self.next()?;
        while let Some(value) = self.next() {
            if !greater(&value, &result) {
                result = value;
            }
        }
        Some(result)
    }

    /// 仅提供“小于”比较时求最大值：新值不小于当前值即替换，所以相等时保留后出现的元素。
    fn max_by_lt<F>(mut self, mut less: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut result = self.next()?;
        while let Some(value) = self.next() {
            if !less(&value, &result) {
                result = value;
            }
        }
        Some(result)
    }

    /// 统计元素数量。
    fn count(mut self) -> usize {
        let mut result = 0;
        while self.next().is_some() {
            result += 1;
        }
        result
    }

    /// 按拉取顺序将全部元素放入默认构造的容器。
    fn collect<C>(mut self) -> C
    where
        C: Collectable<Self::Item>,
    {
        let mut result = C::default();
        while let Some(value) = self.next() {
            result.accept(value);
        }
        result
    }
}

impl<P: Producible> Stream for P {}

/// [`Stream::into_items`]返回的迭代器。
#[derive(Debug, Clone)]
pub struct Items<S> {
    stream: S,
}

impl<S: Producible> Iterator for Items<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next()
    }
}

impl<S: Producible> std::iter::FusedIterator for Items<S> {}
