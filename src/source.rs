use crate::produce::Producible;
use crate::stream::BasicStream;
use std::iter::{Fuse, Rev};

/// 基于迭代器的数据源。
///
/// 内部迭代器经过`fuse`，即使原迭代器在返回`None`后还能继续产出，数据源也会保持耗尽状态。
#[derive(Debug, Clone)]
pub struct IteratorStreamable<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IteratorStreamable<I> {
    pub fn new(iter: I) -> IteratorStreamable<I> {
        IteratorStreamable { iter: iter.fuse() }
    }
}

impl<I: Iterator> Producible for IteratorStreamable<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// 单值数据源，产出一个元素后耗尽。
#[derive(Debug, Clone)]
pub struct SingletStreamable<T> {
    value: Option<T>,
}

impl<T> SingletStreamable<T> {
    pub fn new(value: T) -> SingletStreamable<T> {
        SingletStreamable { value: Some(value) }
    }
}

impl<T> Producible for SingletStreamable<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }
}

/// 按正序遍历容器，元素为容器内元素的引用。
pub fn make_stream<'a, C>(container: &'a C) -> BasicStream<IteratorStreamable<<&'a C as IntoIterator>::IntoIter>>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    BasicStream::new(IteratorStreamable::new(container.into_iter()))
}

/// 按逆序遍历容器，要求容器的迭代器支持从尾部遍历。
pub fn make_reverse_stream<'a, C>(
    container: &'a C,
) -> BasicStream<IteratorStreamable<Rev<<&'a C as IntoIterator>::IntoIter>>>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: DoubleEndedIterator,
{
    BasicStream::new(IteratorStreamable::new(container.into_iter().rev()))
}

/// 消耗任意可迭代对象作为数据源。
pub fn from_iter<I: IntoIterator>(iterable: I) -> BasicStream<IteratorStreamable<I::IntoIter>> {
    BasicStream::new(IteratorStreamable::new(iterable.into_iter()))
}

/// 只包含一个元素的流。
pub fn once<T>(value: T) -> BasicStream<SingletStreamable<T>> {
    BasicStream::new(SingletStreamable::new(value))
}
