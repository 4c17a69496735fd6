use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::AddAssign;

/// 可作为`collect`目标的容器。
///
/// 容器先通过[`Default`]构造为空，再对每个拉取到的元素调用一次[`Collectable::accept`]。
/// 支持原地累加（`+=`）的容器以累加方式接收元素，其余容器以追加方式接收。
pub trait Collectable<T>: Default {
    fn accept(&mut self, value: T);
}

impl<T> Collectable<T> for Vec<T> {
    fn accept(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> Collectable<T> for VecDeque<T> {
    fn accept(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T> Collectable<T> for LinkedList<T> {
    fn accept(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T: Ord> Collectable<T> for BinaryHeap<T> {
    fn accept(&mut self, value: T) {
        self.push(value);
    }
}

impl<T: Ord> Collectable<T> for BTreeSet<T> {
    fn accept(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T, S> Collectable<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn accept(&mut self, value: T) {
        self.insert(value);
    }
}

impl Collectable<String> for String {
    fn accept(&mut self, value: String) {
        *self += &value;
    }
}

impl<'a> Collectable<&'a str> for String {
    fn accept(&mut self, value: &'a str) {
        *self += value;
    }
}

impl Collectable<char> for String {
    fn accept(&mut self, value: char) {
        self.push(value);
    }
}

/// 原地累加容器，以`+=`合并每个元素。
///
/// 与`sum`不同，空流的累加结果是`T::default()`。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accumulated<T>(pub T);

impl<T> Accumulated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Collectable<T> for Accumulated<T>
where
    T: AddAssign + Default,
{
    fn accept(&mut self, value: T) {
        self.0 += value;
    }
}
