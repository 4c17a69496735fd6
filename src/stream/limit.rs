use crate::produce::Producible;

/// 限量节点：最多产出`max_count`个元素。
///
/// 计数归零后直接返回`None`，不再拉取上游；上游耗尽时计数同样归零。
#[derive(Debug, Clone)]
pub struct LimitingStream<S> {
    upstream: S,
    remaining: usize,
}

impl<S> LimitingStream<S> {
    pub(crate) fn new(upstream: S, max_count: usize) -> LimitingStream<S> {
        LimitingStream { upstream, remaining: max_count }
    }

    /// 剩余可产出的元素数量上限
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S: Producible> Producible for LimitingStream<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.next() {
            Some(value) => {
                self.remaining -= 1;
                Some(value)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}
