use crate::produce::Producible;
use std::fmt;

/// 映射节点：每次只拉取上游一次，对存在的值应用映射函数，可以改变元素类型。
pub struct MappingStream<S, M> {
    upstream: S,
    mapper: M,
}

impl<S, M> MappingStream<S, M> {
    pub(crate) fn new(upstream: S, mapper: M) -> MappingStream<S, M> {
        MappingStream { upstream, mapper }
    }
}

impl<S, M, R> Producible for MappingStream<S, M>
where
    S: Producible,
    M: FnMut(S::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(&mut self.mapper)
    }
}

impl<S: fmt::Debug, M> fmt::Debug for MappingStream<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingStream").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}
