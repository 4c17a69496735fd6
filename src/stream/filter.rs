use crate::produce::Producible;
use std::fmt;

/// 过滤节点：持续拉取上游，直到谓词成立或上游耗尽。
///
/// 丢弃的元素数量没有上限。
pub struct FilteringStream<S, F> {
    upstream: S,
    predicate: F,
}

impl<S, F> FilteringStream<S, F> {
    pub(crate) fn new(upstream: S, predicate: F) -> FilteringStream<S, F> {
        FilteringStream { upstream, predicate }
    }
}

impl<S, F> Producible for FilteringStream<S, F>
where
    S: Producible,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.upstream.next() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }
}

impl<S: fmt::Debug, F> fmt::Debug for FilteringStream<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteringStream").field("upstream", &self.upstream).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::produce::tests::Counting;

    #[test]
    fn test_skips_rejected_values() {
        let (source, pulls) = Counting::new(vec![1, 2, 3, 4, 5]);
        let mut stream = FilteringStream::new(source, |x: &i32| x % 2 == 0);
        assert_eq!(Some(2), stream.next());
        assert_eq!(2, pulls.get());
        assert_eq!(Some(4), stream.next());
        assert_eq!(4, pulls.get());
        assert_eq!(None, stream.next());
        assert_eq!(None, stream.next());
        assert_eq!(5, pulls.get());
    }

    #[test]
    fn test_discards_long_runs() {
        let mut values = vec![0; 10_000];
        values.push(7);
        let (source, pulls) = Counting::new(values);
        let mut stream = FilteringStream::new(source, |x: &i32| *x != 0);
        assert_eq!(Some(7), stream.next());
        assert_eq!(10_001, pulls.get());
        assert_eq!(None, stream.next());
    }

    #[test]
    fn test_predicate_sees_each_value_once() {
        let (source, _) = Counting::new(vec!["a", "bb", "ccc"]);
        let mut seen = Vec::new();
        let mut stream = FilteringStream::new(source, |s: &&str| {
            seen.push(s.len());
            false
        });
        assert_eq!(None, stream.next());
        drop(stream);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
