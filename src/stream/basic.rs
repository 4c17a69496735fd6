use crate::produce::Producible;

/// 流水线的根节点，包装一个数据源，本身不附加任何策略。
#[derive(Debug, Clone)]
pub struct BasicStream<S> {
    streamable: S,
}

impl<S: Producible> BasicStream<S> {
    pub fn new(streamable: S) -> BasicStream<S> {
        BasicStream { streamable }
    }
}

impl<S: Producible> Producible for BasicStream<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.streamable.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::produce::tests::Counting;

    #[test]
    fn test_delegates_to_source() {
        let (source, pulls) = Counting::new(vec![1, 2, 3]);
        let mut stream = BasicStream::new(source);
        assert_eq!(Some(1), stream.next());
        assert_eq!(1, pulls.get());
        assert_eq!(Some(2), stream.next());
        assert_eq!(Some(3), stream.next());
        assert_eq!(None, stream.next());
        assert_eq!(None, stream.next());
        assert_eq!(3, pulls.get());
    }
}
