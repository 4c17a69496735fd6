/// 拉取协议：每次调用产出下一个元素，或者返回`None`表示已耗尽。
///
/// 实现者必须保证耗尽后的幂等性：一旦返回过`None`，后续所有调用都只能返回`None`。
/// 每次调用只推进一次内部位置，不允许预读。
pub trait Producible {
    /// 产出的元素类型
    type Item;

    /// 产出下一个元素。
    fn next(&mut self) -> Option<Self::Item>;
}

impl<P> Producible for &mut P
where
    P: Producible + ?Sized,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<P> Producible for Box<P>
where
    P: Producible + ?Sized,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// 动态分发的流水线节点，用于运行时才能确定结构的流水线。
pub type BoxedStream<'a, T> = Box<dyn Producible<Item = T> + 'a>;
