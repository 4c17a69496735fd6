//! 惰性、可组合的拉取式流处理库。
//!
//! 通过`filter`、`map`、`limit`逐层包装数据源构建流水线，构建过程中不会计算任何元素；
//! 调用终止操作（`find_first`、`reduce`、`sum`、`min`、`max`、`count`、`collect`）时，
//! 由最外层节点逐个向上游拉取元素。
//!
//! ```
//! use rstream::{Stream, from_iter};
//!
//! let evens = from_iter([1, 2, 3, 4, 5]).filter(|x| x % 2 == 0).collect::<Vec<_>>();
//! assert_eq!(evens, vec![2, 4]);
//! assert_eq!(from_iter([1, 2, 3]).map(|x| x * x).sum(), Some(14));
//! ```

pub mod collect;
pub mod produce;
pub mod source;
pub mod stream;

pub use collect::{Accumulated, Collectable};
pub use produce::{BoxedStream, Producible};
pub use source::{from_iter, make_reverse_stream, make_stream, once};
pub use stream::{BasicStream, Stream};
