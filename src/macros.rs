/// Builds a `Vec<Kv>` from `key => value` pairs.
///
/// Each value is rendered through its `Display` implementation, like
/// [`Kv::display`](crate::Kv::display).
///
/// ```rust
/// use logfmt_kv::{kvs, Kv};
///
/// let pairs = kvs!["user" => "alice", "attempt" => 3];
/// assert_eq!(pairs[1].pair(), (b"attempt".to_vec(), b"3".to_vec()));
///
/// let none: Vec<Kv> = kvs![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        ::std::vec::Vec::<$crate::Kv>::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::Kv::display($key, &$value)),+]
    };
}
