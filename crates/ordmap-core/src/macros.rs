//! Literal construction macro.

/// Creates an [`OrderedMap`](crate::OrderedMap) from a list of `key => value` pairs.
///
/// Pairs are applied in order with [`OrderedMap::set`](crate::OrderedMap::set)
/// semantics: a repeated key keeps its first position and its last value.
///
/// # Examples
///
/// ```
/// use ordmap_core::ordmap;
///
/// let map = ordmap! {
///     "b" => 2,
///     "a" => 1,
///     "b" => 3,
/// };
///
/// assert_eq!(map.keys(), ["b", "a"]);
/// assert_eq!(map["b"], 3);
/// ```
#[macro_export]
macro_rules! ordmap {
    () => {
        $crate::OrderedMap::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::OrderedMap::new();
        $(
            map.set($key, $value);
        )+
        map
    }};
}
