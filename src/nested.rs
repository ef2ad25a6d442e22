//! Nested value representations that can be flattened.
//!
//! - [`Nested<T>`]: a typed tree where every `T` is a leaf, text included.
//! - [`serde_json::Value`]: arrays are containers; strings, numbers, booleans,
//!   null and objects are leaves.

use serde_json::Value;

use crate::flatten::{flatten_lenient, Node, Shape};

/// A leaf value or a list of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a [`Nested::Leaf`].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Number of leaves reachable from this value.
    pub fn leaf_count(&self) -> usize {
        flatten_lenient(self).count()
    }

    /// Consume the structure and collect its leaves in pre-order.
    ///
    /// A top-level leaf becomes a one-element vector.
    pub fn into_flat(self) -> Vec<T> {
        let mut flat = Vec::new();
        let mut stack = match self {
            Nested::Leaf(leaf) => return vec![leaf],
            Nested::List(children) => vec![children.into_iter()],
        };

        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Nested::Leaf(leaf)) => flat.push(leaf),
                Some(Nested::List(children)) => stack.push(children.into_iter()),
                None => {
                    stack.pop();
                }
            }
        }
        flat
    }
}

impl<T> Node for Nested<T> {
    type Leaf = T;

    fn shape(&self) -> Shape<'_, Self> {
        match self {
            Nested::Leaf(leaf) => Shape::Leaf(leaf),
            Nested::List(children) => Shape::Container(children),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Nested::Leaf(_) => std::any::type_name::<T>(),
            Nested::List(_) => std::any::type_name::<Self>(),
        }
    }
}

impl Node for Value {
    type Leaf = Value;

    fn shape(&self) -> Shape<'_, Self> {
        match self {
            Value::Array(items) => Shape::Container(items),
            _ => Shape::Leaf(self),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Build a [`Nested`] value from a bracketed literal.
///
/// Bracketed groups become lists; anything else becomes a leaf. Leaves made of
/// more than one token (such as `-1`) must be wrapped in parentheses.
///
/// ```
/// use seqkit::nested;
/// use seqkit::nested::Nested;
///
/// let value = nested!([1, [2, (-3)]]);
/// assert_eq!(
///     value,
///     Nested::List(vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::Leaf(-3)]),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ([$($item:tt),* $(,)?]) => {
        $crate::nested::Nested::List(vec![$($crate::nested!($item)),*])
    };
    ($leaf:expr) => {
        $crate::nested::Nested::Leaf($leaf)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlattenError;
    use crate::flatten::flatten;
    use crate::nested;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;

    /// Build a random tree and return it together with its leaves in pre-order.
    fn random_tree(rng: &mut StdRng, depth: usize, next: &mut u32) -> (Nested<u32>, Vec<u32>) {
        if depth == 0 || rng.gen_bool(0.4) {
            *next += 1;
            return (Nested::Leaf(*next), vec![*next]);
        }

        let width = rng.gen_range(0..5);
        let mut children = Vec::with_capacity(width);
        let mut leaves = Vec::new();
        for _ in 0..width {
            let (child, child_leaves) = random_tree(rng, depth - 1, next);
            children.push(child);
            leaves.extend(child_leaves);
        }
        (Nested::List(children), leaves)
    }

    #[test]
    fn test_json_flatten() {
        let value = json!([1, [2, 3], [4, [5, 6]], 7]);
        let leaves: Vec<&Value> = flatten(&value).unwrap().collect();
        let expected: Vec<Value> = (1..=7).map(|n| json!(n)).collect();
        assert_eq!(leaves, expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_json_strings_are_leaves() {
        let value = json!(["ab", [1, 2]]);
        let leaves: Vec<Value> = flatten(&value).unwrap().cloned().collect();
        assert_eq!(leaves, vec![json!("ab"), json!(1), json!(2)]);
    }

    #[test]
    fn test_json_objects_are_leaves() {
        let value = json!([{"a": [1, 2]}, null, true]);
        let leaves: Vec<Value> = flatten(&value).unwrap().cloned().collect();
        assert_eq!(leaves, vec![json!({"a": [1, 2]}), Value::Null, json!(true)]);
    }

    #[test]
    fn test_json_scalar_not_iterable() {
        for (value, kind) in [
            (json!(42), "number"),
            (json!("text"), "string"),
            (json!({"k": 1}), "object"),
            (Value::Null, "null"),
        ] {
            match flatten(&value) {
                Err(err) => assert_eq!(err, FlattenError::NotIterable { type_name: kind }),
                Ok(_) => panic!("{kind} must not be flattened"),
            }
        }
    }

    #[test]
    fn test_into_flat() {
        let value = nested!([1, [2, 3], [4, [5, 6]], 7]);
        assert_eq!(value.into_flat(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(nested!(5).into_flat(), vec![5]);
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(nested!([1, [2, 3], [[[4]]], []]).leaf_count(), 4);
        assert_eq!(nested!(1).leaf_count(), 1);
        assert!(nested!(1).is_leaf());
        assert!(!nested!([1]).is_leaf());
    }

    #[test]
    fn test_random_trees_preserve_order_and_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut next = 0;
            let (tree, expected) = random_tree(&mut rng, 6, &mut next);
            let lenient: Vec<u32> = crate::flatten::flatten_lenient(&tree).copied().collect();
            assert_eq!(lenient, expected);
            assert_eq!(tree.leaf_count(), expected.len());

            if let Ok(iter) = flatten(&tree) {
                assert_eq!(iter.copied().collect::<Vec<u32>>(), expected);
            }
            assert_eq!(tree.into_flat(), expected);
        }
    }

    #[test]
    fn test_type_name_of_leaf() {
        let value: Nested<String> = Nested::Leaf("x".to_string());
        assert_eq!(value.type_name(), std::any::type_name::<String>());
    }
}
