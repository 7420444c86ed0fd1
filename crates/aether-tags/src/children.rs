//! Conversion of composition arguments into child nodes.
//!
//! [`compose`](crate::Element::compose) accepts anything implementing
//! [`IntoChild`]: text, trusted markup, elements, `Option`s of those (`None`
//! is skipped), vectors, arrays, tuples and [`lazy`] iterators. Nested shapes
//! are flattened in the order they were supplied.

use std::borrow::Cow;

use aether_core::SafeString;

use crate::element::{Element, Node};

/// Normalized composition argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
	/// Nothing to append.
	Empty,
	/// One node.
	One(Node),
	/// Several nodes, already flattened.
	Many(Vec<Node>),
}

impl Child {
	/// Flattens the argument into nodes, skipping empty markers.
	pub fn into_nodes(self) -> Vec<Node> {
		let mut nodes = Vec::new();
		self.flatten_into(&mut nodes);
		nodes
	}

	fn flatten_into(self, nodes: &mut Vec<Node>) {
		match self {
			Child::Empty => {}
			Child::One(node) => nodes.push(node),
			Child::Many(many) => nodes.extend(many),
		}
	}
}

/// Values that can be composed into an element.
pub trait IntoChild {
	/// Converts the value into a normalized child argument.
	fn into_child(self) -> Child;
}

impl IntoChild for Child {
	fn into_child(self) -> Child {
		self
	}
}

impl IntoChild for Node {
	fn into_child(self) -> Child {
		Child::One(self)
	}
}

impl IntoChild for Element {
	fn into_child(self) -> Child {
		Child::One(Node::Element(self))
	}
}

impl IntoChild for SafeString {
	fn into_child(self) -> Child {
		Child::One(Node::Safe(self))
	}
}

impl IntoChild for String {
	fn into_child(self) -> Child {
		Child::One(Node::Text(self))
	}
}

impl IntoChild for &String {
	fn into_child(self) -> Child {
		Child::One(Node::Text(self.clone()))
	}
}

impl IntoChild for &str {
	fn into_child(self) -> Child {
		Child::One(Node::Text(self.to_string()))
	}
}

impl IntoChild for Cow<'_, str> {
	fn into_child(self) -> Child {
		Child::One(Node::Text(self.into_owned()))
	}
}

impl IntoChild for char {
	fn into_child(self) -> Child {
		Child::One(Node::Text(self.to_string()))
	}
}

macro_rules! impl_into_child_for_numbers {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoChild for $ty {
				fn into_child(self) -> Child {
					Child::One(Node::Text(self.to_string()))
				}
			}
		)*
	};
}

impl_into_child_for_numbers!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl IntoChild for () {
	fn into_child(self) -> Child {
		Child::Empty
	}
}

impl<T: IntoChild> IntoChild for Option<T> {
	fn into_child(self) -> Child {
		match self {
			Some(value) => value.into_child(),
			None => Child::Empty,
		}
	}
}

impl<T: IntoChild> IntoChild for Vec<T> {
	fn into_child(self) -> Child {
		collect(self)
	}
}

impl<T: IntoChild, const N: usize> IntoChild for [T; N] {
	fn into_child(self) -> Child {
		collect(self)
	}
}

/// Iterator argument evaluated when it is composed.
///
/// Built with [`lazy`].
#[derive(Debug, Clone)]
pub struct Lazy<I>(I);

/// Wraps an iterator of children.
///
/// The iterator is drained eagerly at composition time; every produced item
/// goes through the same type check as directly supplied children.
///
/// ```
/// use aether_tags::html::{li, ul};
/// use aether_tags::lazy;
///
/// let mut list = ul(()).unwrap();
/// list.compose(lazy((1..=3).map(|n| li(()).unwrap().with(n).unwrap())))
/// 	.unwrap();
/// assert_eq!(list.render().as_str(), "<ul><li>1</li><li>2</li><li>3</li></ul>");
/// ```
pub fn lazy<I>(iter: I) -> Lazy<I>
where
	I: IntoIterator,
	I::Item: IntoChild,
{
	Lazy(iter)
}

impl<I> IntoChild for Lazy<I>
where
	I: IntoIterator,
	I::Item: IntoChild,
{
	fn into_child(self) -> Child {
		collect(self.0)
	}
}

fn collect<I>(items: I) -> Child
where
	I: IntoIterator,
	I::Item: IntoChild,
{
	let mut nodes = Vec::new();
	for item in items {
		item.into_child().flatten_into(&mut nodes);
	}
	Child::Many(nodes)
}

macro_rules! impl_into_child_for_tuples {
	($(($($name:ident),+)),* $(,)?) => {
		$(
			impl<$($name: IntoChild),+> IntoChild for ($($name,)+) {
				#[allow(non_snake_case)]
				fn into_child(self) -> Child {
					let ($($name,)+) = self;
					let mut nodes = Vec::new();
					$(
						$name.into_child().flatten_into(&mut nodes);
					)+
					Child::Many(nodes)
				}
			}
		)*
	};
}

impl_into_child_for_tuples!(
	(A),
	(A, B),
	(A, B, C),
	(A, B, C, D),
	(A, B, C, D, E),
	(A, B, C, D, E, F),
	(A, B, C, D, E, F, G),
	(A, B, C, D, E, F, G, H),
);
