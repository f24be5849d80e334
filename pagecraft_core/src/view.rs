// Copyright 2026 the Pagecraft Authors
// SPDX-License-Identifier: Apache-2.0

/// A view tree whose messages can be re-targeted.
///
/// This is the only requirement Pagecraft places on the rendering library: a view
/// producing `From` messages can be turned into a structurally identical view producing
/// `To` messages. Pages render in terms of their own message type, and the
/// [`PageRecipe`](crate::PageRecipe) maps the result into the application's
/// [`UiMsg`](crate::UiMsg).
///
/// The mapping function is `Clone` so that implementations can hand a copy to every
/// event handler in the tree.
///
/// # Examples
///
/// ```
/// use pagecraft_core::MapMessage;
///
/// enum Node<Msg> {
///     Text(String),
///     Button(String, Msg),
///     Column(Vec<Node<Msg>>),
/// }
///
/// impl<From, To> MapMessage<From, To> for Node<From> {
///     type Output = Node<To>;
///
///     fn map_message(self, f: impl Fn(From) -> To + Clone + 'static) -> Node<To> {
///         match self {
///             Node::Text(text) => Node::Text(text),
///             Node::Button(label, msg) => Node::Button(label, f(msg)),
///             Node::Column(children) => Node::Column(
///                 children
///                     .into_iter()
///                     .map(|child| child.map_message(f.clone()))
///                     .collect(),
///             ),
///         }
///     }
/// }
/// ```
pub trait MapMessage<From, To> {
    /// The view tree type which produces `To` messages.
    type Output;

    /// Turn `self` into a view which produces `f(msg)` wherever `self` would produce `msg`.
    fn map_message(self, f: impl Fn(From) -> To + Clone + 'static) -> Self::Output;
}
