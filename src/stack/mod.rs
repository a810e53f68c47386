//! Stack implementations
//!
//! This module provides two sequential stacks: an array-based
//! `ArrayStack` and a linked-list-based `ListStack`. The `ListStack` is
//! based on [this blog post](http://cglab.ca/~abeinges/blah/too-many-lists/book/).
//!
//! Both stacks implement the `Stack<T>` trait and behave identically;
//! they differ only in their backing storage. Neither is synchronized:
//! sharing one instance between threads requires external
//! synchronization.

mod array;
mod list;

pub use self::array::ArrayStack;
pub use self::list::ListStack;

use thiserror::Error;

/// The error returned when a read or remove targets an element that
/// does not exist.
///
/// Compare it by value (`==` or a `match` on the variant), not by its
/// `Display` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
  /// The stack holds no elements, so there is no top to read or remove.
  #[error("no such element")]
  NoSuchElement,
}

/// The `Stack<T>` abstract data type.
///
/// The top of the stack is the most recently pushed element not yet
/// popped. Implementations grow without bound and keep `size()` equal
/// to the number of elements held at all times.
pub trait Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the top of the stack.
  fn push(&mut self, elem: T);

  /// Removes and returns the top element.
  ///
  /// Fails with `StackError::NoSuchElement` on an empty stack, leaving
  /// the stack unchanged.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the top element without removing it.
  ///
  /// Fails with `StackError::NoSuchElement` on an empty stack.
  fn peek(&self) -> Result<&T, StackError>;

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;
}
