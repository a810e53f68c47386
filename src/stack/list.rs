use super::*;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  elem: T,
  next: Link<T>,
}

/// A list-based `Stack<T>`.
///
/// Keeps an explicit element count so `size` is O(1).
pub struct ListStack<T> {
  head: Link<T>,
  count: usize,
}

impl<T> Stack<T> for ListStack<T> {
  fn new() -> Self {
    Self {
      head: None,
      count: 0,
    }
  }

  fn push(&mut self, elem: T) {
    let new_node = Box::new(Node {
      elem,
      next: self.head.take(),
    });

    self.head = Some(new_node);
    self.count += 1;
  }

  fn pop(&mut self) -> Result<T, StackError> {
    self.head.take().map(|node| {
      let node = *node;
      self.head = node.next;
      self.count -= 1;
      node.elem
    }).ok_or(StackError::NoSuchElement)
  }

  fn peek(&self) -> Result<&T, StackError> {
    self.head.as_ref().map(|node| &node.elem).ok_or(StackError::NoSuchElement)
  }

  fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  fn size(&self) -> usize {
    self.count
  }
}
