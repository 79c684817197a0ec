#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::vec::Vec;
use core::alloc::Layout;
use core::fmt;
use core::iter::FusedIterator;

/// An error returned by a list operation whose precondition does not hold.
///
/// The list is left exactly as it was before the failed call.

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
  /// The operation needs at least one element, but the list is empty.

  #[error("oxlist: the list is empty")]
  EmptyContainer,

  /// The requested offset does not name an element of the list.

  #[error("oxlist: index {index} is out of range for a list of length {len}")]
  IndexOutOfRange {
    /// The offset that was requested.
    index: isize,
    /// The length of the list at the time of the request.
    len: usize,
  },
}

/// The parent allocator failed to provide memory for new nodes.

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("oxlist: memory allocation failed")]
pub struct AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod utils;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly linked list of `i32` values.
///
/// Nodes are stored in a node arena owned by the list and linked by index.
/// Slots vacated by [`remove_front`](Self::remove_front) are reused by later
/// insertions. Cloning walks the chain once and produces an independent,
/// compact copy.

pub struct List<A: Allocator = Global> {
  nodes: Vec<Node, A>,
  head: Link,
  tail: Link,
  free: Link,
  len: usize,
}

/// An iterator over the values of a [`List`], front to back.

#[derive(Clone)]
pub struct Iter<'a> {
  nodes: &'a [Node],
  next: Link,
  len: usize,
}

/// An owning iterator over the values of a [`List`], front to back.

pub struct IntoIter<A: Allocator = Global>(List<A>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link = Option<usize>;

// A slot of the node arena. A vacant slot keeps its stale value and uses
// `next` to link the free list.

#[derive(Clone, Copy)]
struct Node {
  value: i32,
  next: Link,
}

enum Failure {
  ParentAllocatorFailed(Layout),
  TooLarge,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Failure) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// CONSTANTS                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

const MAX_NODES: usize = isize::MAX as usize / size_of::<Node>();

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Failure) -> Result<T, Self> {
    match e {
      Failure::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
      Failure::TooLarge =>
        // The node arena would not fit in the address space, even in the
        // absence of physical constraints.
        panic!("oxlist: attempted to grow a list beyond the addressable size!"),
    }
  }
}

impl Fail for AllocError {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Failure) -> Result<T, Self> {
    match e {
      Failure::ParentAllocatorFailed(layout) =>
        log::debug!("oxlist: parent allocator refused {} bytes", layout.size()),
      Failure::TooLarge =>
        log::debug!("oxlist: node arena would exceed the addressable size"),
    }
    Err(AllocError)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node arena                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(never)]
#[cold]
fn grow<A, E>(nodes: &mut Vec<Node, A>, additional: usize) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let Some(n) = nodes.len().checked_add(additional) else {
    return E::fail(Failure::TooLarge);
  };

  if n > MAX_NODES {
    return E::fail(Failure::TooLarge);
  }

  if nodes.try_reserve(additional).is_err() {
    let Ok(layout) = Layout::array::<Node>(n) else {
      return E::fail(Failure::TooLarge);
    };
    return E::fail(Failure::ParentAllocatorFailed(layout));
  }

  log::trace!("oxlist: node arena grew to {} slots", nodes.capacity());

  Ok(())
}

fn reserve<A, E>(list: &mut List<A>, additional: usize) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  // Slots on the free list count towards the reservation.
  let vacant = list.nodes.len() - list.len;
  let needed = additional.saturating_sub(vacant);

  if list.nodes.capacity() - list.nodes.len() >= needed {
    return Ok(());
  }

  grow(&mut list.nodes, needed)
}

#[inline(always)]
fn alloc_node<A, E>(list: &mut List<A>, node: Node) -> Result<usize, E>
where
  A: Allocator,
  E: Fail,
{
  if let Some(i) = list.free {
    let slot = &mut list.nodes[i];
    list.free = slot.next;
    *slot = node;
    return Ok(i);
  }

  if list.nodes.len() == list.nodes.capacity() {
    grow::<A, E>(&mut list.nodes, 1)?;
  }

  // NB: Capacity was checked above, so this never reallocates.

  let i = list.nodes.len();
  list.nodes.push(node);
  Ok(i)
}

fn prepend<A, E>(list: &mut List<A>, value: i32) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let next = list.head;
  let i = alloc_node::<A, E>(list, Node { value, next })?;

  list.head = Some(i);

  if list.tail.is_none() {
    list.tail = Some(i);
  }

  list.len += 1;
  Ok(())
}

fn append<A, E>(list: &mut List<A>, value: i32) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let i = alloc_node::<A, E>(list, Node { value, next: None })?;

  match list.tail {
    Some(t) => list.nodes[t].next = Some(i),
    None => list.head = Some(i),
  }

  list.tail = Some(i);
  list.len += 1;
  Ok(())
}

fn copy<A, E>(source: &List<A>) -> Result<List<A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let mut list = List::new_in(source.allocator().clone());
  reserve::<A, E>(&mut list, source.len)?;

  for value in source {
    append::<A, E>(&mut list, value)?;
  }

  Ok(list)
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl List<Global> {
  /// Creates an empty list backed by the global allocator. Does not allocate.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates an empty list with room for `capacity` nodes.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_in(capacity, Global)
  }

  /// Creates an empty list with room for `capacity` nodes.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
    Self::try_with_capacity_in(capacity, Global)
  }
}

impl<A: Allocator> List<A> {
  /// Creates an empty list whose nodes are allocated by `allocator`. Does not
  /// allocate.

  pub fn new_in(allocator: A) -> Self {
    Self {
      nodes: Vec::new_in(allocator),
      head: None,
      tail: None,
      free: None,
      len: 0,
    }
  }

  /// Creates an empty list with room for `capacity` nodes, allocated by
  /// `allocator`.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    let mut list = Self::new_in(allocator);
    unwrap(reserve(&mut list, capacity));
    list
  }

  /// Creates an empty list with room for `capacity` nodes, allocated by
  /// `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self, AllocError> {
    let mut list = Self::new_in(allocator);
    reserve::<A, AllocError>(&mut list, capacity)?;
    Ok(list)
  }

  /// A reference to the parent allocator.

  pub fn allocator(&self) -> &A {
    self.nodes.allocator()
  }

  /// Whether the list has no nodes.

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The number of nodes in the list.

  pub fn len(&self) -> usize {
    self.len
  }

  /// The number of nodes the list can hold without reallocating its arena.

  pub fn capacity(&self) -> usize {
    self.nodes.capacity()
  }

  /// Reserves room for at least `additional` more nodes.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn reserve(&mut self, additional: usize) {
    unwrap(reserve(self, additional))
  }

  /// Reserves room for at least `additional` more nodes.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is
  /// unchanged.

  pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
    reserve(self, additional)
  }

  /// Inserts `value` at the front of the list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn prepend(&mut self, value: i32) {
    unwrap(prepend(self, value))
  }

  /// Inserts `value` at the front of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is
  /// unchanged.

  pub fn try_prepend(&mut self, value: i32) -> Result<(), AllocError> {
    prepend(self, value)
  }

  /// Inserts `value` at the back of the list.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn append(&mut self, value: i32) {
    unwrap(append(self, value))
  }

  /// Inserts `value` at the back of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is
  /// unchanged.

  pub fn try_append(&mut self, value: i32) -> Result<(), AllocError> {
    append(self, value)
  }

  /// Removes the front node and returns its value.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EmptyContainer`] if the list is empty.

  pub fn remove_front(&mut self) -> Result<i32, Error> {
    let Some(i) = self.head else {
      return Err(Error::EmptyContainer);
    };

    let node = self.nodes[i];

    self.len -= 1;

    if self.len == 0 {
      self.clear();
      return Ok(node.value);
    }

    self.head = node.next;
    self.nodes[i].next = self.free;
    self.free = Some(i);

    Ok(node.value)
  }

  /// The value at the front of the list.

  pub fn peek_front(&self) -> Option<i32> {
    self.head.map(|i| self.nodes[i].value)
  }

  /// The value at the back of the list.

  pub fn peek_back(&self) -> Option<i32> {
    self.tail.map(|i| self.nodes[i].value)
  }

  /// Removes every node, keeping the arena's capacity.

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.head = None;
    self.tail = None;
    self.free = None;
    self.len = 0;
  }

  /// Reverses the order of the nodes in place by relinking them.

  pub fn reverse(&mut self) {
    let mut prev = None;
    let mut next = self.head;

    while let Some(i) = next {
      let node = &mut self.nodes[i];
      next = node.next;
      node.next = prev;
      prev = Some(i);
    }

    self.tail = self.head;
    self.head = prev;
  }

  /// An iterator over the values, front to back.

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      nodes: &self.nodes,
      next: self.head,
      len: self.len,
    }
  }

  /// Writes the values, front to back and separated by single spaces, to
  /// `sink`.

  pub fn print<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
    let mut values = self.iter();

    if let Some(value) = values.next() {
      write!(sink, "{value}")?;
      for value in values {
        write!(sink, " {value}")?;
      }
    }

    Ok(())
  }
}

impl<A: Allocator + Clone> List<A> {
  /// Makes an independent deep copy of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_clone(&self) -> Result<Self, AllocError> {
    copy(self)
  }

  /// Replaces the contents of the list with a deep copy of `source`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is
  /// unchanged.

  pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
    if self.nodes.capacity() < source.len {
      *self = copy::<A, AllocError>(source)?;
      return Ok(());
    }

    self.clear();

    for value in source {
      append::<A, AllocError>(self, value)?;
    }

    Ok(())
  }
}

impl<A: Allocator + Clone> Clone for List<A> {
  fn clone(&self) -> Self {
    unwrap(copy(self))
  }

  fn clone_from(&mut self, source: &Self) {
    self.clear();
    unwrap(reserve(self, source.len));

    for value in source {
      unwrap(append(self, value));
    }
  }
}

impl Default for List<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator, B: Allocator> PartialEq<List<B>> for List<A> {
  fn eq(&self, other: &List<B>) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<A: Allocator> Eq for List<A> { }

impl<A: Allocator> fmt::Debug for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<A: Allocator> fmt::Display for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.print(f)
  }
}

impl FromIterator<i32> for List<Global> {
  fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<A: Allocator> Extend<i32> for List<A> {
  fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
    let iter = iter.into_iter();
    self.reserve(iter.size_hint().0);

    for value in iter {
      self.append(value);
    }
  }
}

impl<'a, A: Allocator> IntoIterator for &'a List<A> {
  type Item = i32;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl<A: Allocator> IntoIterator for List<A> {
  type Item = i32;
  type IntoIter = IntoIter<A>;

  fn into_iter(self) -> IntoIter<A> {
    IntoIter(self)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a> Iterator for Iter<'a> {
  type Item = i32;

  #[inline(always)]
  fn next(&mut self) -> Option<i32> {
    let node = &self.nodes[self.next?];
    self.next = node.next;
    self.len -= 1;
    Some(node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a> ExactSizeIterator for Iter<'a> { }

impl<'a> FusedIterator for Iter<'a> { }

impl<'a> fmt::Debug for Iter<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").field(&self.len).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IntoIter                                                                   //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<A: Allocator> Iterator for IntoIter<A> {
  type Item = i32;

  fn next(&mut self) -> Option<i32> {
    self.0.remove_front().ok()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.0.len, Some(self.0.len))
  }
}

impl<A: Allocator> ExactSizeIterator for IntoIter<A> { }

impl<A: Allocator> FusedIterator for IntoIter<A> { }

impl<A: Allocator> fmt::Debug for IntoIter<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.0).finish()
  }
}
