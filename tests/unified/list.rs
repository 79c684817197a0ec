use crate::prelude::*;

#[test]
fn test_empty() {
  let list = List::new();
  assert!(list.is_empty());
  assert!(list.len() == 0);
  assert!(length(&list) == 0);
  assert!(list.capacity() == 0);
  assert!(list.peek_front().is_none());
  assert!(list.peek_back().is_none());
  assert!(list.iter().next().is_none());
}

#[test]
fn test_prepend_then_append_order() {
  let mut list = List::new();
  for p in [1, 2, 3] {
    list.prepend(p);
  }
  for a in [4, 5] {
    list.append(a);
  }
  assert!(values(&list) == [3, 2, 1, 4, 5]);
  assert!(list.peek_front() == Some(3));
  assert!(list.peek_back() == Some(5));
}

#[test]
fn test_append_to_empty_sets_head() {
  let mut list = List::new();
  list.append(7);
  assert!(list.peek_front() == Some(7));
  assert!(list.peek_back() == Some(7));
  list.prepend(6);
  list.append(8);
  assert!(values(&list) == [6, 7, 8]);
}

#[test]
fn test_remove_front() {
  let mut list = List::new();
  list.append(1);
  list.append(2);
  list.append(3);
  assert!(list.remove_front() == Ok(1));
  assert!(list.len() == 2);
  assert!(values(&list) == [2, 3]);
  assert!(list.remove_front() == Ok(2));
  assert!(list.remove_front() == Ok(3));
  assert!(list.is_empty());
  assert!(list.peek_back().is_none());
}

#[test]
fn test_remove_front_empty_leaves_list_unchanged() {
  let mut list = List::new();
  assert!(list.remove_front() == Err(Error::EmptyContainer));
  assert!(list.is_empty());
  list.append(1);
  assert!(list.remove_front() == Ok(1));
  assert!(list.remove_front() == Err(Error::EmptyContainer));
  list.append(2);
  assert!(values(&list) == [2]);
}

#[test]
fn test_vacated_slots_are_reused() {
  let mut list = List::with_capacity(4);
  let capacity = list.capacity();
  for i in 0 .. 4 {
    list.append(i);
  }
  for _ in 0 .. 1000 {
    let x = list.remove_front().unwrap();
    list.append(x);
  }
  assert!(list.capacity() == capacity);
  assert!(values(&list) == [0, 1, 2, 3]);

  let _ = list.remove_front();
  let _ = list.remove_front();
  list.prepend(10);
  list.prepend(11);
  assert!(list.capacity() == capacity);
  assert!(values(&list) == [11, 10, 2, 3]);
}

#[test]
fn test_reserve_counts_vacant_slots() {
  let mut list = List::with_capacity(8);
  let capacity = list.capacity();
  for i in 0 .. 8 {
    list.append(i);
  }
  for _ in 0 .. 4 {
    let _ = list.remove_front();
  }
  list.reserve(4);
  assert!(list.capacity() == capacity);
  list.extend([8, 9, 10, 11]);
  assert!(list.capacity() == capacity);
  assert!(values(&list) == [4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn test_clear() {
  let mut list: List = (0 .. 10).collect();
  let capacity = list.capacity();
  list.clear();
  assert!(list.is_empty());
  assert!(list.capacity() == capacity);
  list.append(1);
  assert!(values(&list) == [1]);
}

#[test]
fn test_reverse_method() {
  let mut list: List = (1 ..= 4).collect();
  list.reverse();
  assert!(values(&list) == [4, 3, 2, 1]);
  assert!(list.peek_back() == Some(1));
  list.append(0);
  assert!(values(&list) == [4, 3, 2, 1, 0]);
}

#[test]
fn test_into_iter() {
  let list: List = (1 ..= 3).collect();
  let mut iter = list.into_iter();
  assert!(iter.len() == 3);
  assert!(iter.next() == Some(1));
  assert!(iter.len() == 2);
  assert!(iter.collect::<Vec<_>>() == [2, 3]);
}

#[test]
fn test_iter_is_exact_and_fused() {
  let list: List = (1 ..= 3).collect();
  let mut iter = list.iter();
  assert!(iter.len() == 3);
  let _ = iter.next();
  assert!(iter.size_hint() == (2, Some(2)));
  let _ = iter.by_ref().count();
  assert!(iter.next().is_none());
  assert!(iter.next().is_none());
}

#[test]
fn test_equality() {
  let a: List = (1 ..= 3).collect();
  let mut b = List::new();
  b.append(2);
  b.append(3);
  b.prepend(1);
  assert!(a == b);
  b.append(4);
  assert!(a != b);
}

#[test]
fn test_print() {
  let mut list = List::new();
  list.append(-1);
  list.append(0);
  list.append(i32::MAX);
  let mut sink = String::new();
  list.print(&mut sink).unwrap();
  expect!["-1 0 2147483647"].assert_eq(&sink);
  expect!["[-1, 0, 2147483647]"].assert_eq(&format!("{:?}", list));
}
