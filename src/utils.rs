//! Algorithms over a [`List`].
//!
//! These only use the public API of [`List`].

use allocator_api2::alloc::Allocator;
use crate::Error;
use crate::List;

/// The number of nodes in the list.

pub fn length<A: Allocator>(list: &List<A>) -> usize {
  list.iter().fold(0, |n, _| n + 1)
}

/// The sum of the values in the list, or `0` if it is empty.

pub fn sum<A: Allocator>(list: &List<A>) -> i64 {
  list.iter().map(i64::from).sum()
}

/// Whether some node of the list holds `value`.

pub fn contains<A: Allocator>(list: &List<A>, value: i32) -> bool {
  list.iter().any(|x| x == value)
}

/// Reverses the list in place.

pub fn reverse<A: Allocator>(list: &mut List<A>) {
  list.reverse()
}

/// The value `n` positions before the end of the list, where `0` names the
/// last value.
///
/// The list is walked once, with a leading cursor `n + 1` nodes ahead of a
/// trailing one.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `n` is negative or not less than the
/// length of the list.

pub fn nth_from_end<A: Allocator>(list: &List<A>, n: isize) -> Result<i32, Error> {
  let out_of_range = || Error::IndexOutOfRange { index: n, len: list.len() };

  let Ok(k) = usize::try_from(n) else {
    return Err(out_of_range());
  };

  let mut lead = list.iter();

  for _ in 0 ..= k {
    if lead.next().is_none() {
      return Err(out_of_range());
    }
  }

  let mut trail = list.iter();

  for _ in lead {
    let _: _ = trail.next();
  }

  trail.next().ok_or_else(out_of_range)
}
