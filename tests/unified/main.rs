#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

mod list;

mod prelude {
  pub(crate) use expect_test::expect;
  pub(crate) use oxlist::AllocError;
  pub(crate) use oxlist::Error;
  pub(crate) use oxlist::List;
  pub(crate) use oxlist::utils::contains;
  pub(crate) use oxlist::utils::length;
  pub(crate) use oxlist::utils::nth_from_end;
  pub(crate) use oxlist::utils::reverse;
  pub(crate) use oxlist::utils::sum;

  pub(crate) fn values(list: &List<impl allocator_api2::alloc::Allocator>) -> Vec<i32> {
    list.iter().collect()
  }
}
