use std::process::ExitCode;
use oxlist::List;
use oxlist::utils::contains;
use oxlist::utils::length;
use oxlist::utils::nth_from_end;
use oxlist::utils::reverse;
use oxlist::utils::sum;

struct Report {
  failed: usize,
}

impl Report {
  fn check(&mut self, name: &str, ok: bool) {
    print!("{} {}\n", if ok { "✓" } else { "✗" }, name);
    if ! ok { self.failed = self.failed + 1; }
  }
}

fn basic_operations(r: &mut Report) {
  print!("\n=== Basic Operations ===\n");

  let mut list = List::new();
  r.check("empty list is empty", list.is_empty());

  list.prepend(1);
  r.check("list not empty after prepend", ! list.is_empty());

  list.append(2);
  list.append(3);
  print!("list after append: {}\n", list);

  r.check("remove_front returns the head", list.remove_front() == Ok(1));
}

fn copy_operations(r: &mut Report) {
  print!("\n=== Copy Operations ===\n");

  let mut source = List::new();
  source.append(1);
  source.append(2);
  source.append(3);

  let first = source.clone();
  r.check("clone has the same length", length(&first) == length(&source));

  let mut second = List::new();
  second.clone_from(&source);
  r.check("clone_from has the same length", length(&second) == length(&source));

  source.append(4);
  r.check("copies are independent", length(&first) == 3 && length(&second) == 3);
}

fn utility_functions(r: &mut Report) {
  print!("\n=== Utility Functions ===\n");

  let mut list = List::new();
  list.append(1);
  list.append(2);
  list.append(3);

  r.check("length", length(&list) == 3);
  r.check("sum", sum(&list) == 6);
  r.check("contains", contains(&list, 2) && ! contains(&list, 4));

  reverse(&mut list);
  r.check("reverse", list.remove_front() == Ok(3));

  list.append(4);
  list.append(5);
  r.check("nth_from_end", nth_from_end(&list, 0) == Ok(5) && nth_from_end(&list, 2) == Ok(1));
}

fn edge_cases(r: &mut Report) {
  print!("\n=== Edge Cases ===\n");

  let mut empty = List::new();
  r.check("remove_front fails on an empty list", empty.remove_front().is_err());
  r.check("nth_from_end fails on an invalid index", nth_from_end(&empty, 0).is_err());
  r.check("nth_from_end fails on a negative index", nth_from_end(&empty, -1).is_err());

  let mut list = List::new();
  list.append(1);
  list = list.clone();
  r.check("reassignment from a copy of itself", length(&list) == 1);
}

fn memory_management(r: &mut Report) {
  print!("\n=== Memory Management ===\n");

  let mut list = List::new();
  for i in 0 .. 1000 {
    list.append(i);
  }
  r.check("large list creation", length(&list) == 1000);
}

fn main() -> ExitCode {
  print!("Starting linked list checks\n");

  let mut r = Report { failed: 0 };

  basic_operations(&mut r);
  copy_operations(&mut r);
  utility_functions(&mut r);
  edge_cases(&mut r);
  memory_management(&mut r);

  if r.failed != 0 {
    print!("\n{} check(s) failed\n", r.failed);
    return ExitCode::FAILURE;
  }

  print!("\nAll checks passed!\n");
  ExitCode::SUCCESS
}
