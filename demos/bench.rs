use std::time::Instant;
use std::hint;
use oxlist::List;

const COUNT: usize = 10_000_000;

fn timeit<A, F>(f: F) -> f64 where F: FnOnce() -> A {
  let start = Instant::now();
  let _: A = hint::black_box(f());
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F, A>(name: &str, f: F) where F: FnOnce(usize) -> A {
  let elapsed = timeit(|| f(hint::black_box(COUNT)));
  print!("{:25} {:.3} ns\n", name, elapsed / (COUNT as f64));
}

#[inline(never)]
fn bench_append(count: usize) -> i64 {
  let mut list = List::new();
  for i in 0 .. count {
    list.append(i as i32);
  }
  oxlist::utils::sum(&list)
}

#[inline(never)]
fn bench_append_bumpalo(count: usize) -> i64 {
  let bump = bumpalo::Bump::new();
  let mut list = List::new_in(&bump);
  for i in 0 .. count {
    list.append(i as i32);
  }
  oxlist::utils::sum(&list)
}

#[inline(never)]
fn bench_churn(count: usize) -> usize {
  let mut list = List::with_capacity(64);
  for i in 0 .. 64 {
    list.prepend(i);
  }
  for _ in 0 .. count {
    if let Ok(x) = list.remove_front() {
      list.append(x);
    }
  }
  list.capacity()
}

#[inline(never)]
fn bench_reverse(count: usize) -> Option<i32> {
  let mut list: List = (0 .. count as i32).collect();
  list.reverse();
  list.peek_front()
}

fn main() {
  run_bench("append (global)", bench_append);
  run_bench("append (bumpalo)", bench_append_bumpalo);
  run_bench("remove_front + append", bench_churn);
  run_bench("reverse", bench_reverse);
}
