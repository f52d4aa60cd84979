//! Tests for the lazy sequence helpers.

use std::cell::Cell;

use super::*;

#[test]
fn test_first_pulls_only_one_item() {
    let pulled = Cell::new(0);
    let first = (1..).inspect(|_| pulled.set(pulled.get() + 1)).first();
    assert_eq!(first, Some(1));
    assert_eq!(pulled.get(), 1);

    assert_eq!(std::iter::empty::<i32>().first(), None);
    assert_eq!(std::iter::empty::<i32>().first_or(7), 7);
}

#[test]
fn test_skip_last() {
    let kept: Vec<_> = (1..=5).skip_last(2).collect();
    assert_eq!(kept, vec![1, 2, 3]);

    let unchanged: Vec<_> = (1..=3).skip_last(0).collect();
    assert_eq!(unchanged, vec![1, 2, 3]);

    let nothing: Vec<_> = (1..=3).skip_last(5).collect();
    assert!(nothing.is_empty());
}

#[test]
fn test_skip_last_on_infinite_source() {
    // Works lazily: the delay is exactly n items
    let head: Vec<_> = (0..).skip_last(3).take(4).collect();
    assert_eq!(head, vec![0, 1, 2, 3]);
}

#[test]
fn test_groups_of_keeps_trailing_partial_group() {
    let groups: Vec<_> = [1, 2, 3, 4, 5].into_iter().groups_of(3).collect();
    assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);

    let exact: Vec<_> = (1..=4).groups_of(2).collect();
    assert_eq!(exact, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
#[should_panic(expected = "group size must be positive")]
fn test_groups_of_zero_panics() {
    let _ = (1..3).groups_of(0);
}

#[test]
fn test_windowed() {
    let windows: Vec<_> = [1, 2, 3, 4, 5].into_iter().windowed(3).collect();
    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);

    let too_short: Vec<_> = (1..=2).windowed(3).collect();
    assert!(too_short.is_empty());

    assert_eq!((1..=3).windowed(0).count(), 0);
}

#[test]
fn test_windowed_snapshots_are_independent() {
    let mut windows = (1..=4).windowed(2);
    let mut first = windows.next().unwrap();
    first.push(99);
    assert_eq!(windows.next(), Some(vec![2, 3]));
    assert_eq!(first, vec![1, 2, 99]);
}

#[test]
fn test_distinct() {
    let values: Vec<_> = [3, 1, 3, 2, 1].into_iter().distinct().collect();
    assert_eq!(values, vec![3, 1, 2]);

    let by_len: Vec<_> = ["a", "bb", "c", "dd", "eee"]
        .into_iter()
        .distinct_by(|s| s.len())
        .collect();
    assert_eq!(by_len, vec!["a", "bb", "eee"]);
}

#[test]
fn test_zip_stops_at_shorter() {
    let pairs: Vec<_> = (1..=3).zip("ab".chars()).collect();
    assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
}

#[test]
fn test_take_until_excludes_trigger() {
    let taken: Vec<_> = (1..).take_until(|&x| x * x > 10).collect();
    assert_eq!(taken, vec![1, 2, 3]);

    let pulled = Cell::new(0);
    let mut iter = (1..)
        .inspect(|_| pulled.set(pulled.get() + 1))
        .take_until(|&x| x == 2);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_take_every() {
    let every_third: Vec<_> = (0..10).take_every(3, 0).collect();
    assert_eq!(every_third, vec![0, 3, 6, 9]);

    let offset: Vec<_> = (0..10).take_every(4, 2).collect();
    assert_eq!(offset, vec![2, 6]);

    assert_eq!((0..10).take_every(0, 0).count(), 0);
}

#[test]
fn test_combinations_of() {
    let pairs: Vec<_> = ['a', 'b', 'c'].into_iter().combinations_of(2).collect();
    assert_eq!(
        pairs,
        vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]
    );
    assert_eq!((1..=5).combinations_of(3).count(), 10);
    assert_eq!((1..=2).combinations_of(3).count(), 0);
}

#[test]
fn test_to_map_sees_accumulator() {
    // Running sums per parity
    let sums = (1..=6).to_map(
        |x, _| x % 2,
        |x, acc| acc.get(&(x % 2)).copied().unwrap_or(0) + x,
    );
    assert_eq!(sums[&0], 2 + 4 + 6);
    assert_eq!(sums[&1], 1 + 3 + 5);
}

#[test]
fn test_count_frequencies() {
    let counts = "abracadabra".chars().count_frequencies();
    assert_eq!(counts[&'a'], 5);
    assert_eq!(counts[&'b'], 2);
    assert_eq!(counts[&'r'], 2);
    assert_eq!(counts[&'c'], 1);
    assert_eq!(counts.len(), 5);
}

#[test]
fn test_numeric_terminals_on_empty_input() {
    let empty = || std::iter::empty::<u64>();
    assert_eq!(empty().sum::<u64>(), 0);
    assert_eq!(empty().product::<u64>(), 1);
    assert_eq!(empty().lcm(), 1);
    assert_eq!(empty().min(), None);
    assert_eq!(empty().max(), None);
    assert_eq!(empty().max_by_key_first(|x| *x), None);
}

#[test]
fn test_lcm() {
    assert_eq!([2u64, 3, 4].into_iter().lcm(), 12);
    assert_eq!([7i64].into_iter().lcm(), 7);
}

#[test]
fn test_max_by_key_first_keeps_earliest_tie() {
    let words = ["bb", "a", "cc", "d"];
    assert_eq!(words.into_iter().max_by_key_first(|w| w.len()), Some("bb"));
    // std keeps the last one
    assert_eq!(words.into_iter().max_by_key(|w| w.len()), Some("cc"));

    let floats = [0.5, 2.5, 1.0];
    assert_eq!(floats.into_iter().max_by_key_first(|x| *x), Some(2.5));
}

#[test]
fn test_count_where_and_index_of() {
    assert_eq!((1..=10).count_where(|x| x % 3 == 0), 3);
    assert_eq!("hello".chars().index_of(&'l'), Some(2));
    assert_eq!("hello".chars().index_of(&'z'), None);
}

#[test]
fn test_pipe_composes_ad_hoc_stages() {
    fn evens(iter: impl Iterator<Item = u32>) -> impl Iterator<Item = u32> {
        iter.filter(|x| x % 2 == 0)
    }

    let total: u32 = (1u32..=10).pipe(evens).sum();
    assert_eq!(total, 30);
}

#[test]
fn test_single_pass() {
    let mut source = (1..=4).groups_of(2);
    let consumed: Vec<_> = source.by_ref().collect();
    assert_eq!(consumed.len(), 2);
    assert_eq!(source.next(), None);
}

#[test]
fn test_iterate_passes_index() {
    let values: Vec<_> = iterate(0usize, |x, idx| x + idx).take(5).collect();
    assert_eq!(values, vec![0, 0, 1, 3, 6]);
}
