use compare::{natural, Compare};
use persistent_tree::{Error, Set};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn sample() -> Set<i32> {
    let mut s = Set::new();
    for item in [5, 3, 8, 1] { s.insert(item); }
    s
}

#[test]
fn erase_from_copy_leaves_original() {
    let s = sample();

    let mut c = s.find(&3);
    c.move_next();
    assert_eq!(c.get(), Some(&5));

    let mut t = s.clone();
    let c = t.find(&3);
    t.erase(c);

    assert!(t.find(&3) == t.end());
    assert_eq!(t.iter().cloned().collect::<Vec<_>>(), [1, 5, 8]);
    assert_eq!(s.find(&3).get(), Some(&3));
    assert_eq!(s.iter().cloned().collect::<Vec<_>>(), [1, 3, 5, 8]);
}

#[test]
fn postfix_stepping() {
    let s = sample();
    let mut c = s.begin();

    let old = c.post_next();
    assert_eq!(old.get(), Some(&1));
    assert_eq!(c.get(), Some(&3));

    let old = c.post_prev();
    assert_eq!(old.get(), Some(&3));
    assert_eq!(c.get(), Some(&1));

    let mut c = s.find(&8);
    assert_eq!(c.post_next().get(), Some(&8));
    assert!(c.is_end());
    assert!(c.post_prev().is_end());
    assert_eq!(c.get(), Some(&8));
}

#[test]
fn postfix_walk() {
    let s = sample();

    let mut items = vec![];
    let mut c = s.begin();
    while !c.is_end() { items.push(*c.post_next().item()); }
    assert_eq!(items, [1, 3, 5, 8]);

    let mut items = vec![];
    let mut c = s.end();
    while c != s.begin() { c.post_prev(); items.push(*c.item()); }
    assert_eq!(items, [8, 5, 3, 1]);
}

#[test]
#[should_panic(expected = "cannot move past the end")]
fn post_next_past_end_panics() {
    sample().end().post_next();
}

#[test]
fn empty_set_begin_is_end() {
    let s: Set<i32> = Set::new();

    assert!(s.begin() == s.end());
    assert!(s.begin().is_end());
    assert_eq!(s.begin().get(), None);
    assert_eq!(s.iter().next(), None);
}

#[test]
fn end_positions_are_equal() {
    let s = sample();
    let mut t = s.clone();
    t.insert(10);

    assert!(s.end() == t.end());
    assert!(s.find(&8).succ() == s.end());
    assert!(s.find(&4) == s.end());
}

#[test]
fn cursors_compare_by_position() {
    let s = sample();
    let mut t = s.clone();
    t.insert(4);

    // 1 is shared by both versions; 3 and 5 were copied on the path to 4
    assert!(s.find(&1) == t.find(&1));
    assert!(s.find(&8) == t.find(&8));
    assert!(s.find(&3) != t.find(&3));
    assert!(s.find(&5) != t.find(&5));
    assert!(s.find(&3) != s.find(&5));
}

#[test]
fn prev_from_end_is_max() {
    let s = sample();
    let mut c = s.end();

    c.move_prev();
    assert_eq!(c.get(), Some(&8));
    assert_eq!(s.last(), Some(&8));
}

#[test]
fn erase_with_cursor_from_older_version() {
    let mut s = sample();
    let stale = s.find(&5);

    s.insert(4);
    s.insert(9);
    s.erase(stale.clone());

    assert!(!s.contains(&5));
    assert_eq!(s.iter().cloned().collect::<Vec<_>>(), [1, 3, 4, 8, 9]);
    assert_eq!(stale.get(), Some(&5));
    assert_eq!(stale.succ().get(), Some(&8));
}

#[test]
fn try_erase_reports_errors() {
    let mut s = sample();
    let c = s.find(&3);

    assert_eq!(s.try_erase(c.clone()), Ok(()));
    assert_eq!(s.try_erase(c), Err(Error::NotMember));
    assert_eq!(s.try_erase(s.end()), Err(Error::EraseEnd));
    assert_eq!(s.len(), 3);
}

#[test]
fn try_move_reports_errors() {
    let s = sample();

    let mut c = s.end();
    assert_eq!(c.try_move_next().err(), Some(Error::PastEnd));
    assert!(c.is_end());

    let mut c = s.begin();
    assert_eq!(c.try_move_prev().err(), Some(Error::BeforeBegin));
    assert_eq!(c.get(), Some(&1));

    let mut c = Set::<i32>::new().end();
    assert_eq!(c.try_move_prev().err(), Some(Error::BeforeBegin));
}

#[test]
#[should_panic(expected = "cannot erase the end position")]
fn erase_end_panics() {
    let mut s = sample();
    let end = s.end();
    s.erase(end);
}

#[test]
#[should_panic(expected = "not a member")]
fn erase_missing_panics() {
    let mut s = sample();
    let c = s.find(&3);
    s.remove(&3);
    s.erase(c);
}

#[test]
#[should_panic(expected = "cannot dereference the end position")]
fn deref_end_panics() {
    sample().end().item();
}

#[test]
#[should_panic(expected = "cannot move past the end")]
fn move_past_end_panics() {
    sample().end().move_next();
}

#[test]
#[should_panic(expected = "cannot move before the first item")]
fn move_before_begin_panics() {
    sample().begin().move_prev();
}

#[test]
fn shuffled_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for n in [0, 1, 2, 10, 100, 500] {
        let mut items: Vec<u32> = (0..n).collect();
        items.shuffle(&mut rng);

        let mut s = Set::new();
        for &item in &items { assert!(s.insert(item).1); }
        assert_eq!(s.len(), n as usize);

        let mut ascending = vec![];
        let mut c = s.begin();
        while !c.is_end() {
            ascending.push(*c.item());
            c.move_next();
        }
        assert_eq!(ascending, (0..n).collect::<Vec<_>>());

        let mut descending = vec![];
        let mut c = s.end();
        while let Ok(c) = c.try_move_prev() { descending.push(*c.item()); }
        assert_eq!(descending, (0..n).rev().collect::<Vec<_>>());

        items.shuffle(&mut rng);
        let versions: Vec<_> = items.iter().map(|&item| {
            let c = s.find(&item);
            s.erase(c);
            s.clone()
        }).collect();

        assert!(s.is_empty());
        for (i, version) in versions.iter().enumerate() {
            assert_eq!(version.len(), items.len() - i - 1);
            assert!(items[..=i].iter().all(|item| !version.contains(item)));
            assert!(items[i + 1..].iter().all(|item| version.contains(item)));
        }
    }
}

#[test]
fn sorted_insertion() {
    let mut s = Set::new();
    for item in 0..1000u32 { s.insert(item); }

    assert_eq!(s.len(), 1000);
    assert_eq!(s.find(&999).pred().get(), Some(&998));
    assert!(s.find(&999).succ().is_end());
    assert_eq!(s.iter().rev().next(), Some(&999));
}

#[test]
fn deep_versions_on_a_small_stack() {
    const N: u32 = 4_000;

    let deep = std::thread::Builder::new().stack_size(64 * 1024).spawn(|| {
        let mut s = Set::new();
        for item in 0..N { s.insert(item); }

        let old = s.clone();
        let held = s.find(&(N - 1));
        for item in (0..N).step_by(2) { s.remove(&item); }
        let c = s.find(&(N - 1));
        s.erase(c);

        assert_eq!(s.len(), N as usize / 2 - 1);
        assert_eq!(s.last(), Some(&(N - 3)));
        assert!(s.iter().cloned().eq((1..N - 1).step_by(2)));
        assert!(s.clone().into_iter().rev().eq((1..N - 1).step_by(2).rev()));

        assert_eq!(old.len(), N as usize);
        assert_eq!(held.pred().get(), Some(&(N - 2)));
        assert!(held.succ().is_end());

        let mut partial = old.clone().into_iter();
        assert_eq!(partial.next(), Some(0));
        assert_eq!(partial.next_back(), Some(N - 1));
        drop(partial);
        drop(old);
        drop(held);
        s.clear();
        assert!(s.is_empty());
    }).unwrap();

    deep.join().unwrap();
}

#[test]
fn reversed_comparator() {
    let mut s = Set::with_cmp(natural().rev());
    for item in [5, 3, 8, 1] { s.insert(item); }

    assert!(s.cmp().compares_lt(&8, &5));
    assert_eq!(s.begin().get(), Some(&8));
    assert_eq!(s.find(&5).succ().get(), Some(&3));
    assert_eq!(s.lower_bound(&4).get(), Some(&3));
    assert_eq!(s.upper_bound(&3).get(), Some(&1));
    assert_eq!(s.iter().cloned().collect::<Vec<_>>(), [8, 5, 3, 1]);
}

#[test]
fn extreme_values_are_storable() {
    let mut s = Set::new();
    s.insert(i32::MAX);
    s.insert(i32::MIN);
    s.insert(0);

    assert_eq!(s.find(&i32::MAX).get(), Some(&i32::MAX));
    assert!(s.find(&i32::MAX).succ() == s.end());
    assert_eq!(s.end().pred().get(), Some(&i32::MAX));
}

#[test]
fn bounds() {
    let s = sample();

    assert_eq!(s.lower_bound(&3).get(), Some(&3));
    assert_eq!(s.lower_bound(&4).get(), Some(&5));
    assert_eq!(s.upper_bound(&3).get(), Some(&5));
    assert_eq!(s.upper_bound(&0).get(), Some(&1));
    assert!(s.lower_bound(&9).is_end());
    assert!(s.upper_bound(&8).is_end());
}

#[test]
fn cursor_outlives_set() {
    let c = {
        let s = sample();
        s.find(&5)
    };

    assert_eq!(c.get(), Some(&5));
    assert_eq!(c.pred().get(), Some(&3));
    assert_eq!(c.succ().get(), Some(&8));
    assert_eq!(format!("{:?}", c), "Cursor(5)");
}

#[test]
fn set_formatting() {
    assert_eq!(format!("{:?}", sample()), "{1, 3, 5, 8}");
    assert_eq!(format!("{:?}", Set::<i32>::new()), "{}");
}
