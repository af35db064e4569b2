// Tests for the Seq container
use crate::Seq;

#[test]
fn test_push_and_len() {
    let mut seq = Seq::new();
    assert!(seq.is_empty());
    seq.push(1);
    seq.push(2);
    seq.push(3);
    assert_eq!(seq.len(), 3);
    assert!(!seq.is_empty());
}

#[test]
fn test_accessors() {
    let seq: Seq<i32> = vec![10, 20, 30].into();
    assert_eq!(seq.get(0), Some(&10));
    assert_eq!(seq.get(3), None);
    assert_eq!(seq.first(), Some(&10));
    assert_eq!(seq.last(), Some(&30));
    assert_eq!(seq[1], 20);
    assert_eq!(seq.as_slice(), [10, 20, 30]);

    let empty: Seq<i32> = Seq::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn test_ordering_is_preserved() {
    let seq: Seq<char> = "dcba".chars().collect();
    let collected: Vec<char> = seq.iter().copied().collect();
    assert_eq!(collected, ['d', 'c', 'b', 'a']);
}

#[test]
fn test_into_iterator() {
    let seq: Seq<i32> = vec![1, 2, 3].into();
    let mut sum = 0;
    for v in &seq {
        sum += v;
    }
    assert_eq!(sum, 6);

    let doubled: Vec<i32> = seq.into_iter().map(|v| v * 2).collect();
    assert_eq!(doubled, [2, 4, 6]);
}

#[test]
fn test_extend_and_into_vec() {
    let mut seq = Seq::with_capacity(4);
    seq.extend([1, 2]);
    seq.extend([3, 4]);
    assert_eq!(seq.into_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_equality() {
    let a: Seq<i32> = vec![1, 2].into();
    let b: Seq<i32> = [1, 2].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, vec![2, 1].into());
}
