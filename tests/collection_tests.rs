use graphwalk::collections::{difference, intersection, is_equal, is_subset, union, ByKey};
use graphwalk::{Element, List, Queue, Set};

fn set_of(values: &[i32]) -> Set<'static, i32> {
    let mut set = Set::new();
    for &v in values {
        set.insert(v);
    }
    set
}

fn sorted<Q>(set: &Set<'_, i32, Q>) -> Vec<i32> {
    let mut values: Vec<i32> = set.iter().copied().collect();
    values.sort_unstable();
    values
}

#[test]
fn test_list_remove_from_empty_is_noop() {
    let mut list: List<'_, u8> = List::new();
    assert!(list.remove(None).is_none());
    assert_eq!(list.len(), 0);
    assert!(list.validate_invariants());
}

#[test]
fn test_list_remove_after_tail_is_noop() {
    let mut list = List::new();
    list.push_back(1);
    let tail = list.push_back(2);
    assert!(list.remove(Some(tail)).is_none());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_list_remove_with_foreign_node_is_noop() {
    let mut other = List::new();
    let foreign = other.push_back(9);
    let mut list = List::new();
    list.push_back(1);
    list.push_back(2);
    assert!(list.remove(Some(foreign)).is_none());
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_list_insert_twice_yields_two() {
    let mut list = List::new();
    list.insert(None, 'e');
    list.insert(None, 'e');
    assert_eq!(list.len(), 2);
}

#[test]
fn test_list_clear_drains_everything() {
    let shared = String::from("shared");
    let mut list = List::new();
    list.push_back(String::from("owned"));
    list.push_back_ref(&shared);
    list.clear();
    assert!(list.is_empty());
    assert!(list.head().is_none() && list.tail().is_none());
    assert!(list.ownership().is_empty());
    assert_eq!(shared, "shared");
}

#[test]
fn test_list_removed_element_keeps_its_origin() {
    let borrowed = 5;
    let mut list = List::new();
    list.push_back(4);
    list.push_back_ref(&borrowed);

    match list.pop_front() {
        Some(Element::Owned(value)) => assert_eq!(value, 4),
        other => panic!("expected an adopted element, got {other:?}"),
    }
    match list.pop_front() {
        Some(Element::Borrowed(value)) => assert!(std::ptr::eq(value, &borrowed)),
        other => panic!("expected a borrowed element, got {other:?}"),
    }
}

#[test]
fn test_element_moves_between_containers() {
    let mut source = List::new();
    source.push_back(String::from("moved"));
    let element = source.pop_front().unwrap();

    let mut target = List::new();
    target.insert_element(None, element);
    assert_eq!(target.ownership().len(), 1);
    assert!(source.ownership().is_empty());
}

#[test]
fn test_set_insert_twice_yields_one() {
    let mut set = Set::new();
    assert!(set.insert("e"));
    assert!(!set.insert("e"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_set_remove_reports_outcome() {
    let mut set = set_of(&[1, 2, 3]);
    assert_eq!(set.remove(&2).and_then(Element::into_owned), Some(2));
    assert!(set.remove(&2).is_none());
    assert_eq!(sorted(&set), vec![1, 3]);
    assert!(set.validate_invariants());
}

#[test]
fn test_set_algebra_scenario() {
    let a = set_of(&[1, 2, 3]);
    let b = set_of(&[3, 4, 5]);

    assert_eq!(sorted(&union(&a, &b)), vec![1, 2, 3, 4, 5]);
    assert_eq!(sorted(&intersection(&a, &b)), vec![3]);
    assert_eq!(sorted(&difference(&a, &b)), vec![1, 2]);
    assert_eq!(sorted(&difference(&b, &a)), vec![4, 5]);
    assert!(is_subset(&set_of(&[1, 2]), &a));
    assert!(is_equal(&a, &set_of(&[3, 2, 1])));
    assert!(!is_subset(&a, &b));
}

#[test]
fn test_set_algebra_identities() {
    let a = set_of(&[7, 8, 9]);
    let empty = set_of(&[]);

    assert!(is_subset(&a, &a));
    assert!(is_equal(&a, &a));
    assert!(is_equal(&union(&a, &empty), &a));
    assert!(intersection(&a, &empty).is_empty());
    assert!(difference(&a, &a).is_empty());
}

#[test]
fn test_set_results_borrow_inputs() {
    let a = set_of(&[1, 2]);
    let b = set_of(&[2, 3]);
    let u = union(&a, &b);
    assert!(u.ownership().is_empty());
    assert!(u.iter().all(|member| a.has_ownership(member) || b.has_ownership(member)));
}

#[derive(Debug)]
struct Account {
    id: u32,
    owner: &'static str,
}

#[test]
fn test_set_by_key_collapses_distinct_payloads() {
    let mut set = Set::with_equivalence(ByKey(|account: &Account| account.id));
    assert!(set.insert(Account { id: 1, owner: "ada" }));
    assert!(!set.insert(Account { id: 1, owner: "grace" }));
    assert!(set.insert(Account { id: 2, owner: "grace" }));
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().next().map(|a| a.owner), Some("ada"));
}

#[test]
fn test_queue_fifo_and_peek() {
    let mut queue = Queue::new();
    assert!(queue.peek().is_none());
    queue.enqueue('a');
    queue.enqueue('b');
    assert_eq!(queue.peek(), Some(&'a'));
    assert_eq!(queue.dequeue().and_then(Element::into_owned), Some('a'));
    assert_eq!(queue.dequeue().and_then(Element::into_owned), Some('b'));
    assert!(queue.dequeue().is_none());
    assert!(queue.is_empty());
}

#[test]
fn test_queue_clear_mixed_ownership() {
    let parked = vec![1, 2, 3];
    let mut queue = Queue::new();
    queue.enqueue(vec![4]);
    queue.enqueue_ref(&parked);
    assert_eq!(queue.len(), 2);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(parked.len(), 3);
}
