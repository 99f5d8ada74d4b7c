use std::cell::Cell;
use std::rc::Rc;

use graphwalk::{DirectedGraph, Element, List, Queue, Set};

/// Counts how many times instances sharing its counter were dropped.
#[derive(Debug)]
struct Tracked {
    id: u32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_list_destroys_adopted_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut list = List::new();
        list.push_back(Tracked::new(1, &drops));
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_list_never_destroys_borrowed() {
    let drops = Rc::new(Cell::new(0));
    let on_stack = Tracked::new(2, &drops);
    {
        let mut list = List::new();
        list.push_back(Tracked::new(1, &drops));
        list.push_back_ref(&on_stack);
    }
    assert_eq!(drops.get(), 1);
    drop(on_stack);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_removal_releases_without_destroying() {
    let drops = Rc::new(Cell::new(0));
    let mut list = List::new();
    list.push_back(Tracked::new(1, &drops));
    list.push_back(Tracked::new(2, &drops));

    let released = list.pop_front().and_then(Element::into_owned).unwrap();
    assert_eq!(drops.get(), 0);
    assert_eq!(list.ownership().len(), 1);

    drop(list);
    assert_eq!(drops.get(), 1);
    drop(released);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_has_ownership_tracks_adoption() {
    let drops = Rc::new(Cell::new(0));
    let outside = Tracked::new(7, &drops);
    let mut list = List::new();
    let key = list.push_back(Tracked::new(7, &drops));
    list.push_back_ref(&outside);

    let adopted = list.get(key).unwrap();
    assert!(list.has_ownership(adopted));
    assert!(!list.has_ownership(&outside));
}

#[test]
fn test_set_drops_rejected_duplicate() {
    let drops = Rc::new(Cell::new(0));
    let mut set = Set::new();
    assert!(set.insert(Tracked::new(1, &drops)));
    assert!(!set.insert(Tracked::new(1, &drops)));
    assert_eq!(drops.get(), 1);
    drop(set);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_queue_destroys_remaining_adopted() {
    let drops = Rc::new(Cell::new(0));
    let mut queue = Queue::new();
    for id in 0..4 {
        queue.enqueue(Tracked::new(id, &drops));
    }
    drop(queue.dequeue());
    assert_eq!(drops.get(), 1);
    drop(queue);
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_graph_destroys_only_adopted_vertices() {
    let drops = Rc::new(Cell::new(0));
    let borrowed = Tracked::new(10, &drops);
    {
        let mut graph = DirectedGraph::new();
        graph.insert_vertex(Tracked::new(1, &drops)).unwrap();
        graph.insert_vertex(Tracked::new(2, &drops)).unwrap();
        graph.insert_vertex_ref(&borrowed).unwrap();
        graph
            .insert_edge(&Tracked::new(1, &drops), &Tracked::new(10, &drops))
            .unwrap();
        // the two probes above were dropped on return
        assert_eq!(drops.get(), 2);
    }
    assert_eq!(drops.get(), 4);
    drop(borrowed);
    assert_eq!(drops.get(), 5);
}

#[test]
fn test_graph_remove_vertex_hands_back_adopted() {
    let drops = Rc::new(Cell::new(0));
    let mut graph = DirectedGraph::new();
    graph.insert_vertex(Tracked::new(1, &drops)).unwrap();

    let probe = Tracked::new(1, &drops);
    let removed = graph.remove_vertex(&probe).unwrap();
    assert!(removed.is_owned());
    assert!(graph.ownership().is_empty());
    assert_eq!(drops.get(), 0);

    drop(removed);
    drop(probe);
    assert_eq!(drops.get(), 2);
}
