//! Tests for the FIFO/LIFO frontiers.

use super::frontier::{Frontier, Queue, Stack};

#[test]
fn test_queue_is_fifo() {
    let queue = Queue::new();
    assert_eq!(queue.push(1), 1);
    assert_eq!(queue.push(2), 2);
    assert_eq!(queue.push(3), 3);

    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_stack_is_lifo() {
    let stack = Stack::new();
    assert_eq!(stack.push(1), 1);
    assert_eq!(stack.push(2), 2);
    assert_eq!(stack.push(3), 3);

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_pop_empty_returns_none() {
    let queue: Queue<&str> = Queue::default();
    let stack: Stack<&str> = Stack::default();
    assert!(queue.pop().is_none());
    assert!(stack.pop().is_none());
    assert!(queue.is_empty());
    assert!(stack.is_empty());
}

#[test]
fn test_push_some_ignores_none() {
    let queue = Queue::new();
    assert_eq!(queue.push_some(Some("a")), 1);
    assert_eq!(queue.push_some(None), 1);
    assert_eq!(queue.len(), 1);

    let stack = Stack::with_capacity(4);
    assert_eq!(stack.push_some(None), 0);
    assert_eq!(stack.push_some(Some("a")), 1);
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_interleaved_push_pop() {
    let queue = Queue::with_capacity(2);
    queue.push(1);
    queue.push(2);
    assert_eq!(queue.pop(), Some(1));
    queue.push(3);
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));

    let stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Some(2));
    stack.push(3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(1));
}

fn hammer<F: Frontier<usize> + Sync>(frontier: &F) {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    std::thread::scope(|s| {
        for t in 0..THREADS {
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let len = frontier.push(t * PER_THREAD + i);
                    assert!(len >= 1);
                }
            });
        }
    });
    assert_eq!(frontier.len(), THREADS * PER_THREAD);

    let mut seen = vec![false; THREADS * PER_THREAD];
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    let mut popped = Vec::new();
                    while let Some(item) = frontier.pop() {
                        popped.push(item);
                    }
                    popped
                })
            })
            .collect();
        for handle in handles {
            for item in handle.join().unwrap() {
                assert!(!seen[item], "item {item} popped twice");
                seen[item] = true;
            }
        }
    });

    assert!(seen.iter().all(|&s| s));
    assert!(frontier.is_empty());
}

#[test]
fn test_queue_concurrent_push_pop() {
    hammer(&Queue::new());
}

#[test]
fn test_stack_concurrent_push_pop() {
    hammer(&Stack::new());
}
