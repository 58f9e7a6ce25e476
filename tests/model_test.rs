//! Model-based tests for the ordered list.
//!
//! These tests verify:
//! 1. Every operation matches a naive `Vec` reference model
//! 2. Ascending order with stable ties holds after arbitrary mutation
//! 3. Length tracks effective removals only
//! 4. Runs are deterministic for a given seed
//!
//! ## Running
//!
//! ```bash
//! cargo test --release --test model_test -- --nocapture
//! ```

use std::time::Instant;

use ordered_list::{EntryKey, OrderedEntry, OrderedList};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Operations per model-equivalence run
const MODEL_OPS: usize = 20_000;

/// Entries for the bulk ordering test
const BULK_COUNT: usize = 200_000;

/// Order keys are drawn from this range so collisions are frequent
const ORDER_RANGE: std::ops::Range<i32> = -8..8;

/// Elements are drawn from this range so duplicates are frequent
const ELEMENT_RANGE: std::ops::Range<u32> = 0..6;

// ============================================================================
// REFERENCE MODEL
// ============================================================================

/// Insertion-ordered vector; iteration is a stable sort by order key.
#[derive(Default)]
struct Model {
    /// Entries added through `push` have no key
    entries: Vec<(i32, u32, Option<EntryKey>)>,
}

impl Model {
    fn sorted(&self) -> Vec<(i32, u32)> {
        let mut pairs: Vec<(i32, u32)> = self.entries.iter().map(|&(o, e, _)| (o, e)).collect();
        pairs.sort_by_key(|&(order, _)| order);
        pairs
    }

    fn remove_first(&mut self, pred: impl Fn(&(i32, u32, Option<EntryKey>)) -> bool) {
        if let Some(pos) = self.entries.iter().position(pred) {
            self.entries.remove(pos);
        }
    }
}

fn observed(list: &OrderedList<u32>) -> Vec<(i32, u32)> {
    list.iter().map(|entry| (entry.order, entry.element)).collect()
}

/// Apply `count` random operations to both the list and the model,
/// checking they agree after every step.
fn run_model_sequence(seed: u64, count: usize) -> Vec<(i32, u32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut list = OrderedList::with_default_order(0);
    let mut model = Model::default();

    for step in 0..count {
        let order = rng.gen_range(ORDER_RANGE);
        let element = rng.gen_range(ELEMENT_RANGE);

        match rng.gen_range(0..10) {
            // Adds are weighted up so the list does not drain
            0..=2 => {
                let key = list.insert(order, element);
                model.entries.push((order, element, Some(key)));
            }
            3 => {
                list.push(element);
                model.entries.push((0, element, None));
            }
            4 => {
                list.remove_element(&element);
                model.remove_first(|&(_, e, _)| e == element);
            }
            5 => {
                list.remove_at(order);
                model.remove_first(|&(o, _, _)| o == order);
            }
            6 => {
                list.remove(&OrderedEntry::new(order, element));
                model.remove_first(|&(o, e, _)| o == order && e == element);
            }
            7 => {
                if rng.gen_bool(0.5) {
                    list.remove_all_elements(&element);
                    model.entries.retain(|&(_, e, _)| e != element);
                } else {
                    let modulus = element + 2;
                    list.remove_all_where(|e| e % modulus == 0);
                    model.entries.retain(|&(_, e, _)| e % modulus != 0);
                }
            }
            8 if !model.entries.is_empty() => {
                let pos = rng.gen_range(0..model.entries.len());
                let (old_order, e, Some(key)) = model.entries[pos] else {
                    continue;
                };
                assert_eq!(list.set_order(key, order), Ok(old_order), "step {step}");
                if old_order != order {
                    model.entries.remove(pos);
                    model.entries.push((order, e, Some(key)));
                }
            }
            9 if !model.entries.is_empty() => {
                let pos = rng.gen_range(0..model.entries.len());
                let (o, e, Some(key)) = model.entries[pos] else {
                    continue;
                };
                model.entries.remove(pos);
                assert_eq!(list.remove_key(key), Some(OrderedEntry::new(o, e)), "step {step}");
                assert!(list.get(key).is_none(), "step {step}");
            }
            _ => {}
        }

        assert_eq!(list.len(), model.entries.len(), "length diverged at step {step}");
        assert_eq!(observed(&list), model.sorted(), "order diverged at step {step}");
    }

    let insertion: Vec<(i32, u32)> = list.insertion_order().iter().map(|e| (e.order, e.element)).collect();
    let expected: Vec<(i32, u32)> = model.entries.iter().map(|&(o, e, _)| (o, e)).collect();
    assert_eq!(insertion, expected, "insertion order diverged");

    observed(&list)
}

// ============================================================================
// TESTS
// ============================================================================

/// Random operation sequences agree with the reference model.
#[test]
fn model_equivalence() {
    for seed in [1, 42, 12345] {
        let start = Instant::now();
        let final_state = run_model_sequence(seed, MODEL_OPS);
        println!(
            "seed {seed}: {MODEL_OPS} ops, {} entries left, {:.2?}",
            final_state.len(),
            start.elapsed()
        );
    }
}

/// Same seed, same final contents.
#[test]
fn verify_determinism() {
    const SEED: u64 = 777;

    let first = run_model_sequence(SEED, 5_000);
    let second = run_model_sequence(SEED, 5_000);

    assert_eq!(first, second, "same seed must produce the same list");
}

/// Bulk inserts come out sorted, with ties in insertion order.
#[test]
fn bulk_ordering() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut list = OrderedList::with_capacity(BULK_COUNT);

    let start = Instant::now();
    for i in 0..BULK_COUNT {
        list.add(rng.gen_range(-1_000..1_000), i);
    }
    println!("inserted {BULK_COUNT} entries in {:.2?}", start.elapsed());

    assert_eq!(list.len(), BULK_COUNT);

    let entries: Vec<_> = list.iter().collect();
    assert_eq!(entries.len(), BULK_COUNT);
    for pair in entries.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.order <= b.order, "not ascending: {a:?} then {b:?}");
        if a.order == b.order {
            // Elements are insertion indices, so ties must ascend too
            assert!(a.element < b.element, "unstable tie: {a:?} then {b:?}");
        }
    }

    list.remove_all_where(|i| i % 2 == 0);
    assert_eq!(list.len(), BULK_COUNT / 2);
    assert!(list.iter().all(|e| e.element % 2 == 1));
}
