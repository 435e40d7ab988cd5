//! Behavioral tests for the optional container.
//!
//! Covers the assignment state table (verified with an instrumented held
//! type counting constructor vs. assignment calls), construct/destroy
//! pairing, the equality laws, move-out semantics, and the end-to-end
//! empty/assign/reset scenario.

use std::cell::Cell;
use std::rc::Rc;

use assert_matches::assert_matches;
use optslot::{has_value, make_optional, Error, Optional, NULL};

/// Shared operation counters for [`Counted`].
#[derive(Debug, Default)]
struct Counts {
    clones: Cell<usize>,
    assigns: Cell<usize>,
    drops: Cell<usize>,
}

/// Held type that counts its copy-constructions (`clone`), in-place
/// assignments (`clone_from`) and destructions.
#[derive(Debug)]
struct Counted {
    value: i32,
    counts: Rc<Counts>,
}

impl Counted {
    fn new(value: i32, counts: &Rc<Counts>) -> Self {
        Self {
            value,
            counts: Rc::clone(counts),
        }
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        self.counts.clones.set(self.counts.clones.get() + 1);
        Self {
            value: self.value,
            counts: Rc::clone(&self.counts),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        source.counts.assigns.set(source.counts.assigns.get() + 1);
        self.value = source.value;
        self.counts = Rc::clone(&source.counts);
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.counts.drops.set(self.counts.drops.get() + 1);
    }
}

#[test]
fn value_assignment_into_holding_assigns_in_place() {
    let counts = Rc::new(Counts::default());
    let mut opt = Optional::of(Counted::new(1, &counts));
    assert_eq!(counts.clones.get(), 0);

    let source = Counted::new(2, &counts);
    opt.set(&source);

    assert_eq!(counts.assigns.get(), 1);
    assert_eq!(counts.clones.get(), 0);
    assert_eq!(opt.get().unwrap().value, 2);
}

#[test]
fn value_assignment_into_empty_constructs() {
    let counts = Rc::new(Counts::default());
    let mut opt: Optional<Counted> = Optional::empty();

    let source = Counted::new(3, &counts);
    opt.set(&source);

    assert_eq!(counts.clones.get(), 1);
    assert_eq!(counts.assigns.get(), 0);
    assert_eq!(opt.get().unwrap().value, 3);
}

#[test]
fn container_assignment_state_table() {
    let counts = Rc::new(Counts::default());

    // holding <- holding: in-place assignment, no destroy/reconstruct.
    let mut dst = Optional::of(Counted::new(1, &counts));
    let src = Optional::of(Counted::new(2, &counts));
    dst.clone_from(&src);
    assert_eq!(counts.assigns.get(), 1);
    assert_eq!(counts.clones.get(), 0);
    assert_eq!(counts.drops.get(), 0);
    assert_eq!(dst.get().unwrap().value, 2);

    // holding <- empty: destroy, become empty.
    let empty: Optional<Counted> = Optional::empty();
    dst.clone_from(&empty);
    assert_eq!(counts.drops.get(), 1);
    assert!(dst.is_empty());

    // empty <- holding: construct.
    dst.clone_from(&src);
    assert_eq!(counts.clones.get(), 1);
    assert_eq!(dst.get().unwrap().value, 2);

    // empty <- empty: no-op.
    let mut lhs: Optional<Counted> = Optional::empty();
    lhs.clone_from(&empty);
    assert!(lhs.is_empty());
}

#[test]
fn every_construction_is_destroyed_exactly_once() {
    let counts = Rc::new(Counts::default());
    {
        let _held = Optional::of(Counted::new(1, &counts));
        let mut reset_early = Optional::of(Counted::new(2, &counts));
        reset_early.reset();
        assert_eq!(counts.drops.get(), 1);

        let mut replaced = Optional::of(Counted::new(3, &counts));
        let old = replaced.replace(Counted::new(4, &counts));
        drop(old);
        assert_eq!(counts.drops.get(), 2);
        // _held, replaced still alive here.
    }
    // Two live containers dropped at scope end.
    assert_eq!(counts.drops.get(), 4);
}

#[test]
fn copies_are_independent() {
    let original = Optional::of(String::from("hello"));
    let mut copy = original.clone();

    copy.get_mut().unwrap().push_str(" world");
    assert_eq!(original.get().unwrap(), "hello");
    assert_eq!(copy.get().unwrap(), "hello world");
}

#[test]
fn move_out_leaves_source_empty() {
    let mut source = Optional::of(String::from("hello"));
    let moved = source.take();

    assert_eq!(moved.get().unwrap(), "hello");
    assert!(source.is_empty());
    assert_matches!(source.get(), Err(Error::NoValue));
}

#[test]
fn equality_laws() {
    assert!(Optional::of(5) == Optional::of(5));
    assert!(Optional::of(5) != Optional::of(6));
    assert!(Optional::<i32>::empty() == Optional::<i32>::empty());
    assert!(NULL != Optional::of(5));
    assert!(NULL == Optional::<i32>::empty());
    assert!(Optional::of(5) == 5);
}

#[test]
fn factory_matches_in_place_construction() {
    let made = make_optional(|| String::from("eng"));
    let emplaced = Optional::with(|| String::from("eng"));
    assert_eq!(made, emplaced);
    assert!(has_value(&made));
}

#[test]
fn empty_assign_reset_scenario() {
    let mut opt: Optional<String> = Optional::empty();
    assert!(!opt.has_value());

    opt.set(String::from("hello"));
    assert_eq!(opt.get().unwrap(), "hello");

    // Assignment from the null marker.
    opt.reset();
    assert!(!opt.has_value());
    assert_matches!(opt.get(), Err(Error::NoValue));
}

#[test]
fn fallback_access_never_copies_default() {
    let empty: Optional<String> = Optional::empty();
    let default = String::from("und");
    let got = empty.get_or(&default);
    assert!(std::ptr::eq(got, &default));

    let held = Optional::of(String::from("eng"));
    assert_eq!(held.get_or(&default), "eng");
}

#[test]
fn converting_paths_cover_all_presence_combinations() {
    // Construction.
    let wide: Optional<u64> = Optional::from_converted(Optional::of(90_u32));
    assert_eq!(wide, Optional::of(90_u64));
    let empty: Optional<u64> = Optional::from_converted(Optional::<u32>::empty());
    assert!(empty.is_empty());

    // Assignment, all four presence combinations.
    let mut dst: Optional<u64> = Optional::of(1_u64);
    dst.set_converted(Optional::of(2_u32));
    assert_eq!(dst, Optional::of(2_u64));
    dst.set_converted(Optional::<u32>::empty());
    assert!(dst.is_empty());
    dst.set_converted(Optional::of(3_u32));
    assert_eq!(dst, Optional::of(3_u64));
    let mut stays_empty: Optional<u64> = Optional::empty();
    stays_empty.set_converted(Optional::<u32>::empty());
    assert!(stays_empty.is_empty());
}

#[test]
fn forwarding_moves_owned_and_clones_borrowed() {
    let counts = Rc::new(Counts::default());

    // Owned source: moved, never cloned.
    let opt = Optional::of(Counted::new(1, &counts));
    assert_eq!(counts.clones.get(), 0);
    drop(opt);

    // Borrowed source: cloned, source still usable.
    let source = Counted::new(2, &counts);
    let opt: Optional<Counted> = Optional::of(&source);
    assert_eq!(counts.clones.get(), 1);
    assert_eq!(source.value, 2);
    assert_eq!(opt.get().unwrap().value, 2);
}
