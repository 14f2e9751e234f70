//! Sort tests: ordering, edge cases, idempotence and layout keys.

#![allow(dead_code)]

use pretty_assertions::assert_eq;
use tola_tql::prelude::*;
use tola_tql::{Originals, Sorted};

#[derive(HasSize)] #[size = 10] struct A;
#[derive(HasSize)] #[size = 20] struct B;
#[derive(HasSize)] #[size = 5]  struct C;
#[derive(HasSize)] #[size = 15] struct D;
#[derive(HasSize)] #[size = 25] struct E;
#[derive(HasSize)] #[size = 20] struct F;

type All = tlist![A, B, C, D, E, F];

fn keys<L: InspectKeys>() -> Vec<u64> {
    L::keys()
}

fn is_monotone(keys: &[u64], ascending: bool) -> bool {
    keys.windows(2).all(|w| if ascending { w[0] <= w[1] } else { w[0] >= w[1] })
}

// ============================================================================
// PART 1: ASCENDING / DESCENDING
// ============================================================================

#[test]
fn test_ascending_six() {
    type S = TypeSort<Asc, BySize, All>;
    assert_type_eq!(Originals<S>, tlist![C, A, D, B, F, E]);
    assert_eq!(keys::<S>(), vec![5, 10, 15, 20, 20, 25]);
}

#[test]
fn test_descending_six() {
    type S = TypeSort<Desc, BySize, All>;
    assert_eq!(keys::<S>(), vec![25, 20, 20, 15, 10, 5]);
    assert_type_eq!(Originals<S>, tlist![E, B, F, D, A, C]);
}

#[test]
fn test_self_keyed_sort() {
    // derived types are keyed by themselves
    assert_type_eq!(Sorted<Asc, All>, tlist![C, A, D, B, F, E]);
}

// ============================================================================
// PART 2: EDGE CASES AND INVARIANTS
// ============================================================================

#[test]
fn test_empty_and_singleton() {
    assert_type_eq!(TypeSort<Asc, BySize, Nil>, Nil);
    assert_type_eq!(TypeSort<Desc, BySize, tlist![A]>, tlist![Size<A>]);
}

#[test]
fn test_already_sorted_and_reversed() {
    assert_type_eq!(Sorted<Asc, tlist![C, A, D]>, tlist![C, A, D]);
    assert_type_eq!(Sorted<Asc, tlist![D, A, C]>, tlist![C, A, D]);
}

#[test]
fn test_sort_is_permutation() {
    type S = TypeSort<Asc, BySize, All>;
    assert_eq!(<S as TypeList>::LEN, <All as TypeList>::LEN);
    assert_eq!(max_size::<S>(), max_size::<All>());
    assert_eq!(tola_tql::sum_sizes::<S>(), tola_tql::sum_sizes::<All>());
    assert!(is_monotone(&keys::<S>(), true));
}

#[test]
fn test_idempotent() {
    type Once = Sorted<Asc, All>;
    type Twice = Sorted<Asc, Once>;
    assert_type_eq!(Once, Twice);

    type DescOnce = TypeSort<Desc, BySize, All>;
    assert_eq!(keys::<Sorted<Desc, DescOnce>>(), keys::<DescOnce>());
}

#[test]
fn test_equal_keys_stay_together() {
    #[derive(HasSize)] #[size = 7] struct P;
    #[derive(HasSize)] #[size = 7] struct Q;
    #[derive(HasSize)] #[size = 7] struct R;

    let sorted = keys::<Sorted<Asc, tlist![P, Q, R, C]>>();
    assert_eq!(sorted, vec![5, 7, 7, 7]);
}

// ============================================================================
// PART 3: LAYOUT KEYS
// ============================================================================

#[derive(Layout)]
struct Small {
    a: u8,
}

#[derive(Layout)]
struct Medium {
    b: u32,
    c: [u8; 9],
}

#[derive(Layout)]
#[repr(align(64))]
struct Big {
    d: [u8; 100],
}

#[test]
fn test_sort_by_size_of() {
    type S = TypeSort<Asc, BySizeOf, tlist![Big, Small, Medium]>;
    assert_type_eq!(Originals<S>, tlist![Small, Medium, Big]);
    assert_eq!(keys::<S>(), vec![1, 16, 128]);
}

#[test]
fn test_sort_by_align_of_desc() {
    type S = TypeSort<Desc, ByAlignOf, tlist![Small, Big, Medium]>;
    assert_type_eq!(Originals<S>, tlist![Big, Medium, Small]);
    assert!(is_monotone(&keys::<S>(), false));
}

#[test]
fn test_sort_sugar_yields_tuples() {
    assert_type_eq!(sort_types![A, B, C], (C, A, B));
    assert_type_eq!(sort_types_by![BySizeOf; u64, u8, u32], (u8, u32, u64));
    assert_type_eq!(sort_types_desc![BySizeOf; u8, u64, u32], (u64, u32, u8));
}
