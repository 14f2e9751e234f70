//! Partition tests: bucket contents, order preservation and operator relations.

#![allow(dead_code)]

use pretty_assertions::assert_eq;
use std::any::type_name;
use tola_tql::prelude::*;

#[derive(HasSize)] #[size = 10] struct A;
#[derive(HasSize)] #[size = 20] struct B;
#[derive(HasSize)] #[size = 5]  struct C;
#[derive(HasSize)] #[size = 15] struct D;
#[derive(HasSize)] #[size = 25] struct E;
#[derive(HasSize)] #[size = 20] struct F;

#[derive(HasSize)] #[size = 10] struct Pivot10;

type All = tlist![A, B, C, D, E, F];

fn names<L: Inspect>() -> Vec<&'static str> {
    L::type_names()
}

// ============================================================================
// PART 1: THE SIX-ELEMENT FIXTURE
// ============================================================================

#[test]
fn test_le_pivot_ten() {
    assert_type_eq!(FilterBy<Pivot10, ops::Le, All>, tlist![A, C]);
    assert_type_eq!(RejectIfBy<Pivot10, ops::Le, All>, tlist![B, D, E, F]);

    assert_eq!(names::<FilterBy<Pivot10, ops::Le, All>>(), vec![type_name::<A>(), type_name::<C>()]);
}

#[test]
fn test_gt_pivot_ten() {
    assert_type_eq!(FilterBy<Pivot10, ops::Gt, All>, tlist![B, D, E, F]);
    assert_type_eq!(RejectIfBy<Pivot10, ops::Gt, All>, tlist![A, C]);
}

#[test]
fn test_eq_and_ne() {
    #[derive(HasSize)] #[size = 20] struct Pivot20;

    assert_type_eq!(FilterBy<Pivot20, ops::EqTo, All>, tlist![B, F]);
    assert_type_eq!(FilterBy<Pivot20, ops::Ne, All>, tlist![A, C, D, E]);
}

#[test]
fn test_lt_and_ge_are_complements() {
    assert_type_eq!(FilterBy<Pivot10, ops::Lt, All>, RejectIfBy<Pivot10, ops::Ge, All>);
    assert_type_eq!(FilterBy<Pivot10, ops::Ge, All>, RejectIfBy<Pivot10, ops::Lt, All>);
}

// ============================================================================
// PART 2: INVARIANTS
// ============================================================================

#[test]
fn test_every_element_lands_once() {
    type Pass = FilterBy<Pivot10, ops::Ge, All>;
    type Fail = RejectIfBy<Pivot10, ops::Ge, All>;
    assert_eq!(<Pass as TypeList>::LEN + <Fail as TypeList>::LEN, <All as TypeList>::LEN);

    let mut seen = names::<Pass>();
    seen.extend(names::<Fail>());
    seen.sort();
    let mut expected = names::<All>();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn test_order_within_bucket_follows_input() {
    type Shuffled = tlist![F, C, E, A, D, B];
    assert_type_eq!(FilterBy<Pivot10, ops::Gt, Shuffled>, tlist![F, E, D, B]);
    assert_type_eq!(RejectIfBy<Pivot10, ops::Gt, Shuffled>, tlist![C, A]);
}

#[test]
fn test_empty_input() {
    assert_type_eq!(Split<Pivot10, ops::Lt, Nil>, tlist![Nil, Nil]);
}

#[test]
fn test_split_is_pass_then_fail() {
    assert_type_eq!(
        Split<Pivot10, ops::Le, All>,
        tlist![tlist![A, C], tlist![B, D, E, F]]
    );
}

// ============================================================================
// PART 3: OPERATOR TOKENS AND KEY SELECTORS
// ============================================================================

#[test]
fn test_operator_tokens() {
    assert_type_eq!(FilterBy<Pivot10, OpType<op!("<=")>, All>, tlist![A, C]);
    assert_type_eq!(filter_by![Pivot10, "<"; A, B, C], tlist![C]);
    assert_type_eq!(reject_if_by![Pivot10, "!="; A, B, C], tlist![A]);
    assert_type_eq!(partition_by![Pivot10, ">="; C, A], tlist![tlist![A], tlist![C]]);
}

#[test]
fn test_partition_by_key_wraps_elements() {
    type Wide = SizeOf<u64>;
    assert_type_eq!(
        PartitionByKey<Wide, ops::Lt, BySizeOf, tlist![u8, u64, u16, u128]>,
        tlist![
            tlist![SizeOf<u8>, SizeOf<u16>],
            tlist![SizeOf<u64>, SizeOf<u128>]
        ]
    );
    assert_type_eq!(
        partition_by_key![Wide, "<=", BySizeOf; u128, u32],
        tlist![tlist![SizeOf<u32>], tlist![SizeOf<u128>]]
    );
}

#[test]
fn test_mixed_pivot_and_wrapper() {
    // pivot keyed by declared size, elements keyed by alignment
    #[derive(HasSize)] #[size = 4] struct Four;
    type Aligns = tola_tql::Apply<ByAlignOf, tlist![u8, u32, u64]>;
    assert_type_eq!(FilterBy<Four, ops::Le, Aligns>, tlist![AlignOf<u8>, AlignOf<u32>]);
}
