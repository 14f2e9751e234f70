//! Extraction tests: tuples and coproducts of original types.

#![allow(dead_code)]

use tola_tql::prelude::*;
use tola_tql::handlers;

#[derive(HasSize, Debug, Default, PartialEq)] #[size = 10] struct A;
#[derive(HasSize, Debug, Default, PartialEq)] #[size = 20] struct B;
#[derive(HasSize, Debug, Default, PartialEq)] #[size = 5]  struct C;

#[test]
fn test_tuple_round_trip_through_sort() {
    type S = TypeSort<Asc, BySize, tlist![A, B, C]>;
    assert_type_eq!(TupleOf<S>, (C, A, B));
    assert_type_eq!(to_tuple![S], (C, A, B));

    let (c, a, b): TupleOf<S> = Default::default();
    assert_eq!((c, a, b), (C, A, B));
}

#[test]
fn test_empty_tuple() {
    assert_type_eq!(TupleOf<Nil>, ());
}

#[test]
fn test_variant_alternatives_in_list_order() {
    type V = VariantOf<tlist![Size<A>, SizeOf<u32>, Size<C>]>;
    assert_type_eq!(V, Coprod<A, Coprod<u32, Coprod<C, CNil>>>);
    assert_type_eq!(to_variant![tlist![A]], Coprod<A, CNil>);
}

#[test]
fn test_variant_runtime_use() {
    type V = VariantOf<TypeSort<Desc, BySize, tlist![A, B, C]>>;

    let describe = |v: V| {
        v.fold(handlers![
            |_: B| "b",
            |_: A| "a",
            |_: C| "c",
        ])
    };

    assert_eq!(describe(V::inject(A)), "a");
    assert_eq!(describe(V::inject(B)), "b");
    assert_eq!(describe(V::inject(C)), "c");

    let v = V::inject(C);
    assert_eq!(v.get::<C, _>(), Some(&C));
    assert_eq!(v.get::<A, _>(), None);
}
