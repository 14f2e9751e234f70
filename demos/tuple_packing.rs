//! Order payload fields by storage size or alignment.

#![allow(dead_code)]

use tola_tql::prelude::*;

#[derive(Layout, Default, Debug)]
struct Small {
    c: [u8; 1],
}

#[derive(Layout, Default, Debug)]
#[repr(align(8))]
struct Medium {
    c: [u8; 9],
}

#[derive(Layout, Default, Debug)]
struct Big {
    x: [f64; 4],
}

type BySizeAsc = sort_types_by![BySizeOf; Big, Small, Medium];
type ByAlignDesc = sort_types_desc![ByAlignOf; Small, Big, Medium];

assert_type_eq!(BySizeAsc, (Small, Medium, Big));

fn main() {
    println!("size_of:");
    <TypeSort<Asc, BySizeOf, tlist![Big, Small, Medium]>>::inspect_keys(|name, size| {
        println!("  {name:<24} {size:>3} bytes");
    });

    println!("align_of (descending):");
    <TypeSort<Desc, ByAlignOf, tlist![Small, Big, Medium]>>::inspect_keys(|name, align| {
        println!("  {name:<24} {align:>3}");
    });

    let packed: BySizeAsc = Default::default();
    println!("{packed:?}");
    println!("largest-alignment first: {}", std::any::type_name::<ByAlignDesc>());
}
