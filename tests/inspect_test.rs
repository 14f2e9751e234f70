//! Test runtime reflection via the Inspect traits

use pretty_assertions::assert_eq;
use std::any::type_name;
use tola_tql::prelude::*;

#[derive(HasSize)]
#[size = 3]
struct Three;

#[derive(HasSize)]
#[size = 1]
struct One;

#[test]
fn test_inspect_empty() {
    let mut names = Vec::new();
    Nil::inspect(|n| names.push(n));
    assert!(names.is_empty());
}

#[test]
fn test_inspect_in_order() {
    type L = tlist![Three, One, u8];
    let mut names = Vec::new();
    L::inspect(|n| names.push(n));
    assert_eq!(names, vec![type_name::<Three>(), type_name::<One>(), "u8"]);
}

#[test]
fn test_inspect_keys_reports_originals() {
    type S = TypeSort<Asc, BySize, tlist![Three, One]>;
    let mut seen = Vec::new();
    S::inspect_keys(|name, key| seen.push((name, key)));
    assert_eq!(seen, vec![(type_name::<One>(), 1), (type_name::<Three>(), 3)]);
}

#[test]
fn test_inspect_sorted_layouts() {
    type S = TypeSort<Desc, BySizeOf, tlist![u8, u32, u16]>;
    assert_eq!(S::inner_names(), vec!["u32", "u16", "u8"]);
    assert_eq!(S::keys(), vec![4, 2, 1]);
}
