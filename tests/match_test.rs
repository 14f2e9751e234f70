//! First-match dispatch over tokens.

#![allow(dead_code)]

use tola_tql::key::token::{Case, KeyEq, Match, NoMatch, Otherwise};
use tola_tql::prelude::*;

struct Handler;
struct Other;
struct Fallback;
struct Late;

type Read = op!("read");
type Write = op!("write");

fn same<A: KeyEq<B>, B>() -> bool {
    <A::Out as Bool>::VALUE
}

#[test]
fn test_token_equality() {
    assert!(same::<Read, op!("read")>());
    assert!(!same::<Read, Write>());
    assert!(!same::<op!("<"), op!("<=")>());
}

#[test]
fn test_const_expression_token() {
    const NAME: &str = "read";
    assert!(same::<Read, op!(NAME)>());
}

#[test]
fn test_precedence_first_case() {
    assert_type_eq!(
        Match<Read, tlist![Case<Read, Handler>, Case<Read, Other>, Otherwise<Fallback>]>,
        Handler
    );
}

#[test]
fn test_default_fallback() {
    assert_type_eq!(
        Match<Read, tlist![Otherwise<Fallback>, Case<Write, Other>]>,
        Fallback
    );
}

#[test]
fn test_case_after_default() {
    assert_type_eq!(
        Match<Write, tlist![Otherwise<Fallback>, Case<Write, Other>]>,
        Other
    );
}

#[test]
fn test_defaults_replace_each_other_until_match() {
    assert_type_eq!(Match<Read, tlist![Otherwise<Fallback>, Otherwise<Late>]>, Late);
    assert_type_eq!(
        Match<Read, tlist![Case<Read, Handler>, Otherwise<Late>]>,
        Handler
    );
}

#[test]
fn test_no_match() {
    assert_type_eq!(Match<Read, tlist![Case<Write, Other>]>, NoMatch);
    assert_type_eq!(OpType<op!("=<")>, NoMatch);
}

#[test]
fn test_operator_mapping() {
    assert_type_eq!(OpType<op!("<")>, ops::Lt);
    assert_type_eq!(OpType<op!("<=")>, ops::Le);
    assert_type_eq!(OpType<op!(">")>, ops::Gt);
    assert_type_eq!(OpType<op!(">=")>, ops::Ge);
    assert_type_eq!(OpType<op!("==")>, ops::EqTo);
    assert_type_eq!(OpType<op!("!=")>, ops::Ne);
    assert_type_eq!(tola_tql::op_rel!(">="), ops::Ge);
}
