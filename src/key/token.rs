//! Compile-time tokens and first-match dispatch.
//!
//! A [`Token`] is the type-level form of a short string (an operator such as
//! `"<="`), built with [`op!`](crate::op). [`Match`] scans an ordered list of
//! [`Case`] / [`Otherwise`] alternatives:
//!
//! - the first `Case` whose key equals the query wins;
//! - an `Otherwise` seen before any match replaces the pending fallback;
//! - an `Otherwise` seen after a match is ignored;
//! - no match and no fallback yields [`NoMatch`].
//!
//! ```
//! use tola_tql::{op, tlist, assert_type_eq};
//! use tola_tql::key::token::{Case, Match, Otherwise};
//!
//! type Alts = tlist![Case<op!("add"), u8>, Otherwise<()>];
//! assert_type_eq!(Match<op!("add"), Alts>, u8);
//! assert_type_eq!(Match<op!("sub"), Alts>, ());
//! ```

use core::marker::PhantomData;
use super::relation::ops;
use crate::list::{Cons, Nil};
use crate::primitives::bool::{Absent, Bool};
use crate::primitives::stream::{DefaultMaxDepth, HashStream, StreamEq};

// =============================================================================
// Tokens
// =============================================================================

/// Opaque comparable token carrying the hash stream of its text.
///
/// Two tokens are equal when the 64-bit FNV-1a hashes of their texts are
/// equal. Distinct texts whose hashes collide compare equal.
pub struct Token<S>(PhantomData<S>);

/// Type-level key equality used by [`Match`].
pub trait KeyEq<Other> {
    type Out: Bool;
}

impl<A, B> KeyEq<Token<B>> for Token<A>
where
    A: HashStream + StreamEq<B, DefaultMaxDepth>,
    B: HashStream,
{
    type Out = <A as StreamEq<B, DefaultMaxDepth>>::Out;
}

// =============================================================================
// Alternatives
// =============================================================================

/// Alternative selected when the query equals `K`.
pub struct Case<K, T>(PhantomData<(K, T)>);

/// Fallback alternative.
pub struct Otherwise<T>(PhantomData<T>);

/// Result of a match with no matching case and no fallback.
///
/// Implements nothing; using it as a relation fails at the use site.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMatch;

/// One scan step. `Fallback` is the pending result, `Matched` records whether
/// a `Case` has already won.
pub trait MatchStep<Key, Fallback, Matched: Bool> {
    type Out;
}

impl<Key, F, M: Bool> MatchStep<Key, F, M> for Nil {
    type Out = F;
}

type Hit<Key, K> = <Key as KeyEq<K>>::Out;
type FirstHit<M, Key, K> = <<M as Bool>::Not as Bool>::And<Hit<Key, K>>;

impl<Key, F, M, K, T, Rest> MatchStep<Key, F, M> for Cons<Case<K, T>, Rest>
where
    M: Bool,
    Key: KeyEq<K>,
    Rest: MatchStep<Key, <FirstHit<M, Key, K> as Bool>::If<T, F>, <M as Bool>::Or<Hit<Key, K>>>,
{
    type Out = <Rest as MatchStep<
        Key,
        <FirstHit<M, Key, K> as Bool>::If<T, F>,
        <M as Bool>::Or<Hit<Key, K>>,
    >>::Out;
}

impl<Key, F, M, T, Rest> MatchStep<Key, F, M> for Cons<Otherwise<T>, Rest>
where
    M: Bool,
    Rest: MatchStep<Key, <M as Bool>::If<F, T>, M>,
{
    type Out = <Rest as MatchStep<Key, <M as Bool>::If<F, T>, M>>::Out;
}

/// First-match-wins selection of `Key` over the alternatives `Alts`.
pub type Match<Key, Alts> = <Alts as MatchStep<Key, NoMatch, Absent>>::Out;

/// Trait form of [`Match`], for use in bounds.
pub trait Select<Key> {
    type Out;
}

impl<Key, Alts: MatchStep<Key, NoMatch, Absent>> Select<Key> for Alts {
    type Out = Match<Key, Alts>;
}

// =============================================================================
// Operator table
// =============================================================================

/// The operator tokens understood by [`OpType`], in match order.
pub type OpTable = crate::tlist![
    Case<crate::op!("<="), ops::Le>,
    Case<crate::op!("<"), ops::Lt>,
    Case<crate::op!(">="), ops::Ge>,
    Case<crate::op!(">"), ops::Gt>,
    Case<crate::op!("=="), ops::EqTo>,
    Case<crate::op!("!="), ops::Ne>,
];

/// Relation named by an operator token, or [`NoMatch`].
pub type OpType<Tok> = Match<Tok, OpTable>;
