//! Run pipeline steps in priority order decided at compile time.
//!
//! The declared size of each step is its priority (lower runs earlier).

use tola_tql::prelude::*;

trait Step {
    fn run();
}

#[derive(HasSize)]
#[size = 10]
struct Parse;

#[derive(HasSize)]
#[size = 20]
struct Validate;

#[derive(HasSize)]
#[size = 5]
struct Log;

impl Step for Parse {
    fn run() {
        println!("parse");
    }
}

impl Step for Validate {
    fn run() {
        println!("validate");
    }
}

impl Step for Log {
    fn run() {
        println!("log");
    }
}

/// Run every step of a keyed list, in list order.
trait RunAll {
    fn run_all();
}

impl RunAll for Nil {
    fn run_all() {}
}

impl<H, T> RunAll for Cons<H, T>
where
    H: Keyed,
    H::Inner: Step,
    T: RunAll,
{
    fn run_all() {
        <H::Inner as Step>::run();
        T::run_all();
    }
}

type Pipeline = TypeSort<Asc, BySize, tlist![Parse, Validate, Log]>;

assert_type_eq!(sort_types![Log, Parse, Validate], (Log, Parse, Validate));
assert_type_eq!(TupleOf<Pipeline>, (Log, Parse, Validate));

fn main() {
    // prints: log, parse, validate
    Pipeline::run_all();
}
