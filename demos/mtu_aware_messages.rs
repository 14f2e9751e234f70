//! Split message types into those that fit one MTU and those that need
//! fragmenting, then route them.

use std::marker::PhantomData;
use tola_tql::prelude::*;
use tola_tql::{key_of, NonEmpty, Unsigned};

/// Encoded size on the wire.
trait Wire {
    type Bytes: Unsigned;
}

struct WireSizeOf<T>(PhantomData<T>);

impl<T: Wire> Keyed for WireSizeOf<T> {
    type Inner = T;
    type Key = T::Bytes;
}

key_of!(WireSizeOf);

#[derive(Debug)]
struct MsgLogin {
    user: &'static str,
}

#[derive(Debug)]
struct MsgPing;

#[derive(Debug)]
struct MsgChunk {
    seq: u32,
}

#[derive(Debug)]
struct MsgTelemetry {
    cpu: u8,
}

impl Wire for MsgLogin { type Bytes = key!(48); }
impl Wire for MsgPing { type Bytes = key!(16); }
impl Wire for MsgChunk { type Bytes = key!(4096); }
impl Wire for MsgTelemetry { type Bytes = key!(256); }

#[derive(HasSize)]
#[size = 1200]
struct Mtu1200;

type Messages = tlist![MsgLogin, MsgPing, MsgChunk, MsgTelemetry];
type Grouped = PartitionByKey<Mtu1200, OpType<op!("<=")>, ByWireSizeOf, Messages>;

type FitsMtu = VariantOf<<Grouped as NonEmpty>::Head>;
type NeedsFrag = VariantOf<<<Grouped as NonEmpty>::Tail as NonEmpty>::Head>;

/// Send order for the single-datagram path: smallest first.
type SendOrder = TupleOf<TypeSort<Asc, ByWireSizeOf, Messages>>;

const SMALL_PAIR: u64 = sum_sizes![WireSizeOf<MsgLogin>, WireSizeOf<MsgPing>];
const _: () = assert!(SMALL_PAIR == 64);

fn send_datagram(msg: FitsMtu) -> String {
    msg.fold(handlers![
        |m: MsgLogin| format!("datagram login({})", m.user),
        |_: MsgPing| "datagram ping".to_string(),
        |m: MsgTelemetry| format!("datagram telemetry(cpu={}%)", m.cpu),
    ])
}

fn send_fragmented(msg: NeedsFrag) -> String {
    msg.fold(handlers![|m: MsgChunk| format!("fragmented chunk #{}", m.seq)])
}

fn main() {
    println!("{}", send_datagram(FitsMtu::inject(MsgLogin { user: "ada" })));
    println!("{}", send_datagram(FitsMtu::inject(MsgPing)));
    println!("{}", send_datagram(FitsMtu::inject(MsgTelemetry { cpu: 42 })));
    println!("{}", send_fragmented(NeedsFrag::inject(MsgChunk { seq: 7 })));

    println!("send order: {}", std::any::type_name::<SendOrder>());
    println!("login + ping = {SMALL_PAIR} bytes");
}
