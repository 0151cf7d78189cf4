// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! `decode(encode(v)) == v` for every supported shape, with byte-for-byte
//! agreement against `parity-scale-codec` where it defines the same layout.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use scale_extrinsic_decoder::{
    Block,
    codec::{Compact, Decode, Encode, I256, U256, decode_all},
    types::{
        BodyId, BodyPart, Call, Era, ExtrinsicSignature, JunctionV0, MultiAddress,
        MultiSignature, NetworkId, RawExtrinsic,
    },
};
use std::fmt::Debug;

/// Mirrors of the XCM v0 and address types, encoded by `parity-scale-codec`.
mod reference {
    use parity_scale_codec::Encode;

    #[derive(Encode)]
    pub enum NetworkId {
        Any,
        Named(Vec<u8>),
        Polkadot,
        Kusama,
    }

    #[derive(Encode)]
    pub enum BodyId {
        Unit,
        Named(Vec<u8>),
        Index(#[codec(compact)] u32),
        Executive,
        Technical,
        Legislative,
        Judicial,
    }

    #[derive(Encode)]
    pub enum BodyPart {
        Voice,
        Members {
            #[codec(compact)]
            count: u32,
        },
        Fraction {
            #[codec(compact)]
            nom: u32,
            #[codec(compact)]
            denom: u32,
        },
        AtLeastProportion {
            #[codec(compact)]
            nom: u32,
            #[codec(compact)]
            denom: u32,
        },
        MoreThanProportion {
            #[codec(compact)]
            nom: u32,
            #[codec(compact)]
            denom: u32,
        },
    }

    #[derive(Encode)]
    pub enum Junction {
        Parent,
        Parachain(#[codec(compact)] u32),
        AccountId32 {
            network: NetworkId,
            id: [u8; 32],
        },
        AccountIndex64 {
            network: NetworkId,
            #[codec(compact)]
            index: u64,
        },
        AccountKey20 {
            network: NetworkId,
            key: [u8; 20],
        },
        PalletInstance(u8),
        GeneralIndex(#[codec(compact)] u128),
        GeneralKey(Vec<u8>),
        OnlyChild,
        Plurality {
            id: BodyId,
            part: BodyPart,
        },
    }

    #[derive(Encode)]
    pub enum MultiAddress {
        Id([u8; 32]),
        Index(#[codec(compact)] u32),
        Raw(Vec<u8>),
        Address32([u8; 32]),
        Address20([u8; 20]),
    }
}

fn reference_network(network: &NetworkId) -> reference::NetworkId {
    match network {
        NetworkId::Any => reference::NetworkId::Any,
        NetworkId::Named(name) => reference::NetworkId::Named(name.clone()),
        NetworkId::Polkadot => reference::NetworkId::Polkadot,
        NetworkId::Kusama => reference::NetworkId::Kusama,
    }
}

fn reference_body_id(id: &BodyId) -> reference::BodyId {
    match id {
        BodyId::Unit => reference::BodyId::Unit,
        BodyId::Named(name) => reference::BodyId::Named(name.clone()),
        BodyId::Index(index) => reference::BodyId::Index(*index),
        BodyId::Executive => reference::BodyId::Executive,
        BodyId::Technical => reference::BodyId::Technical,
        BodyId::Legislative => reference::BodyId::Legislative,
        BodyId::Judicial => reference::BodyId::Judicial,
    }
}

fn reference_body_part(part: &BodyPart) -> reference::BodyPart {
    match *part {
        BodyPart::Voice => reference::BodyPart::Voice,
        BodyPart::Members { count } => reference::BodyPart::Members { count },
        BodyPart::Fraction { nom, denom } => reference::BodyPart::Fraction { nom, denom },
        BodyPart::AtLeastProportion { nom, denom } => {
            reference::BodyPart::AtLeastProportion { nom, denom }
        }
        BodyPart::MoreThanProportion { nom, denom } => {
            reference::BodyPart::MoreThanProportion { nom, denom }
        }
    }
}

fn reference_junction(junction: &JunctionV0) -> reference::Junction {
    match junction {
        JunctionV0::Parent => reference::Junction::Parent,
        JunctionV0::Parachain(id) => reference::Junction::Parachain(*id),
        JunctionV0::AccountId32 { network, id } => reference::Junction::AccountId32 {
            network: reference_network(network),
            id: *id,
        },
        JunctionV0::AccountIndex64 { network, index } => reference::Junction::AccountIndex64 {
            network: reference_network(network),
            index: *index,
        },
        JunctionV0::AccountKey20 { network, key } => reference::Junction::AccountKey20 {
            network: reference_network(network),
            key: *key,
        },
        JunctionV0::PalletInstance(index) => reference::Junction::PalletInstance(*index),
        JunctionV0::GeneralIndex(index) => reference::Junction::GeneralIndex(*index),
        JunctionV0::GeneralKey(key) => reference::Junction::GeneralKey(key.clone()),
        JunctionV0::OnlyChild => reference::Junction::OnlyChild,
        JunctionV0::Plurality { id, part } => reference::Junction::Plurality {
            id: reference_body_id(id),
            part: reference_body_part(part),
        },
    }
}

fn reference_address(address: &MultiAddress) -> reference::MultiAddress {
    match address {
        MultiAddress::Id(id) => reference::MultiAddress::Id(*id),
        MultiAddress::Index(index) => reference::MultiAddress::Index(*index),
        MultiAddress::Raw(raw) => reference::MultiAddress::Raw(raw.clone()),
        MultiAddress::Address32(address) => reference::MultiAddress::Address32(*address),
        MultiAddress::Address20(address) => reference::MultiAddress::Address20(*address),
    }
}

/// Round-trip `value` and, when given, compare its bytes with the reference.
fn check<T>(value: &T, reference: Option<Vec<u8>>)
where
    T: Encode + Decode + PartialEq + Debug,
{
    let encoded = value.encode();
    if let Some(expected) = reference {
        assert_eq!(encoded, expected, "encoding of {value:?}");
    }
    let decoded: T = decode_all(&encoded)
        .unwrap_or_else(|e| panic!("decoding {value:?} from 0x{}: {e}", hex::encode(&encoded)));
    assert_eq!(&decoded, value);
}

fn check_against_reference<T, R>(value: &T, reference: &R)
where
    T: Encode + Decode + PartialEq + Debug,
    R: parity_scale_codec::Encode,
{
    check(value, Some(parity_scale_codec::Encode::encode(reference)));
}

// ----------------------------------------------------------------------------
// Strategies
// ----------------------------------------------------------------------------

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..max)
}

fn byte_array<const N: usize>() -> impl Strategy<Value = [u8; N]> {
    vec(any::<u8>(), N).prop_map(|v| <[u8; N]>::try_from(v).expect("length is N"))
}

fn network_id() -> impl Strategy<Value = NetworkId> {
    prop_oneof![
        Just(NetworkId::Any),
        bytes(40).prop_map(NetworkId::Named),
        Just(NetworkId::Polkadot),
        Just(NetworkId::Kusama),
    ]
}

fn body_id() -> impl Strategy<Value = BodyId> {
    prop_oneof![
        Just(BodyId::Unit),
        bytes(40).prop_map(BodyId::Named),
        any::<u32>().prop_map(BodyId::Index),
        Just(BodyId::Executive),
        Just(BodyId::Technical),
        Just(BodyId::Legislative),
        Just(BodyId::Judicial),
    ]
}

fn body_part() -> impl Strategy<Value = BodyPart> {
    prop_oneof![
        Just(BodyPart::Voice),
        any::<u32>().prop_map(|count| BodyPart::Members { count }),
        any::<(u32, u32)>().prop_map(|(nom, denom)| BodyPart::Fraction { nom, denom }),
        any::<(u32, u32)>().prop_map(|(nom, denom)| BodyPart::AtLeastProportion { nom, denom }),
        any::<(u32, u32)>().prop_map(|(nom, denom)| BodyPart::MoreThanProportion { nom, denom }),
    ]
}

fn junction() -> impl Strategy<Value = JunctionV0> {
    prop_oneof![
        Just(JunctionV0::Parent),
        any::<u32>().prop_map(JunctionV0::Parachain),
        (network_id(), byte_array::<32>())
            .prop_map(|(network, id)| JunctionV0::AccountId32 { network, id }),
        (network_id(), any::<u64>())
            .prop_map(|(network, index)| JunctionV0::AccountIndex64 { network, index }),
        (network_id(), byte_array::<20>())
            .prop_map(|(network, key)| JunctionV0::AccountKey20 { network, key }),
        any::<u8>().prop_map(JunctionV0::PalletInstance),
        any::<u128>().prop_map(JunctionV0::GeneralIndex),
        bytes(64).prop_map(JunctionV0::GeneralKey),
        Just(JunctionV0::OnlyChild),
        (body_id(), body_part()).prop_map(|(id, part)| JunctionV0::Plurality { id, part }),
    ]
}

fn multi_address() -> impl Strategy<Value = MultiAddress> {
    prop_oneof![
        byte_array::<32>().prop_map(MultiAddress::Id),
        any::<u32>().prop_map(MultiAddress::Index),
        bytes(48).prop_map(MultiAddress::Raw),
        byte_array::<32>().prop_map(MultiAddress::Address32),
        byte_array::<20>().prop_map(MultiAddress::Address20),
    ]
}

fn multi_signature() -> impl Strategy<Value = MultiSignature> {
    prop_oneof![
        byte_array::<64>().prop_map(MultiSignature::Ed25519),
        byte_array::<64>().prop_map(MultiSignature::Sr25519),
        byte_array::<65>().prop_map(MultiSignature::Ecdsa),
    ]
}

fn era() -> impl Strategy<Value = Era> {
    let mortal = (2u32..=16)
        .prop_flat_map(|shift| {
            let period = 1u64 << shift;
            (Just(period), 0..period)
        })
        .prop_map(|(period, phase)| {
            let quantize_factor = (period >> 12).max(1);
            Era::Mortal {
                period,
                phase: phase / quantize_factor * quantize_factor,
            }
        });
    prop_oneof![Just(Era::Immortal), mortal]
}

fn extrinsic_signature() -> impl Strategy<Value = ExtrinsicSignature> {
    (
        multi_address(),
        multi_signature(),
        era(),
        any::<u64>(),
        any::<u128>(),
    )
        .prop_map(|(signer, signature, era, nonce, tip)| ExtrinsicSignature {
            signer,
            signature,
            era,
            nonce,
            tip,
        })
}

fn raw_extrinsic() -> impl Strategy<Value = RawExtrinsic> {
    (
        0u8..0x80,
        option::of(extrinsic_signature()),
        any::<(u8, u8)>(),
        bytes(128),
    )
        .prop_map(|(version, signature, call_index, args)| {
            let call = Call::new(call_index, args);
            match signature {
                Some(signature) => RawExtrinsic::signed(version, signature, call),
                None => RawExtrinsic::unsigned(version, call),
            }
        })
}

// ----------------------------------------------------------------------------
// Boundary values
// ----------------------------------------------------------------------------

macro_rules! check_int_boundaries {
    ($($t:ty),*) => {$(
        for value in [<$t>::MIN, <$t>::MIN + 1, 0, 1, <$t>::MAX - 1, <$t>::MAX] {
            check_against_reference(&value, &value);
        }
    )*};
}

#[test]
fn test_integer_boundaries() {
    check_int_boundaries!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
}

#[test]
fn test_compact_mode_boundaries() {
    let boundaries = [
        0u128,
        1,
        63,
        64,
        16_383,
        16_384,
        (1 << 30) - 1,
        1 << 30,
        u32::MAX as u128,
        u64::MAX as u128,
        (u64::MAX as u128) + 1,
        u128::MAX,
    ];
    for value in boundaries {
        check_against_reference(&Compact(value), &parity_scale_codec::Compact(value));
    }
    for value in [0u32, 63, 64, 16_383, 16_384, u32::MAX] {
        check_against_reference(&Compact(value), &parity_scale_codec::Compact(value));
    }
}

#[test]
fn test_wide_integer_boundaries() {
    for limbs in [
        [0u64; 4],
        [1, 0, 0, 0],
        [u64::MAX; 4],
        [0, 0, 0, 1 << 63],
    ] {
        check_against_reference(&U256(limbs), &limbs);
    }
    for value in [I256::MIN, I256::ZERO, I256::MAX, I256::from(-1i128)] {
        check(&value, None);
    }

    // compact integers past 128 bits stay in big-integer mode
    let mut two_pow_128 = vec![0x37];
    two_pow_128.extend_from_slice(&[0; 16]);
    two_pow_128.push(0x01);
    check(&Compact(U256([0, 0, 1, 0])), Some(two_pow_128));
    let mut max = vec![0x73];
    max.extend_from_slice(&[0xff; 32]);
    check(&Compact(U256([u64::MAX; 4])), Some(max));
}

#[test]
fn test_empty_sequences() {
    check_against_reference(&Vec::<u8>::new(), &Vec::<u8>::new());
    check_against_reference(&String::new(), &String::new());
    check(&JunctionV0::GeneralKey(Vec::new()), None);
    check(&MultiAddress::Raw(Vec::new()), None);
}

#[test]
fn test_option_bool_uses_general_option_layout() {
    // parity-scale-codec packs Option<bool> into one byte; this codec does not.
    check(&Some(true), Some(vec![1, 1]));
    check(&Some(false), Some(vec![1, 0]));
    check(&None::<bool>, Some(vec![0]));
}

#[test]
fn test_junction_exemplar_encodings() {
    check(&JunctionV0::Parent, Some(vec![0x00]));
    check(&JunctionV0::PalletInstance(4), Some(vec![0x05, 0x04]));
    check(&JunctionV0::OnlyChild, Some(vec![0x08]));
}

// ----------------------------------------------------------------------------
// Properties
// ----------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_fixed_width_integers(
        a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>(), e in any::<u128>(),
        f in any::<i8>(), g in any::<i16>(), h in any::<i32>(), i in any::<i64>(), j in any::<i128>(),
        flag in any::<bool>(),
    ) {
        check_against_reference(&a, &a);
        check_against_reference(&b, &b);
        check_against_reference(&c, &c);
        check_against_reference(&d, &d);
        check_against_reference(&e, &e);
        check_against_reference(&f, &f);
        check_against_reference(&g, &g);
        check_against_reference(&h, &h);
        check_against_reference(&i, &i);
        check_against_reference(&j, &j);
        check_against_reference(&flag, &flag);
    }

    #[test]
    fn prop_compact(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>(), e in any::<u128>()) {
        check_against_reference(&Compact(a), &parity_scale_codec::Compact(a));
        check_against_reference(&Compact(b), &parity_scale_codec::Compact(b));
        check_against_reference(&Compact(c), &parity_scale_codec::Compact(c));
        check_against_reference(&Compact(d), &parity_scale_codec::Compact(d));
        check_against_reference(&Compact(e), &parity_scale_codec::Compact(e));
    }

    #[test]
    fn prop_wide_integers(limbs in any::<[u64; 4]>(), raw in byte_array::<32>()) {
        check_against_reference(&U256(limbs), &limbs);
        check(&Compact(U256(limbs)), None);
        let low = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
        check_against_reference(&Compact(U256([limbs[0], limbs[1], 0, 0])), &parity_scale_codec::Compact(low));
        check(&I256::from_le_bytes(raw), Some(raw.to_vec()));
    }

    #[test]
    fn prop_sequences_and_text(
        words in vec(any::<u16>(), 0..64),
        nested in vec(vec(any::<u32>(), 0..8), 0..8),
        text in ".{0,48}",
    ) {
        check_against_reference(&words, &words);
        check_against_reference(&nested, &nested);
        check_against_reference(&text, &text);
    }

    #[test]
    fn prop_options_arrays_and_tuples(
        maybe in option::of(any::<u64>()),
        maybe_text in option::of(".{0,16}"),
        array in byte_array::<32>(),
        words in any::<[u16; 4]>(),
        tuple in (any::<u8>(), ".{0,16}", option::of(any::<u32>())),
    ) {
        check_against_reference(&maybe, &maybe);
        check_against_reference(&maybe_text, &maybe_text);
        check_against_reference(&array, &array);
        check_against_reference(&words, &words);
        check_against_reference(&tuple, &tuple);
    }

    #[test]
    fn prop_junction(junction in junction()) {
        check_against_reference(&junction, &reference_junction(&junction));
    }

    #[test]
    fn prop_junction_path(path in vec(junction(), 0..4)) {
        let reference: Vec<_> = path.iter().map(reference_junction).collect();
        check_against_reference(&path, &reference);
    }

    #[test]
    fn prop_multi_address(address in multi_address()) {
        check_against_reference(&address, &reference_address(&address));
    }

    #[test]
    fn prop_signature_block(signature in extrinsic_signature()) {
        check(&signature, None);
    }

    #[test]
    fn prop_raw_extrinsic(extrinsic in raw_extrinsic()) {
        check(&extrinsic, None);

        let opaque = [extrinsic.encode()];
        prop_assert_eq!(opaque[0].len(), extrinsic.size_hint());
        let block = Block::from_opaque(&opaque).unwrap();
        prop_assert_eq!(&block.extrinsics, &vec![extrinsic]);
    }

    #[test]
    fn prop_block(extrinsics in vec(raw_extrinsic(), 0..6)) {
        check(&Block::new(extrinsics), None);
    }
}
