// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry-driven extrinsic decoding.
//!
//! For each extrinsic, in block order: the envelope (version, optional
//! signature block, call index) is already split by [`Block`]; the call index
//! is resolved against the [`CallRegistry`] and each registered field is
//! decoded from the argument bytes in declaration order. Any failure aborts
//! the whole batch and no partial output is returned.

mod error;
mod extrinsic;

pub use error::ParseError;
pub use extrinsic::{CallFields, Extrinsic};

use crate::codec::{ByteCursor, DecodeOptions};
use crate::registry::CallRegistry;
use crate::types::{Block, RawExtrinsic};
use crate::utils::run_with_concurrency_collect;
use serde::Deserialize;
use std::sync::Arc;

/// What to do with argument bytes left over after the last registered field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBytesPolicy {
    /// Log and continue.
    #[default]
    Ignore,
    /// Fail with [`ParseError::TrailingBytes`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    pub decode: DecodeOptions,
    pub trailing_bytes: TrailingBytesPolicy,
    /// Upper bound on extrinsics per block; `None` for no limit.
    pub max_extrinsics: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtrinsicParser {
    options: ParserOptions,
}

impl ExtrinsicParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Decode every extrinsic of `block`, in order.
    ///
    /// Returns exactly one record per extrinsic, or the first error in block
    /// order.
    pub fn parse_extrinsics(
        &self,
        registry: &CallRegistry,
        block: &Block,
    ) -> Result<Vec<Extrinsic>, ParseError> {
        self.check_batch_size(block.len())?;
        let extrinsics = block
            .extrinsics
            .iter()
            .enumerate()
            .map(|(index, raw)| self.parse_extrinsic(registry, index, raw))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = extrinsics.len(), "parsed extrinsics");
        Ok(extrinsics)
    }

    /// Split opaque, length-prefixed extrinsics into envelopes and decode them.
    pub fn parse_opaque<B: AsRef<[u8]>>(
        &self,
        registry: &CallRegistry,
        opaque: &[B],
    ) -> Result<Vec<Extrinsic>, ParseError> {
        self.check_batch_size(opaque.len())?;
        let block = Block::from_opaque_with(opaque, self.options.decode)?;
        self.parse_extrinsics(registry, &block)
    }

    /// Like [`ExtrinsicParser::parse_extrinsics`], decoding up to
    /// `max_concurrent` extrinsics at a time on the blocking thread pool.
    ///
    /// Output order and error selection are identical to the sequential parse.
    pub async fn parse_extrinsics_concurrent(
        &self,
        registry: Arc<CallRegistry>,
        block: Block,
        max_concurrent: usize,
    ) -> Result<Vec<Extrinsic>, ParseError> {
        self.check_batch_size(block.len())?;
        let parser = *self;
        let tasks = block
            .extrinsics
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let registry = registry.clone();
                async move {
                    tokio::task::spawn_blocking(move || {
                        parser.parse_extrinsic(&registry, index, &raw)
                    })
                    .await
                    .map_err(|e| ParseError::Worker {
                        index,
                        message: e.to_string(),
                    })?
                }
            });
        let extrinsics = run_with_concurrency_collect(max_concurrent, tasks).await?;
        tracing::debug!(
            count = extrinsics.len(),
            max_concurrent,
            "parsed extrinsics concurrently"
        );
        Ok(extrinsics)
    }

    /// Decode a single extrinsic at position `index` of its block.
    pub fn parse_extrinsic(
        &self,
        registry: &CallRegistry,
        index: usize,
        raw: &RawExtrinsic,
    ) -> Result<Extrinsic, ParseError> {
        let call_index = raw.call.call_index;
        let descriptor = registry
            .lookup(call_index)
            .ok_or(ParseError::CallNotRegistered { index, call_index })?;

        let mut cursor = ByteCursor::with_options(&raw.call.args, self.options.decode);
        let mut call_fields = CallFields::with_capacity(descriptor.fields.len());
        for field in &descriptor.fields {
            let value = field.ty.decode(&mut cursor).map_err(|source| {
                ParseError::FieldDecodeFailed {
                    index,
                    call: descriptor.name.clone(),
                    field: field.name.clone(),
                    source,
                }
            })?;
            tracing::trace!(
                index,
                field = %field.name,
                position = cursor.position(),
                "decoded field"
            );
            call_fields.push(field.name.clone(), value);
        }

        if !cursor.is_empty() {
            let remaining = cursor.remaining();
            match self.options.trailing_bytes {
                TrailingBytesPolicy::Reject => {
                    return Err(ParseError::TrailingBytes {
                        index,
                        call: descriptor.name.clone(),
                        remaining,
                    });
                }
                TrailingBytesPolicy::Ignore => {
                    tracing::warn!(
                        index,
                        call = %descriptor.name,
                        remaining,
                        "ignoring unread call argument bytes"
                    );
                }
            }
        }

        tracing::trace!(
            index,
            call = %descriptor.name,
            %call_index,
            signed = raw.is_signed(),
            "parsed extrinsic"
        );
        Ok(Extrinsic {
            name: descriptor.name.clone(),
            version: raw.version,
            signature: raw.signature.clone(),
            call_index,
            call_fields,
        })
    }

    fn check_batch_size(&self, count: usize) -> Result<(), ParseError> {
        match self.options.max_extrinsics {
            Some(max) if count > max => Err(ParseError::TooManyExtrinsics { count, max }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Compact, DecodeError, Encode, U256};
    use crate::registry::{FieldDescriptor, FieldType, TypeDescriptor};
    use crate::types::{
        BlockError, Call, CallIndex, Era, ExtrinsicSignature, MultiAddress, MultiSignature,
    };
    use crate::value::DecodedValue;

    fn registry() -> CallRegistry {
        CallRegistry::from_entries([
            (
                CallIndex::new(0, 1),
                TypeDescriptor::new(
                    "extrinsic_1",
                    vec![
                        FieldDescriptor::new("bool_field", FieldType::Bool),
                        FieldDescriptor::new("byte_field", FieldType::U8),
                        FieldDescriptor::new("string_field", FieldType::Text),
                    ],
                ),
            ),
            (
                CallIndex::new(5, 0),
                TypeDescriptor::new(
                    "transfer",
                    vec![
                        FieldDescriptor::new("dest", FieldType::MultiAddress),
                        FieldDescriptor::new("value", FieldType::Compact),
                    ],
                ),
            ),
        ])
        .unwrap()
    }

    fn extrinsic_1(flag: bool, byte: u8, text: &str) -> RawExtrinsic {
        let mut args = Vec::new();
        flag.encode_to(&mut args);
        byte.encode_to(&mut args);
        text.encode_to(&mut args);
        RawExtrinsic::unsigned(1, Call::new((0, 1), args))
    }

    #[test]
    fn test_parse_single_unsigned_extrinsic() {
        let block = Block::new(vec![extrinsic_1(true, 32, "test")]);
        let parsed = ExtrinsicParser::default()
            .parse_extrinsics(&registry(), &block)
            .unwrap();

        assert_eq!(parsed.len(), 1);
        let extrinsic = &parsed[0];
        assert_eq!(extrinsic.name, "extrinsic_1");
        assert_eq!(extrinsic.version, 1);
        assert!(extrinsic.signature.is_none());
        assert_eq!(extrinsic.call_index, CallIndex::new(0, 1));
        assert_eq!(
            extrinsic.call_fields.get("bool_field"),
            Some(&DecodedValue::Bool(true))
        );
        assert_eq!(
            extrinsic.call_fields.get("byte_field"),
            Some(&DecodedValue::U8(32))
        );
        assert_eq!(
            extrinsic.call_fields.get("string_field"),
            Some(&DecodedValue::Text("test".to_string()))
        );
    }

    #[test]
    fn test_parse_signed_transfer() {
        let signature = ExtrinsicSignature {
            signer: MultiAddress::Id([1; 32]),
            signature: MultiSignature::Sr25519([2; 64]),
            era: Era::Mortal {
                period: 64,
                phase: 19,
            },
            nonce: 7,
            tip: 0,
        };
        let mut args = MultiAddress::Id([3; 32]).encode();
        Compact(1_000_000_000_000u128).encode_to(&mut args);
        let raw = RawExtrinsic::signed(4, signature.clone(), Call::new((5, 0), args));

        let parsed = ExtrinsicParser::default()
            .parse_opaque(&registry(), &[raw.encode()])
            .unwrap();
        assert!(parsed[0].is_signed());
        assert_eq!(parsed[0].signature, Some(signature));
        assert_eq!(
            parsed[0].call_fields.get("value"),
            Some(&DecodedValue::Compact(U256::from(1_000_000_000_000u64)))
        );
    }

    #[test]
    fn test_unregistered_call_aborts_batch() {
        let block = Block::new(vec![
            extrinsic_1(true, 1, "a"),
            RawExtrinsic::unsigned(1, Call::new((9, 9), vec![])),
        ]);
        let err = ExtrinsicParser::default()
            .parse_extrinsics(&registry(), &block)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::CallNotRegistered { index: 1, call_index } if call_index == CallIndex::new(9, 9)
        ));
    }

    #[test]
    fn test_truncated_arguments_name_the_field() {
        let mut raw = extrinsic_1(true, 32, "test");
        raw.call.args.truncate(4);
        let block = Block::new(vec![raw]);
        let err = ExtrinsicParser::default()
            .parse_extrinsics(&registry(), &block)
            .unwrap_err();
        match &err {
            ParseError::FieldDecodeFailed {
                index, field, source, ..
            } => {
                assert_eq!(*index, 0);
                assert_eq!(field, "string_field");
                assert!(matches!(source, DecodeError::UnexpectedEndOfInput { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.extrinsic_index(), Some(0));
        assert!(err.decode_error().unwrap().is_end_of_input());
    }

    #[test]
    fn test_kth_malformed_extrinsic_fails_whole_batch() {
        let mut extrinsics: Vec<_> = (0..5).map(|i| extrinsic_1(true, i, "ok")).collect();
        // invalid bool byte in the fourth extrinsic
        extrinsics[3].call.args[0] = 2;
        let err = ExtrinsicParser::default()
            .parse_extrinsics(&registry(), &Block::new(extrinsics))
            .unwrap_err();
        assert_eq!(err.extrinsic_index(), Some(3));
        assert!(err.decode_error().unwrap().is_malformed());
    }

    #[test]
    fn test_trailing_argument_bytes_policy() {
        let mut raw = extrinsic_1(false, 0, "");
        raw.call.args.push(0xff);
        let block = Block::new(vec![raw]);

        let parsed = ExtrinsicParser::default()
            .parse_extrinsics(&registry(), &block)
            .unwrap();
        assert_eq!(parsed[0].call_fields.len(), 3);

        let strict = ExtrinsicParser::new(ParserOptions {
            trailing_bytes: TrailingBytesPolicy::Reject,
            ..Default::default()
        });
        let err = strict.parse_extrinsics(&registry(), &block).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TrailingBytes {
                index: 0,
                remaining: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_max_extrinsics() {
        let parser = ExtrinsicParser::new(ParserOptions {
            max_extrinsics: Some(1),
            ..Default::default()
        });
        let block = Block::new(vec![extrinsic_1(true, 1, "a"), extrinsic_1(true, 2, "b")]);
        let err = parser.parse_extrinsics(&registry(), &block).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TooManyExtrinsics { count: 2, max: 1 }
        ));
        assert_eq!(err.extrinsic_index(), None);
    }

    #[test]
    fn test_opaque_envelope_error_carries_index() {
        let good = extrinsic_1(true, 1, "a").encode();
        let err = ExtrinsicParser::default()
            .parse_opaque(&registry(), &[good, vec![0x00]])
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Block(BlockError::Envelope { index: 1, .. })
        ));
    }

    #[test]
    fn test_lenient_compact_policy_reaches_fields() {
        // 1 encoded in two-byte mode
        let args = [MultiAddress::Index(0).encode(), vec![0b0000_0101, 0x00]].concat();
        let block = Block::new(vec![RawExtrinsic::unsigned(4, Call::new((5, 0), args))]);

        let err = ExtrinsicParser::default()
            .parse_extrinsics(&registry(), &block)
            .unwrap_err();
        assert!(err.decode_error().unwrap().is_malformed());

        let lenient = ExtrinsicParser::new(ParserOptions {
            decode: DecodeOptions::lenient(),
            ..Default::default()
        });
        let parsed = lenient.parse_extrinsics(&registry(), &block).unwrap();
        assert_eq!(
            parsed[0].call_fields.get("value"),
            Some(&DecodedValue::Compact(U256::one()))
        );
    }

    #[tokio::test]
    async fn test_concurrent_parse_matches_sequential() {
        let registry = Arc::new(registry());
        let block = Block::new((0..20).map(|i| extrinsic_1(i % 2 == 0, i, "x")).collect());
        let parser = ExtrinsicParser::default();

        let sequential = parser.parse_extrinsics(&registry, &block).unwrap();
        let concurrent = parser
            .parse_extrinsics_concurrent(registry, block, 4)
            .await
            .unwrap();
        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_concurrent_parse_reports_earliest_failure() {
        let registry = Arc::new(registry());
        let mut extrinsics: Vec<_> = (0..10).map(|i| extrinsic_1(true, i, "x")).collect();
        extrinsics[7].call.call_index = CallIndex::new(7, 7);
        extrinsics[2].call.args.clear();
        let err = ExtrinsicParser::default()
            .parse_extrinsics_concurrent(registry, Block::new(extrinsics), 3)
            .await
            .unwrap_err();
        assert_eq!(err.extrinsic_index(), Some(2));
    }
}
