// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod block;
mod call_index;
mod era;
mod signature;
pub mod xcm;

pub use block::{Block, BlockError, Call, RawExtrinsic, SIGNED_BIT, VERSION_MASK};
pub use call_index::CallIndex;
pub use era::{Era, EraInfo};
pub use signature::{ExtrinsicSignature, MultiAddress, MultiSignature};
pub use xcm::{BodyId, BodyPart, JunctionV0, NetworkId};
