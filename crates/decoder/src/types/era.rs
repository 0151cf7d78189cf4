// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction mortality.
//!
//! An immortal era is the single byte `0x00`. A mortal era is two bytes
//! (little-endian u16): the low four bits hold `log2(period) - 1`, the upper
//! twelve bits the phase divided by the quantize factor
//! `max(period >> 12, 1)`.

use crate::codec::{ByteCursor, Decode, DecodeError, Encode, Malformed};
use serde::Serialize;

const MIN_PERIOD: u64 = 4;
const MAX_PERIOD: u64 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Immortal,
    /// `period` is a power of two in `4..=65536`, `phase < period`.
    Mortal { period: u64, phase: u64 },
}

impl Era {
    /// Build a mortal era valid for roughly `period` blocks from `current`.
    pub fn mortal(period: u64, current: u64) -> Self {
        let period = period
            .checked_next_power_of_two()
            .unwrap_or(MAX_PERIOD)
            .clamp(MIN_PERIOD, MAX_PERIOD);
        let phase = current % period;
        let quantize_factor = (period >> 12).max(1);
        Era::Mortal {
            period,
            phase: phase / quantize_factor * quantize_factor,
        }
    }

    pub fn is_immortal(&self) -> bool {
        matches!(self, Era::Immortal)
    }
}

impl Encode for Era {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            Era::Immortal => dest.push(0),
            Era::Mortal { period, phase } => {
                let quantize_factor = (*period >> 12).max(1);
                let low = (period.trailing_zeros().saturating_sub(1)).clamp(1, 15) as u16;
                let high = ((*phase / quantize_factor) << 4) as u16;
                dest.extend_from_slice(&(low | high).to_le_bytes());
            }
        }
    }

    fn size_hint(&self) -> usize {
        if self.is_immortal() { 1 } else { 2 }
    }
}

impl Decode for Era {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let first = cursor.read_byte()?;
        if first == 0 {
            return Ok(Era::Immortal);
        }
        let second = cursor.read_byte()?;
        let encoded = u64::from(first) | (u64::from(second) << 8);
        let period = 2u64 << (encoded % (1 << 4));
        let quantize_factor = (period >> 12).max(1);
        let phase = (encoded >> 4) * quantize_factor;
        if period >= MIN_PERIOD && phase < period {
            Ok(Era::Mortal { period, phase })
        } else {
            Err(Malformed::InvalidEra { period, phase }.into())
        }
    }
}

/// Era information in REST API form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immortal_era: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortal_era: Option<Vec<String>>,
}

impl From<&Era> for EraInfo {
    fn from(era: &Era) -> Self {
        match era {
            Era::Immortal => EraInfo {
                immortal_era: Some("0x00".to_string()),
                mortal_era: None,
            },
            Era::Mortal { period, phase } => EraInfo {
                immortal_era: None,
                mortal_era: Some(vec![period.to_string(), phase.to_string()]),
            },
        }
    }
}

impl Serialize for Era {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EraInfo::from(self).serialize(serializer)
    }
}
