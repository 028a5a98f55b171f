//! Compact difficulty encoding
//!
//! Conversions between the 32-bit compact form carried in block headers and
//! the full 256-bit target. The per-network difficulty ceilings are stored in
//! compact form and expanded on demand.

/// Convert compact difficulty to a 256-bit big-endian target
pub fn compact_to_target(compact: u32) -> [u8; 32] {
    let exponent = (compact >> 24) as usize;
    let mantissa = compact & 0x007FFFFF;

    let mut target = [0u8; 32];

    if exponent == 0 || exponent > 32 {
        return target;
    }

    let negative = (compact & 0x00800000) != 0;
    if negative {
        return target; // Negative targets are invalid
    }

    if exponent <= 3 {
        let value = mantissa >> (8 * (3 - exponent));
        target[31] = (value & 0xFF) as u8;
        if exponent >= 2 {
            target[30] = ((value >> 8) & 0xFF) as u8;
        }
        if exponent >= 3 {
            target[29] = ((value >> 16) & 0xFF) as u8;
        }
    } else {
        let start = 32 - exponent;
        target[start] = ((mantissa >> 16) & 0xFF) as u8;
        if start + 1 < 32 {
            target[start + 1] = ((mantissa >> 8) & 0xFF) as u8;
        }
        if start + 2 < 32 {
            target[start + 2] = (mantissa & 0xFF) as u8;
        }
    }

    target
}

/// Convert a 256-bit big-endian target to compact difficulty
pub fn target_to_compact(target: &[u8; 32]) -> u32 {
    // Find the first non-zero byte
    let mut first_nonzero = 32;
    for (i, &byte) in target.iter().enumerate() {
        if byte != 0 {
            first_nonzero = i;
            break;
        }
    }

    if first_nonzero == 32 {
        return 0;
    }

    let exponent = (32 - first_nonzero) as u32;

    let mut mantissa: u32 = (target[first_nonzero] as u32) << 16;
    if first_nonzero + 1 < 32 {
        mantissa |= (target[first_nonzero + 1] as u32) << 8;
    }
    if first_nonzero + 2 < 32 {
        mantissa |= target[first_nonzero + 2] as u32;
    }

    // A set high bit would read back as the sign, so shift into the next size
    if mantissa & 0x00800000 != 0 {
        mantissa >>= 8;
        return ((exponent + 1) << 24) | mantissa;
    }

    (exponent << 24) | mantissa
}
