//! Minimal script building
//!
//! Only the pieces needed to reproduce the genesis coinbase input: opcode
//! pushes for small integers, minimal signed-magnitude number encoding, and
//! length-prefixed data pushes.

/// Push the negated value one
pub const OP_1NEGATE: u8 = 0x4f;

/// First of the small-integer push opcodes (OP_1 through OP_16)
pub const OP_1: u8 = 0x51;

/// Next byte holds the push length
pub const OP_PUSHDATA1: u8 = 0x4c;

/// Next two bytes (LE) hold the push length
pub const OP_PUSHDATA2: u8 = 0x4d;

/// Next four bytes (LE) hold the push length
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Builder for raw script byte sequences
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Create an empty script
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append a bare opcode
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.bytes.push(opcode);
        self
    }

    /// Push an integer.
    ///
    /// -1 and 1..=16 use their dedicated opcodes; everything else is pushed
    /// as minimally encoded number bytes (zero encodes to an empty push).
    pub fn push_int(self, n: i64) -> Self {
        if n == -1 {
            self.push_opcode(OP_1NEGATE)
        } else if (1..=16).contains(&n) {
            self.push_opcode(OP_1 + (n as u8) - 1)
        } else {
            let encoded = encode_number(n);
            self.push_data(&encoded)
        }
    }

    /// Push raw data with the smallest length prefix that fits
    pub fn push_data(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(OP_PUSHDATA1);
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    /// Finish and take the script bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Minimal signed-magnitude little-endian number encoding
///
/// The sign lives in the high bit of the top byte; a magnitude whose top
/// byte already has that bit set gains a padding byte.
fn encode_number(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut result = Vec::new();

    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    if result.last().is_some_and(|b| b & 0x80 != 0) {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        let last = result.len() - 1;
        result[last] |= 0x80;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_number_zero_is_empty() {
        assert!(encode_number(0).is_empty());
    }

    #[test]
    fn test_encode_number_small_values() {
        assert_eq!(encode_number(42), vec![0x2a]);
        assert_eq!(encode_number(127), vec![0x7f]);
        assert_eq!(encode_number(128), vec![0x80, 0x00]);
        assert_eq!(encode_number(255), vec![0xff, 0x00]);
        assert_eq!(encode_number(256), vec![0x00, 0x01]);
    }

    #[test]
    fn test_encode_number_negative() {
        assert_eq!(encode_number(-42), vec![0xaa]);
        assert_eq!(encode_number(-128), vec![0x80, 0x80]);
    }

    #[test]
    fn test_push_int_zero_is_empty_push() {
        let script = ScriptBuilder::new().push_int(0).into_bytes();
        assert_eq!(script, vec![0x00]);
    }

    #[test]
    fn test_push_int_small_opcodes() {
        let script = ScriptBuilder::new().push_int(1).push_int(16).push_int(-1).into_bytes();
        assert_eq!(script, vec![0x51, 0x60, OP_1NEGATE]);
    }

    #[test]
    fn test_push_int_seventeen_uses_data_push() {
        let script = ScriptBuilder::new().push_int(17).into_bytes();
        assert_eq!(script, vec![0x01, 0x11]);
    }

    #[test]
    fn test_push_data_direct_length() {
        let script = ScriptBuilder::new().push_data(&[0xaa; 60]).into_bytes();
        assert_eq!(script.len(), 61);
        assert_eq!(script[0], 0x3c);
    }

    #[test]
    fn test_push_data_pushdata1_boundary() {
        let script = ScriptBuilder::new().push_data(&[0xbb; 76]).into_bytes();
        assert_eq!(script[0], OP_PUSHDATA1);
        assert_eq!(script[1], 76);
        assert_eq!(script.len(), 78);
    }

    #[test]
    fn test_push_data_pushdata2() {
        let script = ScriptBuilder::new().push_data(&[0xcc; 300]).into_bytes();
        assert_eq!(script[0], OP_PUSHDATA2);
        assert_eq!(&script[1..3], &300u16.to_le_bytes());
    }

    #[test]
    fn test_genesis_style_input_script() {
        let message = b"Fight for segwit! BTU Bugs Unliimted - Ver has lost his mind";
        let script = ScriptBuilder::new()
            .push_int(0)
            .push_int(42)
            .push_data(message)
            .into_bytes();

        assert_eq!(script.len(), 64);
        assert_eq!(&script[..4], &[0x00, 0x01, 0x2a, 0x3c]);
        assert_eq!(&script[4..], message.as_slice());
    }
}
