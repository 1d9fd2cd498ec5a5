use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// 消息的整数值不小于模数`n`
    MsgOutOfRange,

    /// message too long for the modulus and hash
    MsgTooLong,

    /// label exceeds the hash input limit
    LabelTooLong,

    /// OAEP: leading byte of the encoded message is not zero
    InitialNonzero,

    /// recomputed hash does not match the embedded one
    HashMismatch,

    /// OAEP: missing `0x01` separator after the padding string
    InvalidPs,

    /// PSS: the encoded message cannot hold the hash and salt
    HashTooLong,

    /// PSS: trailer byte is not `0xbc`
    InvalidLast,

    /// PSS: leftmost bit of the encoded message is set
    InvalidInit,

    /// PSS: `DB` is not `0x00..00 || 0x01 || salt`
    InvalidPd2,

    /// MGF1 mask longer than `2^32 * hLen`
    MaskTooLong,

    /// 不合法分组大小
    InvalidBlockSize { target: usize, real: usize },

    /// 不合法的密钥长度
    InvalidKeySize { target: usize, real: usize },

    InvalidPublicKey(String),

    InvalidPrivateKey(String),

    Other(String),
}

impl CipherError {
    /// Numeric code of the PKCS error taxonomy, `None` for errors outside of it.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::MsgOutOfRange => Some(1),
            Self::MsgTooLong => Some(2),
            Self::LabelTooLong => Some(3),
            Self::InitialNonzero => Some(4),
            Self::HashMismatch => Some(5),
            Self::InvalidPs => Some(6),
            Self::HashTooLong => Some(7),
            Self::InvalidLast => Some(8),
            Self::InvalidInit => Some(9),
            Self::InvalidPd2 => Some(10),
            _ => None,
        }
    }
}

impl Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MsgOutOfRange => f.write_str("rsa: message representative out of range"),
            Self::MsgTooLong => f.write_str("rsa: message too long"),
            Self::LabelTooLong => f.write_str("rsa-oaep: label too long"),
            Self::InitialNonzero => {
                f.write_str("rsa-oaep: leading byte of the encoded message is not zero")
            }
            Self::HashMismatch => f.write_str("rsa: hash mismatch"),
            Self::InvalidPs => f.write_str("rsa-oaep: invalid padding string"),
            Self::HashTooLong => f.write_str("rsa-pss: hash too long for the encoded message"),
            Self::InvalidLast => f.write_str("rsa-pss: invalid trailer byte"),
            Self::InvalidInit => f.write_str("rsa-pss: leftmost bit of the encoded message is set"),
            Self::InvalidPd2 => f.write_str("rsa-pss: invalid padding of the data block"),
            Self::MaskTooLong => f.write_str("mgf1: mask too long"),
            Self::InvalidBlockSize { target, real } => f.write_fmt(format_args!(
                "Invalid block data size `{real}` not match to target size `{target}`"
            )),
            Self::InvalidKeySize { target, real } => f.write_fmt(format_args!(
                "Invalid key size `{real}` not match to target size `{target}`"
            )),
            Self::InvalidPublicKey(s) | Self::InvalidPrivateKey(s) | Self::Other(s) => {
                f.write_str(s)
            }
        }
    }
}

impl Error for CipherError {}
