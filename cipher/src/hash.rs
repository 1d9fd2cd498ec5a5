//! SHA-2 hash provider for the RSA padding schemes.
//!
//! `HashId` is the runtime selector (the legacy numeric index survives through `TryFrom<u8>`),
//! `Sha2Hash` is the compile-time view used by the generic codecs.
use crate::CipherError;
use serde::{Deserialize, Serialize};
use sha2::digest::typenum::Unsigned;
use sha2::digest::{FixedOutputReset, OutputSizeUser};
use sha2::Digest;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// 哈希输入长度上限(字节)
pub const MAX_HASH_INPUT_LEN: u64 = (1u64 << 61) - 1;

mod private {
    pub trait Sealed {}
}

/// A SHA-2 variant usable by MGF1, OAEP and PSS.
pub trait Sha2Hash: Digest + FixedOutputReset + private::Sealed {
    const ID: HashId;
    /// digest length in bytes
    const HLEN: usize = Self::ID.digest_len();
}

macro_rules! impl_hash_id {
    ($NAME: ident, $REPR: ty,
     $([$ITEM: ident = $VAL: literal, $HASH: ty, $LEN: literal, $DISPLAY: literal]),+) => {
        #[repr($REPR)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum $NAME {
            $(#[serde(rename = $DISPLAY)] $ITEM = $VAL,)+
        }

        impl TryFrom<$REPR> for $NAME {
            type Error = CipherError;

            fn try_from(value: $REPR) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == Self::$ITEM as $REPR => Ok(Self::$ITEM),)+
                    _ => Err(CipherError::Other(format!("{} is no valid hash index", value))),
                }
            }
        }

        impl $NAME {
            pub const ALL: &'static [$NAME] = &[$(Self::$ITEM),+];

            /// digest length in bytes
            pub const fn digest_len(self) -> usize {
                match self {
                    $(Self::$ITEM => $LEN,)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$ITEM => $DISPLAY,)+
                }
            }

            pub fn digest(self, data: &[u8]) -> Vec<u8> {
                match self {
                    $(Self::$ITEM => <$HASH as Digest>::digest(data).to_vec(),)+
                }
            }
        }

        $(
            impl private::Sealed for $HASH {}

            impl Sha2Hash for $HASH {
                const ID: $NAME = $NAME::$ITEM;
            }

            const _: () =
                assert!(<<$HASH as OutputSizeUser>::OutputSize as Unsigned>::USIZE == $LEN);
        )+
    };
}

impl_hash_id!(
    HashId,
    u8,
    [SHA224 = 0, Sha224, 28, "SHA224"],
    [SHA256 = 1, Sha256, 32, "SHA256"],
    [SHA384 = 2, Sha384, 48, "SHA384"],
    [SHA512 = 3, Sha512, 64, "SHA512"],
    [SHA512_224 = 4, Sha512_224, 28, "SHA512/224"],
    [SHA512_256 = 5, Sha512_256, 32, "SHA512/256"]
);

impl HashId {
    /// Longest input in bytes accepted for labels and messages.
    pub const fn max_input_len(self) -> u64 {
        MAX_HASH_INPUT_LEN
    }
}

impl Default for HashId {
    fn default() -> Self {
        Self::SHA256
    }
}

impl Display for HashId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashId {
    type Err = CipherError;

    /// `SHA512/224`, `sha512_224` and `SHA-512/224` all name the same function.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase().replace(['-', '_'], "");
        let name = match name.as_str() {
            "SHA512224" => "SHA512/224",
            "SHA512256" => "SHA512/256",
            x => x,
        };

        Self::ALL
            .iter()
            .copied()
            .find(|h| h.name() == name)
            .ok_or_else(|| CipherError::Other(format!("unsupported hash function `{}`", s)))
    }
}

/// Run `$body` with the type alias `$H` bound to the SHA-2 type selected by `$id`.
///
/// ```ignore
/// let hlen = cipher::with_hash!(HashId::SHA384, H => <H as cipher::Sha2Hash>::HLEN);
/// ```
#[macro_export]
macro_rules! with_hash {
    ($id: expr, $H: ident => $body: expr) => {
        match $id {
            $crate::HashId::SHA224 => {
                type $H = $crate::hash::Sha224;
                $body
            }
            $crate::HashId::SHA256 => {
                type $H = $crate::hash::Sha256;
                $body
            }
            $crate::HashId::SHA384 => {
                type $H = $crate::hash::Sha384;
                $body
            }
            $crate::HashId::SHA512 => {
                type $H = $crate::hash::Sha512;
                $body
            }
            $crate::HashId::SHA512_224 => {
                type $H = $crate::hash::Sha512_224;
                $body
            }
            $crate::HashId::SHA512_256 => {
                type $H = $crate::hash::Sha512_256;
                $body
            }
        }
    };
}
