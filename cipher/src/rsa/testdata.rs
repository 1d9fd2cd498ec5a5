//! Fixed keys and known-answer vectors, cross-checked against an independent PKCS #1 v2.2 implementation.
use crate::rsa::{PrivateKey, PublicKey};

// 2048-bit modulus, e = 65537
pub(crate) const N_2048: &str = concat!(
    "9c0cf2da999c7aa2b9cc6a58236580c04a2c2710e1bc70e2bda105869ef0ff30",
    "aed7be14044dad23d771848fc841f46d764f77b9c2f0b0f56f3a8a0dddc202f3",
    "c124b78ed850c088c38d3eb789fec83ebfca66be645aa82588742892b3ab1779",
    "3a71075ab0c54d94ded30e36e479ea7d3fdfe55e5842e1af8a07c607a213efd6",
    "8638df62d9192ef00dd808cddc1bda0de7d905888ef88f9d68ccfac9fe307760",
    "fbd35af30be3b805c85de4e4b299a13a637d0658c3b92c5a505b5d525223e5d6",
    "2e6e604ac05c30baac225411c9b4a3cccd2ebcf9a9e9894b6aea684fd4da45af",
    "9d2d94ad9a76762aad4feb75c3baed1843077607d6177662f23c376b59a1f01d",
);

pub(crate) const D_2048: &str = concat!(
    "03efe9b2ad3c7ef59b1576bb698d368de37130bd22cce3d63cad92db9e27fb70",
    "498104f931509a65349ad71adf95166b2a987faf4ea54ef9aa4842526e3d6660",
    "ab0757a04181ec11a74969832cf6a22bbf2006ae980e977e76ee6355ac35cd5e",
    "5024a8e8575c6b042e090a2b456174129be974ba88248bd82775e1bfb08dab37",
    "e6cde1aa275bbb57f79b71534108d4a4a44ac0ca39e359e1aba1d3cbce8d3916",
    "f6dd9e9d7abe32af072b340eb07c5d8f87b6a790705daca7218aa886b94dfc25",
    "319b1b29a58408fb2516990911b9ee6a7d336e14476818a4c0f4d38b5ddb0768",
    "194c0eeeac6613459ceaf63dd0a8c47ec57c0a7bed791c43e985406b93124cab",
);

pub(crate) const E: u32 = 65537;

// 1024-bit modulus, e = 65537
pub(crate) const N_1024: &str = concat!(
    "d20d179e8cce0fb8718eeace04b677fd08a96cc34469393500686a6e6c6b0949",
    "5fc8509a5766907013d9d226a46e53376b52398102c712d370115502735376b8",
    "0b2eaeee7ae7860dff338d2cd90126944d9b2ee8db72354c1676a2f67d343c28",
    "9234e2f2207f65a9def4fc4c0f4ad88be4033622979ccc86f78118feddd92013",
);

pub(crate) const D_1024: &str = concat!(
    "892aed8aa72e854b9034a1170a32d22655fab5c0ca32e09dc0f76ed14f51928d",
    "ecd395f7442e01127f9415cd1041cf6bf85488a2bbda9e6b9eda62a628039019",
    "2e7f896fae62edfaa2f5c6573c8693ba5cfddd43203a386d49f621e939707871",
    "d24ae7faee3240b678d5007f3de0b0664f3c71885878e1c15e51c1d7ad0e8a39",
);

// RSAES-OAEP, SHA-256, message "abc", empty label
pub(crate) const OAEP_SEED: &str = "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f";

pub(crate) const OAEP_CIPHERTEXT: &str = concat!(
    "8d87c94cc674832e7a358fca8db339fe4dbd7df8e90f525b7c7edc199afcc88b",
    "0ef11760f02c06633f02214d8032a273f2e0c1674f9d259748d24152be3ea373",
    "2d93c260d701ee21fc8ad296869d60be5edc3f3606935ac22ac0fe3920904697",
    "8cf34282fb0b4d1d82cb758ae22b83f56a17abd75f6e85903bfaebbf3bfe7acb",
    "d2478da62f18f07293ed1f68c81dbf427b9be822bf82a20e8dea8f58086a7ece",
    "3e1eaaebef1795c278d03ccdc7d81368c1ea6f9f5360ffcd82f76b788c4c8910",
    "4b82898bfa59e049f5a0835348342fdd6599415e8ecde7bc5b52b0550f24a1bb",
    "6ca4d09d27a110b98293085aace5417f631f011a90dbb7e7a7ae2a6dfbd6e9fa",
);

// RSASSA-PSS, SHA-384, message "test", 48-byte salt
pub(crate) const PSS_SALT: &str = concat!(
    "a0a1a2a3a4a5a6a7a8a9aaabacadaeafb0b1b2b3b4b5b6b7b8b9babbbcbdbebf",
    "c0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
);

pub(crate) const PSS_SIGNATURE: &str = concat!(
    "2f426fb8d891200800b2af68ee26a0ef97625367495fa6e01d14843735ad41be",
    "28ae47e6b5add05067a2c5c6f47f447ded13147e468d77eab070a960bdcc3bed",
    "876a71c478927b38f8258be69e96dd9debfadc309e0384c438c5605e01d61f96",
    "b7a2769e8e8e388e4ab4288ddc521776b37718c25af4839980b19908e3831a81",
    "ae5911cc7d012888bf50254a4622245cf7f51953352a70dbcd01b164761b76b6",
    "9045662b47039f10115e7a8ecfa6e7f5faf69921a275b4b182ea7caaa977c863",
    "ae9fb11e69d97f8409798f83f125c24571da3aa4623c573fe5c288466a7896a3",
    "5781f448afeaffd99c0f6e7b8bbe4b6e28a8a3304768eab1f48407cdba6d1573",
);

// MGF1-SHA256("foo", 50)
pub(crate) const MGF1_SHA256_FOO_50: &str = concat!(
    "3bdaba83cff13337b323ac383ca3995863e922f511b931b9efd4e0118cfc70f0",
    "8678390d67e3c12dbeb2d7a78bdfa597b5a3",
);

// MGF1-SHA224("bar", 3)
pub(crate) const MGF1_SHA224_BAR_3: &str = "8d45b4";

pub(crate) fn hex(s: &str) -> Vec<u8> {
    ::hex::decode(s).expect("test vector is valid hex")
}

pub(crate) fn key_2048() -> (PublicKey, PrivateKey) {
    key_pair(N_2048, D_2048)
}

pub(crate) fn key_1024() -> (PublicKey, PrivateKey) {
    key_pair(N_1024, D_1024)
}

fn key_pair(n: &str, d: &str) -> (PublicKey, PrivateKey) {
    let (n, d) = (hex(n), hex(d));
    let e = E.to_be_bytes();
    (
        PublicKey::from_be_bytes(&n, &e),
        PrivateKey::from_be_bytes_with_public_exponent(&n, &e, &d),
    )
}
