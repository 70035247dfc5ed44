//! Reference digests computed with coreutils `md5sum`, `sha256sum` and
//! `sha512sum` over the UTF-8 bytes of each input.

use hashify_core::HashAlgorithm;

/// A known input/digest pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownVector {
    pub input: &'static str,
    pub algorithm: HashAlgorithm,
    pub hash: &'static str,
}

const VECTORS: &[KnownVector] = &[
    KnownVector {
        input: "hello",
        algorithm: HashAlgorithm::MD5,
        hash: "5d41402abc4b2a76b9719d911017c592",
    },
    KnownVector {
        input: "hello",
        algorithm: HashAlgorithm::SHA256,
        hash: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
    },
    KnownVector {
        input: "hello",
        algorithm: HashAlgorithm::SHA512,
        hash: "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca72323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
    },
    KnownVector {
        input: "foobar",
        algorithm: HashAlgorithm::MD5,
        hash: "3858f62230ac3c915f300c664312c63f",
    },
    KnownVector {
        input: "foobar",
        algorithm: HashAlgorithm::SHA256,
        hash: "c3ab8ff13720e8ad9047dd39466b3c8974e592c2fa383d4a3960714caef0c4f2",
    },
    KnownVector {
        input: "foobar",
        algorithm: HashAlgorithm::SHA512,
        hash: "0a50261ebd1a390fed2bf326f2673c145582a6342d523204973d0219337f81616a8069b012587cf5635f6925f1b56c360230c19b273500ee013e030601bf2425",
    },
    KnownVector {
        input: "héllo",
        algorithm: HashAlgorithm::MD5,
        hash: "be50e8478cf24ff3595bc7307fb91b50",
    },
    KnownVector {
        input: "héllo",
        algorithm: HashAlgorithm::SHA256,
        hash: "3c48591d8d098a4538f5e013dfcf406e948eac4d3277b10bf614e295d6068179",
    },
    KnownVector {
        input: "héllo",
        algorithm: HashAlgorithm::SHA512,
        hash: "a67e831011aa41ebb2a218c8ff727f1c60d62f06e1681678d176a81cd72ee69e7250c4c943cacbab28e42768615a5c41b6b0d42591d2c26a65670b38e97306dc",
    },
    KnownVector {
        input: "The quick brown fox jumps over the lazy dog",
        algorithm: HashAlgorithm::MD5,
        hash: "9e107d9d372bb6826bd81d3542a419d6",
    },
    KnownVector {
        input: "The quick brown fox jumps over the lazy dog",
        algorithm: HashAlgorithm::SHA256,
        hash: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
    KnownVector {
        input: "The quick brown fox jumps over the lazy dog",
        algorithm: HashAlgorithm::SHA512,
        hash: "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb642e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
    },
    KnownVector {
        input: "hello world",
        algorithm: HashAlgorithm::MD5,
        hash: "5eb63bbbe01eeed093cb22bb8f5acdc3",
    },
    KnownVector {
        input: "hello world",
        algorithm: HashAlgorithm::SHA256,
        hash: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
    },
    KnownVector {
        input: "hello world",
        algorithm: HashAlgorithm::SHA512,
        hash: "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f",
    },
];

/// All reference vectors
pub fn known_vectors() -> &'static [KnownVector] {
    VECTORS
}

/// Reference digest for `input` under `algorithm`, if one is recorded
pub fn expected_digest(input: &str, algorithm: HashAlgorithm) -> Option<&'static str> {
    VECTORS
        .iter()
        .find(|v| v.input == input && v.algorithm == algorithm)
        .map(|v| v.hash)
}
