use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// UnknownSealProof
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("unknown registered seal proof {0}")]
pub struct UnknownSealProof(pub i64);

///
/// RegisteredSealProof
///
/// Filecoin sealing proof type, carried on the wire as its integer.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(u8)]
pub enum RegisteredSealProof {
    StackedDrg2KiBV1 = 0,
    StackedDrg8MiBV1 = 1,
    StackedDrg512MiBV1 = 2,
    StackedDrg32GiBV1 = 3,
    StackedDrg64GiBV1 = 4,
    StackedDrg2KiBV1P1 = 5,
    StackedDrg8MiBV1P1 = 6,
    StackedDrg512MiBV1P1 = 7,
    StackedDrg32GiBV1P1 = 8,
    StackedDrg64GiBV1P1 = 9,
}

impl RegisteredSealProof {
    pub const ALL: [Self; 10] = [
        Self::StackedDrg2KiBV1,
        Self::StackedDrg8MiBV1,
        Self::StackedDrg512MiBV1,
        Self::StackedDrg32GiBV1,
        Self::StackedDrg64GiBV1,
        Self::StackedDrg2KiBV1P1,
        Self::StackedDrg8MiBV1P1,
        Self::StackedDrg512MiBV1P1,
        Self::StackedDrg32GiBV1P1,
        Self::StackedDrg64GiBV1P1,
    ];

    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Sector size sealed by this proof, in bytes.
    #[must_use]
    pub const fn sector_size(self) -> u64 {
        match self {
            Self::StackedDrg2KiBV1 | Self::StackedDrg2KiBV1P1 => 2 << 10,
            Self::StackedDrg8MiBV1 | Self::StackedDrg8MiBV1P1 => 8 << 20,
            Self::StackedDrg512MiBV1 | Self::StackedDrg512MiBV1P1 => 512 << 20,
            Self::StackedDrg32GiBV1 | Self::StackedDrg32GiBV1P1 => 32 << 30,
            Self::StackedDrg64GiBV1 | Self::StackedDrg64GiBV1P1 => 64 << 30,
        }
    }
}

impl From<RegisteredSealProof> for i64 {
    fn from(proof: RegisteredSealProof) -> Self {
        proof.code()
    }
}

impl TryFrom<i64> for RegisteredSealProof {
    type Error = UnknownSealProof;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|proof| proof.code() == code)
            .ok_or(UnknownSealProof(code))
    }
}

///
/// TESTS
///
