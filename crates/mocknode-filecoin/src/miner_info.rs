use crate::{Multiaddr, RegisteredSealProof};
use mocknode::Record;

///
/// MinerInfo
///
/// Reply to `Filecoin.StateMinerInfo`, shaped like lotus `miner.MinerInfo`.
/// Defaults reproduce what a single-miner lotus devnet reports.
///

#[derive(Clone, Debug, Eq, PartialEq, Record)]
pub struct MinerInfo {
    /// Node address supplied when the miner was initialised.
    #[field(default = "t01000")]
    pub owner: String,

    /// Address that sends and pays for day-to-day miner operations.
    #[field(default = "t01000")]
    pub worker: String,

    // lotus devnet literally replies "<empty>"
    #[field(default = "<empty>")]
    pub new_worker: String,

    /// Addresses allowed to submit WindowPoSt proofs; unused by the mock.
    pub control_addresses: Vec<String>,

    /// Epoch at which `worker` becomes `new_worker`; `-1` means no change.
    #[field(default_with = epoch_or_unset)]
    pub worker_change_epoch: i64,

    // no p2p identity
    #[field(default = "0")]
    pub peer_id: String,

    pub multiaddrs: Vec<Multiaddr>,

    #[field(default_with = seal_proof_or_devnet)]
    pub seal_proof_type: RegisteredSealProof,

    /// Sector size in bytes; devnet seals 2 KiB sectors.
    #[field(default = 2048)]
    pub sector_size: u64,

    #[field(wire = "WindowPoStPartitionSectors", default_with = count_or_zero)]
    pub window_post_partition_sectors: u64,

    #[field(default_with = epoch_or_unset)]
    pub consensus_fault_elapsed: i64,
}

fn epoch_or_unset(raw: Option<i64>) -> i64 {
    raw.unwrap_or(-1)
}

fn count_or_zero(raw: Option<u64>) -> u64 {
    raw.unwrap_or_default()
}

fn seal_proof_or_devnet(raw: Option<RegisteredSealProof>) -> RegisteredSealProof {
    raw.unwrap_or(RegisteredSealProof::StackedDrg2KiBV1P1)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use mocknode::prelude::*;

    #[test]
    fn wire_names_follow_lotus_casing() {
        let wire: Vec<&str> = MinerInfo::fields().iter().map(|f| f.wire_name).collect();

        assert_eq!(
            wire,
            vec![
                "Owner",
                "Worker",
                "NewWorker",
                "ControlAddresses",
                "WorkerChangeEpoch",
                "PeerId",
                "Multiaddrs",
                "SealProofType",
                "SectorSize",
                "WindowPoStPartitionSectors",
                "ConsensusFaultElapsed",
            ]
        );
    }

    #[test]
    fn field_set_is_valid() {
        let set = MinerInfo::field_set().expect("field set");

        assert_eq!(set.len(), 11);
        assert_eq!(
            set.get_by_wire_name("WindowPoStPartitionSectors").map(|f| f.name),
            Some("window_post_partition_sectors")
        );
    }

    #[test]
    fn computed_defaults_keep_supplied_values() {
        let input = PartialInput::new()
            .with("WorkerChangeEpoch", 120)
            .with("seal_proof_type", 8)
            .with("WindowPoStPartitionSectors", 2349)
            .with("consensus_fault_elapsed", 77);

        let info = MinerInfo::from_input(&input).expect("construct");
        assert_eq!(info.worker_change_epoch, 120);
        assert_eq!(info.seal_proof_type, RegisteredSealProof::StackedDrg32GiBV1P1);
        assert_eq!(info.window_post_partition_sectors, 2349);
        assert_eq!(info.consensus_fault_elapsed, 77);
    }
}
