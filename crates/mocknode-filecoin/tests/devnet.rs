use mocknode::{core::CodecErrorKind, prelude::*};
use mocknode_config::SimulatorConfig;
use mocknode_filecoin::{MinerInfo, Multiaddr, RegisteredSealProof};
use proptest::prelude::*;
use serde_json::json;

// lotus devnet `Filecoin.StateMinerInfo` reply for a fresh miner
const DEVNET_REPLY: &str = r#"{"Owner":"t01000","Worker":"t01000","NewWorker":"<empty>","ControlAddresses":[],"WorkerChangeEpoch":-1,"PeerId":"0","Multiaddrs":[],"SealProofType":5,"SectorSize":2048,"WindowPoStPartitionSectors":0,"ConsensusFaultElapsed":-1}"#;

// reply from a miner announcing /ip4/127.0.0.1/tcp/8000
const ANNOUNCED_REPLY: &str = r#"{"Owner":"t01000","Worker":"t01001","NewWorker":"<empty>","ControlAddresses":["t01002"],"WorkerChangeEpoch":-1,"PeerId":"12D3KooWGzxzKZYveHXtpG6AsrUJBcWxHBFS2HsEoGTxrMLvKXtf","Multiaddrs":["BH8AAAEGH0A="],"SealProofType":5,"SectorSize":2048,"WindowPoStPartitionSectors":2,"ConsensusFaultElapsed":-1}"#;

const LOOPBACK: [u8; 8] = [4, 127, 0, 0, 1, 6, 31, 64];

#[test]
fn defaults_render_the_devnet_reply() {
    let info = MinerInfo::with_defaults().expect("defaults");

    assert_eq!(info.to_wire_json().expect("json"), DEVNET_REPLY);
}

#[test]
fn devnet_reply_parses_back_to_defaults() {
    let info = MinerInfo::from_wire_json(DEVNET_REPLY).expect("parse");

    assert_eq!(info, MinerInfo::with_defaults().expect("defaults"));
}

#[test]
fn announced_reply_decodes_base64_multiaddrs() {
    let info = MinerInfo::from_wire_json(ANNOUNCED_REPLY).expect("parse");

    assert_eq!(info.multiaddrs, vec![Multiaddr::from(LOOPBACK.to_vec())]);
    assert_eq!(info.control_addresses, vec!["t01002".to_string()]);
    assert_eq!(info.window_post_partition_sectors, 2);
    assert_eq!(info.to_wire_json().expect("json"), ANNOUNCED_REPLY);
}

#[test]
fn partial_seed_keeps_remaining_defaults() {
    let input = PartialInput::new()
        .with("owner", "t01001")
        .with("SectorSize", 34_359_738_368_u64)
        .with("SealProofType", 8);

    let info = MinerInfo::from_input(&input).expect("construct");
    let wire = serde_json::Value::Object(info.to_wire().expect("wire"));

    assert_eq!(
        wire,
        json!({
            "Owner": "t01001",
            "Worker": "t01000",
            "NewWorker": "<empty>",
            "ControlAddresses": [],
            "WorkerChangeEpoch": -1,
            "PeerId": "0",
            "Multiaddrs": [],
            "SealProofType": 8,
            "SectorSize": 34_359_738_368_u64,
            "WindowPoStPartitionSectors": 0,
            "ConsensusFaultElapsed": -1,
        })
    );
    assert_eq!(info.sector_size, info.seal_proof_type.sector_size());
}

#[test]
fn unknown_seal_proof_fails_construction() {
    let input = PartialInput::new().with("SealProofType", 42);
    let err = MinerInfo::from_input(&input).expect_err("unknown proof");

    assert_eq!(err.kind(), CodecErrorKind::FieldDecode);
    assert_eq!(err.field(), Some("seal_proof_type"));
}

#[test]
fn control_addresses_are_not_shared_between_instances() {
    let mut first = MinerInfo::with_defaults().expect("defaults");
    let second = MinerInfo::with_defaults().expect("defaults");

    first.control_addresses.push("t01002".to_string());

    assert!(second.control_addresses.is_empty());
}

#[test]
fn internal_form_reseeds_the_same_record() {
    let input = PartialInput::new()
        .with("worker", "t01005")
        .with("Multiaddrs", json!(["BH8AAAEGH0A="]));
    let info = MinerInfo::from_input(&input).expect("construct");

    assert_eq!(info.multiaddrs, vec![Multiaddr::from(LOOPBACK.to_vec())]);

    let internal = PartialInput::from(info.to_internal().expect("internal"));
    assert!(internal.contains_key("window_post_partition_sectors"));
    assert_eq!(MinerInfo::from_input(&internal).expect("reseed"), info);
}

#[test]
fn miner_info_seeds_from_config() {
    let config = SimulatorConfig::from_toml_str(
        r#"
[records.miner_info]
owner = "t01001"
WorkerChangeEpoch = 10
"#,
    )
    .expect("parse");

    let info: MinerInfo = config.construct("miner_info").expect("construct");
    assert_eq!(info.owner, "t01001");
    assert_eq!(info.worker_change_epoch, 10);
    assert_eq!(info.peer_id, "0");
}

#[test]
fn camel_case_seed_keys_are_not_field_names() {
    let config = SimulatorConfig::from_toml_str("[records.miner_info]\nsectorSize = 4096\n")
        .expect("parse");
    let input = config.record_input("miner_info").expect("input");
    let fields = MinerInfo::field_set().expect("field set");

    assert_eq!(fields.unclaimed_keys(&input).collect::<Vec<_>>(), vec!["sectorSize"]);

    let info: MinerInfo = config.construct("miner_info").expect("construct");
    assert_eq!(info.sector_size, 2048);
}

fn arb_miner_info() -> impl Strategy<Value = MinerInfo> {
    (
        ("t0[0-9]{4}", "t0[0-9]{4}", "t0[0-9]{4}"),
        prop::collection::vec("t0[0-9]{4}", 0..3),
        any::<i64>(),
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 0..3),
        prop::sample::select(RegisteredSealProof::ALL.to_vec()),
        (any::<u64>(), any::<u64>(), any::<i64>()),
    )
        .prop_map(
            |(
                (owner, worker, new_worker),
                control_addresses,
                worker_change_epoch,
                multiaddrs,
                seal_proof_type,
                (sector_size, window_post_partition_sectors, consensus_fault_elapsed),
            )| MinerInfo {
                owner,
                worker,
                new_worker,
                control_addresses,
                worker_change_epoch,
                peer_id: "0".to_string(),
                multiaddrs: multiaddrs.into_iter().map(Multiaddr::from).collect(),
                seal_proof_type,
                sector_size,
                window_post_partition_sectors,
                consensus_fault_elapsed,
            },
        )
}

proptest! {
    #[test]
    fn miner_info_wire_round_trip(info in arb_miner_info()) {
        let json = info.to_wire_json().expect("json");

        prop_assert_eq!(MinerInfo::from_wire_json(&json).expect("parse"), info);
    }
}
