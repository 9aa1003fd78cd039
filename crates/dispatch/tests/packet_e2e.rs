// Path: crates/dispatch/tests/packet_e2e.rs
//! End-to-end packet lifecycle dispatch: acknowledgements, timeouts, and the
//! receive refusal, through both the controller and the contract stacks.

use std::str::FromStr;

use ibc_core_channel_types::acknowledgement::{Acknowledgement, AcknowledgementStatus};
use ibc_core_channel_types::packet::Packet;
use ibc_core_channel_types::timeout::TimeoutTimestamp;
use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::Timestamp;

use icw_api::module::IbcModule;
use icw_dispatch::{
    CapabilityAdapter, ChannelAdapter, IbcMiddleware, IcaAuthHandler, WasmHostHandler,
};
use icw_test_utils::{
    assert_bytes_eq, assert_code, assert_ok, fixtures, AuthCall, HostCall, PrefixAddressCodec,
    RecordingAuthModule, RecordingHost, SharedCapabilityStore, SharedChannelStore,
};
use icw_types::scope::CallOrigin;

// --- Stack wiring helpers ---

type ControllerStack = IbcMiddleware<IcaAuthHandler<RecordingAuthModule>, SharedCapabilityStore>;

fn controller_stack() -> (ControllerStack, RecordingAuthModule) {
    let module = RecordingAuthModule::new();
    let stack = IbcMiddleware::new(
        IcaAuthHandler::new(module.clone()),
        SharedCapabilityStore::new(),
    );
    (stack, module)
}

type WasmStack = IbcMiddleware<
    WasmHostHandler<RecordingHost, ChannelAdapter<SharedChannelStore>, PrefixAddressCodec>,
    CapabilityAdapter<SharedCapabilityStore>,
>;

type NestedStack = IbcMiddleware<IcaAuthHandler<WasmStack>, SharedCapabilityStore>;

fn nested_stack(host: RecordingHost) -> NestedStack {
    let caps = SharedCapabilityStore::new();
    let inner = IbcMiddleware::new(
        WasmHostHandler::new(
            host,
            ChannelAdapter::new(SharedChannelStore::new()),
            PrefixAddressCodec::cosmos(),
        ),
        CapabilityAdapter::new(caps.clone()),
    );
    IbcMiddleware::new(IcaAuthHandler::new(inner), caps)
}

fn sent_packet(sequence: u64) -> Packet {
    fixtures::packet(
        sequence,
        &PortId::from_str("icacontroller-cosmos1abc").unwrap(),
        0,
        &PortId::from_str("icahost").unwrap(),
        5,
        br#"{"type":"TYPE_EXECUTE_TX"}"#,
    )
}

fn ack_bytes() -> Acknowledgement {
    Acknowledgement::try_from(br#"{"result":"AQ=="}"#.to_vec()).unwrap()
}

// --- Acknowledgements ---

#[test]
fn test_controller_ack_rewrites_the_source_port() {
    let (mut stack, module) = controller_stack();

    assert_ok!(stack.on_acknowledgement_packet(
        CallOrigin::Direct,
        &sent_packet(5),
        &ack_bytes(),
        &fixtures::relayer(),
    ));

    // The wrapped module saw the packet re-homed into the contract
    // namespace, carrying the forwarded origin tag.
    assert_eq!(
        module.calls(),
        vec![AuthCall::AckPacket {
            origin: CallOrigin::IcaAuth,
            src_port: "wasm.cosmos1abc".to_string(),
            sequence: 5,
            ack: ack_bytes().as_ref().to_vec(),
        }]
    );
}

#[test]
fn test_nested_ack_delivers_packet_and_ack_to_the_contract() {
    let host = RecordingHost::new();
    let mut stack = nested_stack(host.clone());

    assert_ok!(stack.on_acknowledgement_packet(
        CallOrigin::Direct,
        &sent_packet(3),
        &ack_bytes(),
        &fixtures::relayer(),
    ));

    let calls = host.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        HostCall::AckPacket { contract, msg } => {
            assert_bytes_eq!(contract, b"cosmos1abc");
            assert_eq!(msg.acknowledgement.data, ack_bytes().as_ref().to_vec());
            assert_eq!(msg.original_packet.src.port_id, "wasm.cosmos1abc");
            assert_eq!(msg.original_packet.src.channel_id, "channel-0");
            assert_eq!(msg.original_packet.dest.port_id, "icahost");
            assert_eq!(msg.original_packet.dest.channel_id, "channel-5");
            assert_eq!(msg.original_packet.sequence, 3);
            assert_eq!(msg.relayer, "cosmos1relayer");
        }
        other => panic!("expected an ack hook, got {other:?}"),
    }
}

#[test]
fn test_ack_hook_failure_carries_the_dispatch_step() {
    let host = RecordingHost::new();
    let mut stack = nested_stack(host.clone());
    host.fail_next("contract rejected ack");

    let err = assert_code!(
        stack.on_acknowledgement_packet(
            CallOrigin::Direct,
            &sent_packet(3),
            &ack_bytes(),
            &fixtures::relayer(),
        ),
        "DISPATCH_HOOK_FAILED"
    );
    assert_eq!(err.to_string(), "on ack: Hook failed: contract rejected ack");
}

#[test]
fn test_ack_for_a_foreign_port_fails_before_the_hook() {
    let host = RecordingHost::new();
    let mut stack = nested_stack(host.clone());
    let packet = fixtures::packet(
        1,
        &PortId::from_str("transfer").unwrap(),
        0,
        &PortId::from_str("transfer").unwrap(),
        5,
        b"{}",
    );

    let err = assert_code!(
        stack.on_acknowledgement_packet(
            CallOrigin::Direct,
            &packet,
            &ack_bytes(),
            &fixtures::relayer(),
        ),
        "DISPATCH_MALFORMED_PORT_ID"
    );
    assert!(err.to_string().starts_with("contract port id:"));
    assert!(host.calls().is_empty());
}

// --- Timeouts ---

#[test]
fn test_nested_timeout_reaches_the_contract() {
    let host = RecordingHost::new();
    let mut stack = nested_stack(host.clone());

    assert_ok!(stack.on_timeout_packet(
        CallOrigin::Direct,
        &sent_packet(8),
        &fixtures::relayer(),
    ));

    match &host.calls()[0] {
        HostCall::TimeoutPacket { contract, msg } => {
            assert_bytes_eq!(contract, b"cosmos1abc");
            assert_eq!(msg.packet.src.port_id, "wasm.cosmos1abc");
            assert_eq!(msg.packet.sequence, 8);
            assert_eq!(msg.relayer, "cosmos1relayer");
        }
        other => panic!("expected a timeout hook, got {other:?}"),
    }
}

#[test]
fn test_controller_timeout_forwards_with_origin_tag() {
    let (mut stack, module) = controller_stack();

    assert_ok!(stack.on_timeout_packet(
        CallOrigin::Direct,
        &sent_packet(8),
        &fixtures::relayer(),
    ));

    assert_eq!(
        module.calls(),
        vec![AuthCall::TimeoutPacket {
            origin: CallOrigin::IcaAuth,
            src_port: "wasm.cosmos1abc".to_string(),
            sequence: 8,
        }]
    );
}

#[test]
fn test_timeout_hook_failure_carries_the_dispatch_step() {
    let host = RecordingHost::new();
    let mut stack = nested_stack(host.clone());
    host.fail_next("contract rejected timeout");

    let err = assert_code!(
        stack.on_timeout_packet(CallOrigin::Direct, &sent_packet(8), &fixtures::relayer()),
        "DISPATCH_HOOK_FAILED"
    );
    assert_eq!(
        err.to_string(),
        "on timeout: Hook failed: contract rejected timeout"
    );
}

#[test]
fn test_timeout_marshals_unset_height_as_absent_block() {
    let host = RecordingHost::new();
    let mut stack = nested_stack(host.clone());
    let mut packet = sent_packet(2);
    packet.timeout_timestamp_on_b =
        TimeoutTimestamp::At(Timestamp::from_nanoseconds(1_700_000_000_000_000_000));

    assert_ok!(stack.on_timeout_packet(CallOrigin::Direct, &packet, &fixtures::relayer()));

    match &host.calls()[0] {
        HostCall::TimeoutPacket { msg, .. } => {
            assert!(msg.packet.timeout.block.is_none());
            assert_eq!(msg.packet.timeout.timestamp, Some(1_700_000_000_000_000_000));

            // The wire form must omit the height side entirely rather than
            // encode a zero value the contract would treat as a real height.
            let json = serde_json::to_value(&msg.packet.timeout).unwrap();
            assert!(json.get("block").is_none());
            assert_eq!(json["timestamp"], 1_700_000_000_000_000_000u64);
        }
        other => panic!("expected a timeout hook, got {other:?}"),
    }
}

// --- Receive refusal ---

#[test]
fn test_recv_is_refused_by_both_roles() {
    let inbound = sent_packet(1);
    let relayer = fixtures::relayer();

    let (mut controller, module) = controller_stack();
    let ack = controller.on_recv_packet(CallOrigin::Direct, &inbound, &relayer);
    assert!(!ack.is_successful());
    match ack {
        AcknowledgementStatus::Error(status) => {
            assert_eq!(
                status.to_string(),
                "cannot receive packet via ica-auth module"
            );
        }
        AcknowledgementStatus::Success(_) => panic!("expected an error acknowledgement"),
    }
    assert!(module.calls().is_empty());

    let host = RecordingHost::new();
    let mut contract = nested_stack(host.clone());
    let ack = contract.on_recv_packet(CallOrigin::Direct, &inbound, &relayer);
    match ack {
        AcknowledgementStatus::Error(status) => {
            assert_eq!(
                status.to_string(),
                "cannot receive packet via ica-auth module"
            );
        }
        AcknowledgementStatus::Success(_) => panic!("expected an error acknowledgement"),
    }
    assert!(host.calls().is_empty());
}

#[test]
fn test_recv_refusal_names_the_contract_role_when_unwrapped() {
    let mut stack: WasmStack = IbcMiddleware::new(
        WasmHostHandler::new(
            RecordingHost::new(),
            ChannelAdapter::new(SharedChannelStore::new()),
            PrefixAddressCodec::cosmos(),
        ),
        CapabilityAdapter::new(SharedCapabilityStore::new()),
    );

    let ack = stack.on_recv_packet(CallOrigin::Direct, &sent_packet(1), &fixtures::relayer());
    match ack {
        AcknowledgementStatus::Error(status) => {
            assert_eq!(status.to_string(), "cannot receive packet via wasm module");
        }
        AcknowledgementStatus::Success(_) => panic!("expected an error acknowledgement"),
    }
}
