//! Transaction Decoder Tests
//!
//! End-to-end coverage of the tagged decoder:
//! - Every known type tag round-trips into its own variant
//! - Unknown tags fail with the exact offending type/version
//! - Missing fields on a known tag are a body error, not an unknown-type one
//! - Decoding is pure: idempotent and safe to run in parallel

use riptide_client::proto::{
    from_json_bytes, probe, AssetPair, BurnV1, CreateAliasV1, DataEntry, DataV1, DecodeError,
    ExchangeV1, Genesis, IssueV1, LeaseCancelV1, LeaseV1, MassTransferEntry, MassTransferV1,
    Order, OrderType, Payment, ReissueV1, SetScriptV1, SponsorshipV1, Transaction,
    TransactionType, TransferV1,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn order(order_type: OrderType) -> Order {
    Order {
        id: None,
        sender_public_key: "trader-pk".into(),
        matcher_public_key: "matcher-pk".into(),
        asset_pair: AssetPair {
            amount_asset: Some("asset-a".into()),
            price_asset: None,
        },
        order_type,
        price: 10_000,
        amount: 500,
        timestamp: 1_526_646_300_000,
        expiration: 1_526_646_400_000,
        matcher_fee: 300_000,
        signature: Some("order-sig".into()),
    }
}

/// One canonical value per supported type tag, in tag order.
fn canonical_transactions() -> Vec<Transaction> {
    vec![
        Transaction::Genesis(Genesis {
            tx_type: 1,
            version: 0,
            id: Some("gen-id".into()),
            signature: None,
            timestamp: 1_465_742_577_614,
            recipient: "3PGenesis".into(),
            amount: 9_999_999_500_000_000,
        }),
        Transaction::Payment(Payment {
            tx_type: 2,
            version: 0,
            id: Some("pay-id".into()),
            sender: "3PSender".into(),
            sender_public_key: Some("sender-pk".into()),
            recipient: "3PRecipient".into(),
            amount: 100_000_000,
            fee: 100_000,
            timestamp: 1,
            signature: "pay-sig".into(),
        }),
        Transaction::Issue(IssueV1 {
            tx_type: 3,
            version: 1,
            id: Some("issue-id".into()),
            sender: "3PIssuer".into(),
            sender_public_key: None,
            name: "Token".into(),
            description: "a test token".into(),
            quantity: 1_000_000,
            decimals: 8,
            reissuable: true,
            fee: 100_000_000,
            timestamp: 2,
            signature: "issue-sig".into(),
        }),
        Transaction::Transfer(TransferV1 {
            tx_type: 4,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            recipient: "3PRecipient".into(),
            amount: 42,
            asset_id: Some("asset-a".into()),
            fee_asset_id: None,
            fee: 100_000,
            timestamp: 3,
            attachment: Some("note".into()),
            signature: "transfer-sig".into(),
        }),
        Transaction::Reissue(ReissueV1 {
            tx_type: 5,
            version: 1,
            id: None,
            sender: "3PIssuer".into(),
            sender_public_key: None,
            asset_id: "asset-a".into(),
            quantity: 500,
            reissuable: false,
            fee: 100_000_000,
            timestamp: 4,
            signature: "reissue-sig".into(),
        }),
        Transaction::Burn(BurnV1 {
            tx_type: 6,
            version: 1,
            id: None,
            sender: "3PIssuer".into(),
            sender_public_key: None,
            asset_id: "asset-a".into(),
            amount: 100,
            fee: 100_000,
            timestamp: 5,
            signature: "burn-sig".into(),
        }),
        Transaction::Exchange(ExchangeV1 {
            tx_type: 7,
            version: 1,
            id: None,
            sender: "3PMatcher".into(),
            sender_public_key: None,
            order1: order(OrderType::Buy),
            order2: order(OrderType::Sell),
            price: 10_000,
            amount: 500,
            buy_matcher_fee: 150_000,
            sell_matcher_fee: 150_000,
            fee: 300_000,
            timestamp: 6,
            signature: "exchange-sig".into(),
        }),
        Transaction::Lease(LeaseV1 {
            tx_type: 8,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            recipient: "3PRecipient".into(),
            amount: 1_000,
            fee: 100_000,
            timestamp: 7,
            signature: "lease-sig".into(),
        }),
        Transaction::LeaseCancel(LeaseCancelV1 {
            tx_type: 9,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            lease_id: "lease-id".into(),
            fee: 100_000,
            timestamp: 8,
            signature: "cancel-sig".into(),
        }),
        Transaction::CreateAlias(CreateAliasV1 {
            tx_type: 10,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            alias: "merchant".into(),
            fee: 100_000,
            timestamp: 9,
            signature: "alias-sig".into(),
        }),
        Transaction::MassTransfer(MassTransferV1 {
            tx_type: 11,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            asset_id: None,
            transfers: vec![
                MassTransferEntry { recipient: "3PA".into(), amount: 10 },
                MassTransferEntry { recipient: "3PB".into(), amount: 20 },
            ],
            fee: 200_000,
            timestamp: 10,
            attachment: None,
            proofs: vec!["mt-proof".into()],
        }),
        Transaction::Data(DataV1 {
            tx_type: 12,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            data: vec![
                DataEntry::Integer { key: "height".into(), value: 100 },
                DataEntry::Boolean { key: "flag".into(), value: true },
                DataEntry::String { key: "note".into(), value: "hello".into() },
            ],
            fee: 100_000,
            timestamp: 11,
            proofs: vec!["data-proof".into()],
        }),
        Transaction::SetScript(SetScriptV1 {
            tx_type: 13,
            version: 1,
            id: None,
            sender: "3PSender".into(),
            sender_public_key: None,
            script: Some("base64:AQa3b8tH".into()),
            fee: 1_000_000,
            timestamp: 12,
            proofs: vec!["script-proof".into()],
        }),
        Transaction::Sponsorship(SponsorshipV1 {
            tx_type: 14,
            version: 1,
            id: None,
            sender: "3PIssuer".into(),
            sender_public_key: None,
            asset_id: "asset-a".into(),
            min_sponsored_asset_fee: Some(100),
            fee: 100_000_000,
            timestamp: 13,
            proofs: vec!["sponsor-proof".into()],
        }),
    ]
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

/// Every known type tag decodes back into the variant it was encoded from,
/// field for field.
#[test]
fn test_all_fourteen_types_roundtrip() {
    let txs = canonical_transactions();
    assert_eq!(txs.len(), 14);

    for (i, tx) in txs.into_iter().enumerate() {
        let expected_tag = (i + 1) as u8;
        assert_eq!(tx.tx_type().id(), expected_tag);

        let buf = serde_json::to_vec(&tx).unwrap();
        let decoded = from_json_bytes(&buf)
            .unwrap_or_else(|e| panic!("type {expected_tag} failed to decode: {e}"));

        assert_eq!(decoded, tx, "type {expected_tag} did not round-trip");
        assert_eq!(decoded.tx_type().id(), expected_tag);
    }
}

#[test]
fn test_payment_example_decodes_with_amount() {
    let buf = br#"{
        "type": 2,
        "sender": "3PExample",
        "recipient": "3PExample2",
        "amount": 100000000,
        "fee": 100000,
        "timestamp": 1,
        "signature": "sig"
    }"#;

    let tx = from_json_bytes(buf).unwrap();
    assert_eq!(tx.tx_type(), TransactionType::Payment);
    match tx {
        Transaction::Payment(p) => {
            assert_eq!(p.amount, 100_000_000);
            assert_eq!(p.version, 0);
        }
        other => panic!("expected payment, got {:?}", other.tx_type()),
    }
}

// =============================================================================
// Error Category Tests
// =============================================================================

/// Tags outside the table fail with the exact offending values before any
/// body decode is attempted.
#[test]
fn test_unknown_type_reports_offending_tag() {
    for bad in [0u8, 15, 99, 255] {
        let buf = format!(r#"{{"type": {bad}, "version": 7}}"#);
        let err = from_json_bytes(buf.as_bytes()).unwrap_err();
        match err {
            DecodeError::UnknownTypeVersion { tx_type, version } => {
                assert_eq!(tx_type, bad);
                assert_eq!(version, 7);
            }
            other => panic!("tag {bad}: expected unknown type error, got {other:?}"),
        }
        let err = from_json_bytes(buf.as_bytes()).unwrap_err();
        assert!(err.to_string().contains(&bad.to_string()));
    }
}

/// A known tag with missing required fields is a body error, never an
/// unknown-type one.
#[test]
fn test_missing_fields_is_a_body_error() {
    let err = from_json_bytes(br#"{"type": 4}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Body(_)), "got {err:?}");

    // Wrong primitive type on a required field is also a body error.
    let err = from_json_bytes(
        br#"{"type": 8, "sender": "s", "recipient": "r", "amount": "lots",
             "fee": 1, "timestamp": 1, "signature": "x"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::Body(_)), "got {err:?}");
}

#[test]
fn test_malformed_buffer_is_an_envelope_error() {
    for bad in [&b"garbage"[..], b"", b"[1,2,3]", br#"{"version": 1}"#] {
        let err = from_json_bytes(bad).unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)), "input {bad:?}");
    }
}

// =============================================================================
// Purity Tests
// =============================================================================

/// Decoding the same buffer twice yields equal results.
#[test]
fn test_decode_is_idempotent() {
    for tx in canonical_transactions() {
        let buf = serde_json::to_vec(&tx).unwrap();
        let first = from_json_bytes(&buf).unwrap();
        let second = from_json_bytes(&buf).unwrap();
        assert_eq!(first, second);
    }
}

/// The probe does not consume the buffer; the same bytes decode afterwards.
#[test]
fn test_probe_leaves_buffer_decodable() {
    let txs = canonical_transactions();
    let tx = &txs[3];
    let buf = serde_json::to_vec(tx).unwrap();

    let tv = probe(&buf).unwrap();
    assert_eq!(tv.tx_type, 4);
    assert_eq!(tv.version, 1);

    let decoded = from_json_bytes(&buf).unwrap();
    assert_eq!(&decoded, tx);
}

/// Concurrent decodes of distinct types on independent buffers all return
/// their own variant.
#[test]
fn test_parallel_decodes_do_not_interfere() {
    let buffers: Vec<(u8, Vec<u8>)> = canonical_transactions()
        .iter()
        .map(|tx| (tx.tx_type().id(), serde_json::to_vec(tx).unwrap()))
        .collect();

    let handles: Vec<_> = buffers
        .into_iter()
        .map(|(tag, buf)| {
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let tx = from_json_bytes(&buf).unwrap();
                    assert_eq!(tx.tx_type().id(), tag);
                }
                tag
            })
        })
        .collect();

    let mut tags: Vec<u8> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    tags.sort_unstable();
    assert_eq!(tags, (1..=14).collect::<Vec<u8>>());
}
