//! End-to-end flows across the registry, ledger, reserve state and coordinator,
//! driven with an explicit clock the same way the instruction handlers do.

use anchor_lang::error::{ComparedValues, Error};
use anchor_lang::prelude::*;
use ::reserve_ledger::*;

const T: i64 = 1_704_067_200; // 01-01-2024 00:00:00 UTC
const TTL: u64 = 900;
const MIN_INTERVAL: u64 = 300;

struct Harness {
    admin: Pubkey,
    issuer: Pubkey,
    redeemer: Pubkey,
    attestor: Pubkey,
    requester: Pubkey,
    channel: Pubkey,
    coordinator_key: Pubkey,
    registry: AccessRegistry,
    ledger: Ledger,
    reserve: ReserveState,
    coordinator: RequestCoordinator,
}

impl Harness {
    fn new() -> Self {
        let admin = Pubkey::new_unique();
        let issuer = Pubkey::new_unique();
        let redeemer = Pubkey::new_unique();
        let attestor = Pubkey::new_unique();
        let requester = Pubkey::new_unique();
        let channel = Pubkey::new_unique();
        let coordinator_key = Pubkey::new_unique();

        let mut registry = AccessRegistry::default();
        registry.initialize(255, admin, 0).unwrap();
        for (role, holder) in [
            (Role::Issuer, issuer),
            (Role::Redeemer, redeemer),
            (Role::Attestor, attestor),
            (Role::Attestor, coordinator_key),
            (Role::Requester, requester),
        ] {
            assert!(registry.grant(&admin, role, holder, 0).unwrap());
        }

        let mut ledger = Ledger::default();
        ledger.initialize(254, None);

        let mut reserve = ReserveState::default();
        reserve.initialize(253, TTL, "custodian".to_string()).unwrap();

        let mut coordinator = RequestCoordinator::default();
        coordinator
            .initialize(
                252,
                MIN_INTERVAL,
                channel,
                DispatchConfig {
                    subscription_id: 42,
                    callback_gas_limit: 300_000,
                    don_id: [7u8; 32],
                },
                "GET /reserves".to_string(),
            )
            .unwrap();

        Self {
            admin,
            issuer,
            redeemer,
            attestor,
            requester,
            channel,
            coordinator_key,
            registry,
            ledger,
            reserve,
            coordinator,
        }
    }

    fn holder(key: Pubkey) -> HolderAccount {
        let mut account = HolderAccount::default();
        account.bind(key, 250);
        account
    }

    fn mint(&mut self, to: &mut HolderAccount, amount: u128) -> Result<u64> {
        self.ledger.mint(&self.registry, &self.issuer, to, amount)
    }

    fn attest(&mut self, balance: u128, observed_at: i64, sequence: u64, now: i64) -> Result<()> {
        let update = ReserveUpdate {
            balance,
            observed_at,
            sequence,
        };
        self.reserve
            .accept_update(&self.registry, &self.attestor, &update, now)
    }

    fn issue(&mut self, now: i64) -> Result<OutstandingRequest> {
        self.coordinator
            .issue_request(&self.registry, &self.requester, &self.coordinator_key, now)
    }

    fn fulfill(
        &mut self,
        token: &[u8; 32],
        request: Option<&OutstandingRequest>,
        response: &FetchResponse,
        now: i64,
    ) -> Result<FulfillmentOutcome> {
        self.coordinator.fulfill(
            &self.registry,
            &mut self.reserve,
            &self.channel,
            &self.coordinator_key,
            token,
            request,
            response,
            now,
        )
    }
}

fn custodian_response(balance: &str, timestamp: &str) -> FetchResponse {
    let payload = decode_custodian_record(balance, timestamp).unwrap();
    FetchResponse::success(&payload).unwrap()
}

#[test]
fn test_issuer_mints_to_holder_without_cap() {
    let mut system = Harness::new();
    let mut alice = Harness::holder(Pubkey::new_unique());

    let audit_id = system.mint(&mut alice, 1_000).unwrap();

    assert_eq!(audit_id, 1);
    assert_eq!(alice.balance, 1_000);
    assert_eq!(system.ledger.total_issuance, 1_000);
    assert_eq!(system.ledger.remaining_mintable(), UNBOUNDED_MINTABLE);
}

#[test]
fn test_cap_reached_blocks_every_target() {
    let mut system = Harness::new();
    let admin = system.admin;
    system
        .ledger
        .set_cap(&system.registry, &admin, Some(1_000 * ONE_TOKEN))
        .unwrap();

    let mut alice = Harness::holder(Pubkey::new_unique());
    system.mint(&mut alice, 1_000 * ONE_TOKEN).unwrap();
    assert_eq!(system.ledger.remaining_mintable(), 0);

    for _ in 0..3 {
        let mut other = Harness::holder(Pubkey::new_unique());
        let err = system.mint(&mut other, 1).unwrap_err();
        assert_eq!(err, Error::from(ReserveLedgerError::IssuanceCapExceeded));
        assert_eq!(other.balance, 0);
    }
    assert_eq!(system.ledger.total_issuance, 1_000 * ONE_TOKEN);
}

#[test]
fn test_pause_gates_mint_and_burn_but_not_transfer() {
    let mut system = Harness::new();
    let admin = system.admin;
    let redeemer = system.redeemer;
    let mut alice = Harness::holder(Pubkey::new_unique());
    let mut bob = Harness::holder(Pubkey::new_unique());
    system.mint(&mut alice, 500).unwrap();

    system.ledger.set_paused(&system.registry, &admin, true).unwrap();

    assert_eq!(
        system.mint(&mut alice, 1).unwrap_err(),
        Error::from(ReserveLedgerError::LedgerPaused)
    );
    assert_eq!(
        system
            .ledger
            .burn(&system.registry, &redeemer, &mut alice, 1)
            .unwrap_err(),
        Error::from(ReserveLedgerError::LedgerPaused)
    );

    let alice_key = alice.holder;
    system
        .ledger
        .transfer(&alice_key, &mut alice, &mut bob, 200)
        .unwrap();
    assert_eq!((alice.balance, bob.balance), (300, 200));
    assert_eq!(system.ledger.total_issuance, 500);

    system.ledger.set_paused(&system.registry, &admin, false).unwrap();
    system
        .ledger
        .burn(&system.registry, &redeemer, &mut bob, 200)
        .unwrap();
    assert_eq!(system.ledger.total_issuance, 300);
}

#[test]
fn test_allow_list_gates_mint_targets() {
    let mut system = Harness::new();
    let admin = system.admin;
    let listed = Pubkey::new_unique();
    system
        .ledger
        .add_to_allow_list(&system.registry, &admin, &[listed])
        .unwrap();
    system
        .ledger
        .set_allow_list_enabled(&system.registry, &admin, true)
        .unwrap();

    let mut outsider = Harness::holder(Pubkey::new_unique());
    assert_eq!(
        system.mint(&mut outsider, 10).unwrap_err(),
        Error::from(ReserveLedgerError::NotAllowListed)
    );

    let mut insider = Harness::holder(listed);
    system.mint(&mut insider, 10).unwrap();
    assert_eq!(system.ledger.total_issuance, 10);
}

#[test]
fn test_reserve_goes_stale_after_ttl() {
    let mut system = Harness::new();
    system.attest(100_000_000 * ONE_TOKEN, T, 1, T).unwrap();

    assert_eq!(system.reserve.is_fresh(T), (true, 0));
    assert_eq!(system.reserve.is_fresh(T + 901), (false, 901));
    assert_eq!(system.reserve.time_until_stale(T + 901), 0);

    let snapshot = system.reserve.snapshot(T + 901);
    assert_eq!(snapshot.sequence, 1);
    assert!(!snapshot.valid);
}

#[test]
fn test_lower_sequence_reports_got_and_min() {
    let mut system = Harness::new();
    system.attest(1_000, T, 5, T).unwrap();

    let err = system.attest(2_000, T, 3, T).unwrap_err();
    assert_eq!(err, Error::from(ReserveLedgerError::InvalidSequence));
    match err {
        Error::AnchorError(anchor_error) => match anchor_error.compared_values {
            Some(ComparedValues::Values((got, min))) => assert_eq!((got.as_str(), min.as_str()), ("3", "6")),
            other => panic!("unexpected compared values {other:?}"),
        },
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(system.reserve.sequence, 5);
    assert_eq!(system.reserve.balance, 1_000);
}

#[test]
fn test_staleness_boundary() {
    let mut system = Harness::new();
    let now = T + 10_000;

    assert_eq!(
        system.attest(1, now - TTL as i64 - 1, 1, now).unwrap_err(),
        Error::from(ReserveLedgerError::StaleData)
    );
    assert_eq!(
        system.attest(1, now + 1, 1, now).unwrap_err(),
        Error::from(ReserveLedgerError::FutureTimestamp)
    );
    system.attest(1, now - TTL as i64, 1, now).unwrap();
}

#[test]
fn test_backing_ratio_follows_issuance() {
    let mut system = Harness::new();
    let mut alice = Harness::holder(Pubkey::new_unique());

    assert_eq!(
        system.reserve.backing_ratio(system.ledger.total_issuance),
        BackingRatio {
            fully_backed: true,
            ratio_bps: BASIS_POINT_MAX
        }
    );

    system.attest(1_000 * ONE_TOKEN, T, 1, T).unwrap();
    system.mint(&mut alice, 1_000 * ONE_TOKEN).unwrap();
    assert_eq!(
        system.reserve.backing_ratio(system.ledger.total_issuance),
        BackingRatio {
            fully_backed: true,
            ratio_bps: 10_000
        }
    );

    system.mint(&mut alice, 250 * ONE_TOKEN).unwrap();
    assert_eq!(
        system.reserve.backing_ratio(system.ledger.total_issuance),
        BackingRatio {
            fully_backed: false,
            ratio_bps: 8_000
        }
    );
}

#[test]
fn test_fetch_cycle_commits_custodian_report() {
    let mut system = Harness::new();
    assert_eq!(system.coordinator.request_window(T).next_sequence, 1);

    let request = system.issue(T).unwrap();
    assert_eq!(request.token, request_token(&system.coordinator_key, 1));

    let response = custodian_response("1250000.5", "01-01-2024 00:00:00");
    let outcome = system
        .fulfill(&request.token, Some(&request), &response, T + 30)
        .unwrap();

    assert_eq!(outcome, FulfillmentOutcome::Fulfilled);
    assert_eq!(system.reserve.balance, 1_250_000 * ONE_TOKEN + ONE_TOKEN / 2);
    assert_eq!(system.reserve.observed_at, T);
    assert_eq!(system.reserve.sequence, 1);
    assert_eq!(system.coordinator.last_success_at, Some(T + 30));

    let window = system.coordinator.request_window(T + 30);
    assert!(!window.can_issue);
    assert_eq!(window.seconds_remaining, MIN_INTERVAL);
    assert_eq!(window.next_sequence, 2);
}

#[test]
fn test_repeat_fulfill_behaves_like_unknown_token() {
    let mut system = Harness::new();
    let request = system.issue(T).unwrap();
    let response = custodian_response("10", "01-01-2024 00:00:00");

    system
        .fulfill(&request.token, Some(&request), &response, T)
        .unwrap();

    // The request account is closed after the first fulfill, so nothing is found.
    let repeat = system.fulfill(&request.token, None, &response, T).unwrap_err();
    let unknown = system.fulfill(&[0xAB; 32], None, &response, T).unwrap_err();
    assert_eq!(repeat, Error::from(ReserveLedgerError::UnknownRequest));
    assert_eq!(repeat, unknown);
    assert_eq!(system.reserve.sequence, 1);
    assert_eq!(system.coordinator.total_fulfilled, 1);
}

#[test]
fn test_requests_issue_back_to_back_before_any_success() {
    let mut system = Harness::new();

    let first = system.issue(T).unwrap();
    let second = system.issue(T).unwrap();

    assert_eq!((first.sequence, second.sequence), (1, 2));
    assert_eq!(system.coordinator.outstanding, 2);
    assert_eq!(system.coordinator.can_issue_request(T), (true, 0));
}

#[test]
fn test_upstream_failure_never_touches_reserve() {
    let mut system = Harness::new();
    system.attest(5_000, T, 1, T).unwrap();
    let request = system.issue(T).unwrap();

    let outcome = system
        .fulfill(
            &request.token,
            Some(&request),
            &FetchResponse::failure("custodian API returned 503"),
            T + 1,
        )
        .unwrap();

    assert!(matches!(outcome, FulfillmentOutcome::Failed { .. }));
    assert_eq!(system.reserve.balance, 5_000);
    assert_eq!(system.reserve.sequence, 1);
    assert_eq!(system.coordinator.last_success_at, None);
}

// The coordinator allocates sequences independently of direct attestations;
// a request older than a direct update is refused when it lands.
#[test]
fn test_direct_attestation_can_outrun_coordinator_sequence() {
    let mut system = Harness::new();
    let request = system.issue(T).unwrap();
    system.attest(9_000, T, 10, T).unwrap();

    let response = custodian_response("1", "01-01-2024 00:00:00");
    let outcome = system
        .fulfill(&request.token, Some(&request), &response, T + 1)
        .unwrap();

    assert_eq!(
        outcome,
        FulfillmentOutcome::Rejected {
            error_code: u32::from(ReserveLedgerError::InvalidSequence),
            compared_values: Some(["1".to_string(), "11".to_string()]),
        }
    );
    assert_eq!(system.reserve.balance, 9_000);
}

#[test]
fn test_last_admin_revocation_is_an_open_risk() {
    let mut system = Harness::new();
    let admin = system.admin;

    assert!(system.registry.revoke(&admin, Role::Admin, admin).unwrap());
    assert_eq!(system.registry.holder_count(Role::Admin), 0);

    // No one can restore administration afterwards.
    let err = system
        .registry
        .grant(&admin, Role::Admin, admin, T)
        .unwrap_err();
    assert_eq!(err, Error::from(ReserveLedgerError::Unauthorized));
    let err = system.ledger.set_paused(&system.registry, &admin, true).unwrap_err();
    assert_eq!(err, Error::from(ReserveLedgerError::Unauthorized));

    // Existing operational roles keep working.
    let mut alice = Harness::holder(Pubkey::new_unique());
    system.mint(&mut alice, 1).unwrap();
}

#[test]
fn test_rejected_operations_leave_state_untouched() {
    let mut system = Harness::new();
    let redeemer = system.redeemer;
    let mut alice = Harness::holder(Pubkey::new_unique());
    system.mint(&mut alice, 100).unwrap();
    system.attest(1_000, T, 1, T).unwrap();

    let outsider = Pubkey::new_unique();
    assert!(system.ledger.mint(&system.registry, &outsider, &mut alice, 1).is_err());
    assert!(system.mint(&mut alice, 0).is_err());
    assert!(system
        .ledger
        .burn(&system.registry, &redeemer, &mut alice, 101)
        .is_err());
    assert!(system.attest(0, T, 2, T).is_err());
    assert!(system.attest(2_000, T, 1, T).is_err());

    assert_eq!(alice.balance, 100);
    assert_eq!(system.ledger.total_issuance, 100);
    assert_eq!(system.ledger.audit_counter, 1);
    assert_eq!(
        (system.reserve.balance, system.reserve.observed_at, system.reserve.sequence),
        (1_000, T, 1)
    );
}
