use gip_common::check::{Checker, Status};
use gip_common::config::CheckOptions;
use gip_core::run_check;
use gip_integration_tests::util::{MockInterfaces, MockResolver, eth0, lo, mapped0, wg0};

async fn check(host: &str, interface: &str, resolver: &MockResolver, table: &MockInterfaces) -> Checker {
    run_check(&CheckOptions::new(host, interface), resolver, table).await
}

#[tokio::test]
async fn reachable_when_interface_address_is_resolved() {
    let resolver = MockResolver::answering(&["93.184.216.34"]);
    let table = MockInterfaces::with(vec![lo(), eth0([93, 184, 216, 34])]);

    let checker = check("example.com", "eth0", &resolver, &table).await;

    assert_eq!(checker.status, Status::Ok);
    assert_eq!(checker.exit_code(), 0);
    assert_eq!(
        checker.to_string(),
        "GIP OK: Can reach 'eth0' (93.184.216.34) with example.com"
    );
}

#[tokio::test]
async fn unreachable_when_answer_differs() {
    let resolver = MockResolver::answering(&["93.184.216.34"]);
    let table = MockInterfaces::with(vec![lo(), eth0([10, 0, 0, 5])]);

    let checker = check("example.com", "eth0", &resolver, &table).await;

    assert_eq!(checker.status, Status::Critical);
    assert_eq!(checker.exit_code(), 2);
    assert_eq!(checker.message, "Can not reach 'eth0' (10.0.0.5) with example.com");
}

#[tokio::test]
async fn any_answer_in_a_dual_stack_set_may_match() {
    let resolver = MockResolver::answering(&["2606:2800:220:1::248", "198.51.100.9", "93.184.216.34"]);
    let table = MockInterfaces::with(vec![eth0([93, 184, 216, 34])]);

    let checker = check("example.com", "eth0", &resolver, &table).await;

    assert_eq!(checker.status, Status::Ok);
}

#[tokio::test]
async fn missing_interface_is_critical() {
    let resolver = MockResolver::answering(&["93.184.216.34"]);
    let table = MockInterfaces::with(vec![lo(), eth0([93, 184, 216, 34])]);

    let checker = check("example.com", "ppp9", &resolver, &table).await;

    assert_eq!(checker.status, Status::Critical);
    assert_eq!(checker.message, "Interface not found: ppp9");
}

#[tokio::test]
async fn loopback_only_interface_is_critical() {
    let resolver = MockResolver::answering(&["127.0.0.1"]);
    let table = MockInterfaces::with(vec![lo()]);

    let checker = check("localhost", "lo", &resolver, &table).await;

    assert_eq!(checker.status, Status::Critical);
    assert_eq!(checker.message, "'lo' does not have an appropriate address");
}

#[tokio::test]
async fn ipv6_only_interface_is_critical() {
    let resolver = MockResolver::answering(&["fdeb:446c:912d:8da::1"]);
    let table = MockInterfaces::with(vec![wg0()]);

    let checker = check("vpn.example.com", "wg0", &resolver, &table).await;

    assert_eq!(checker.status, Status::Critical);
    assert_eq!(checker.message, "'wg0' does not have an appropriate address");
}

#[tokio::test]
async fn mapped_interface_address_matches_dotted_answer() {
    let resolver = MockResolver::answering(&["198.51.100.4"]);
    let table = MockInterfaces::with(vec![mapped0()]);

    let checker = check("example.net", "mapped0", &resolver, &table).await;

    assert_eq!(checker.message, "Can reach 'mapped0' (198.51.100.4) with example.net");
}

#[tokio::test]
async fn resolution_failure_is_critical_and_names_host() {
    let resolver = MockResolver::failing();
    let table = MockInterfaces::with(vec![eth0([93, 184, 216, 34])]);

    let checker = check("nope.invalid", "eth0", &resolver, &table).await;

    assert_eq!(checker.status, Status::Critical);
    assert_eq!(checker.message, "Failed to lookup host: nope.invalid");
}

#[tokio::test]
async fn resolution_failure_wins_over_missing_interface() {
    let resolver = MockResolver::failing();
    let table = MockInterfaces::with(vec![]);

    let checker = check("nope.invalid", "ppp9", &resolver, &table).await;

    assert_eq!(checker.message, "Failed to lookup host: nope.invalid");
}

#[tokio::test]
async fn enumeration_failure_is_critical() {
    let resolver = MockResolver::answering(&["93.184.216.34"]);
    let table = MockInterfaces::broken();

    let checker = check("example.com", "eth0", &resolver, &table).await;

    assert_eq!(checker.status, Status::Critical);
    assert_eq!(checker.message, "Failed to get interfaces");
}

#[tokio::test]
async fn repeated_runs_give_identical_results() {
    let resolver = MockResolver::answering(&["93.184.216.34"]);
    let table = MockInterfaces::with(vec![lo(), eth0([10, 0, 0, 5])]);

    let first = check("example.com", "eth0", &resolver, &table).await;
    let second = check("example.com", "eth0", &resolver, &table).await;

    assert_eq!(first, second);
}
