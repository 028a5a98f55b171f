//! Integration test for process-wide network selection
//!
//! Selection latches global state, so the whole state machine runs inside
//! one test function. Integration tests get their own process, which keeps
//! this isolated from the unit suite.

use std::panic::{catch_unwind, AssertUnwindSafe};
use umbra_core::chain::{active_params, select_network, select_network_from_flag, Network};

#[test]
fn test_selection_state_machine() {
    // Before any selection the main network answers, without latching
    assert_eq!(active_params().network, Network::Main);

    // First selection wins
    let params = select_network(Network::Test);
    assert_eq!(params.network, Network::Test);
    assert_eq!(active_params().network, Network::Test);

    // Re-selecting the same network is a no-op
    let again = select_network_from_flag(true);
    assert_eq!(again.network, Network::Test);

    // Switching networks mid-process is a startup bug and must abort
    let switch = catch_unwind(AssertUnwindSafe(|| select_network(Network::Main)));
    assert!(switch.is_err());

    // The reserved variant carries no parameters
    let regtest = catch_unwind(AssertUnwindSafe(|| select_network(Network::Regtest)));
    assert!(regtest.is_err());

    // Failed attempts must not clobber the active network
    assert_eq!(active_params().network, Network::Test);
}
