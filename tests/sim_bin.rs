use std::process::Command;

use broadside::{simulate, TOTAL_SHIP_CELLS};

#[test]
fn simulation_is_deterministic() {
    let a = simulate(42).unwrap();
    let b = simulate(42).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed, 42);
    assert!(a.rounds >= 1);
    // the winner landed a hit on every ship cell
    assert!(a.player_shots >= TOTAL_SHIP_CELLS || a.bot_shots >= TOTAL_SHIP_CELLS);
    assert!(a.player_shots <= 100 && a.bot_shots <= 100);
}

#[test]
fn sim_binary_prints_json_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("7")
        .output()
        .expect("run sim binary");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["seed"], 7);
    let winner = report["winner"].as_str().unwrap();
    assert!(winner == "Player" || winner == "Bot");
}

#[test]
fn simulation_finishes_for_many_seeds() {
    for seed in 0..200 {
        let report = simulate(seed).unwrap_or_else(|e| panic!("seed {}: {}", seed, e));
        assert_eq!(report.seed, seed);
    }
}
