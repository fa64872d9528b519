use std::process::Command;

fn storefront() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storefront"));
    cmd.env_remove("STOREFRONT_CATALOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn catalog_lists_the_embedded_menu() {
    let output = storefront().arg("catalog").output().expect("run storefront");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("Waffle with Berries"));
    assert!(stdout.contains("$6.50"));
}

#[test]
fn order_replays_intents_and_prints_totals() {
    let output = storefront()
        .args([
            "order",
            "add:Waffle with Berries",
            "inc:Waffle with Berries",
            "inc:Waffle with Berries",
        ])
        .output()
        .expect("run storefront");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Your Cart (3)"));
    assert!(stdout.contains("Waffle with Berries 3x @ $6.50 $19.50"));
}

#[test]
fn order_json_reports_overlay_after_confirm() {
    let output = storefront()
        .args(["order", "add:Classic Tiramisu", "confirm", "--json"])
        .output()
        .expect("run storefront");

    assert!(output.status.success());
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json page");
    assert_eq!(page["overlay"]["title"], "Order Confirmed");
    assert_eq!(page["overlay"]["total_label"], "$5.50");
}

#[test]
fn rejected_intents_are_skipped_unless_strict() {
    let lenient = storefront()
        .args(["order", "confirm", "add:Pistachio Baklava"])
        .output()
        .expect("run storefront");
    assert!(lenient.status.success());
    let stderr = String::from_utf8(lenient.stderr).expect("utf8");
    assert!(stderr.contains("skipped 'confirm'"));

    let strict = storefront()
        .args(["order", "--strict", "add:Pavlova"])
        .output()
        .expect("run storefront");
    assert!(!strict.status.success());
}

#[test]
fn malformed_intent_is_a_usage_error() {
    let output = storefront()
        .args(["order", "buy:Tart"])
        .output()
        .expect("run storefront");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("unknown intent"));
}

#[test]
fn info_logs_go_to_stderr_by_default() {
    let output = storefront()
        .args(["order", "add:Classic Tiramisu", "confirm", "--json"])
        .output()
        .expect("run storefront");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("INFO"));
    assert!(stderr.contains("order confirmed"));
    serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("stdout stays pure json");
}
