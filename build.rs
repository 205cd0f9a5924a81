const CONTACT_VARS: &[&str] = &[
    "CONTACT_RELAY_URL",
    "CONTACT_ACCESS_KEY",
    "CONTACT_TO_EMAIL",
    "CONTACT_TIMEOUT_SECS",
    "CONTACT_DELIVERY_POLICY",
];

fn main() {
    // Footer copyright year comes from this stamp
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Relay settings are baked in with option_env!
    for var in CONTACT_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
