//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `deptboard_core` linkage and the
//!   embedded schema.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("deptboard_core version={}", deptboard_core::core_version());
    println!(
        "deptboard_core schema_version={}",
        deptboard_core::db::migrations::latest_version()
    );
}
