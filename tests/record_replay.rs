//! Record-replay integration tests.
//!
//! Recording captures every clock reading and entropy draw the generator
//! makes; replaying the cassettes must reproduce the exact same identifiers,
//! both through the library and through the binary.

use std::path::Path;
use std::process::Command;

use serde_json::json;

use utilkit::cassette::recorder::CassetteRecorder;
use utilkit::context::ServiceContext;
use utilkit::generator::IdentifierGenerator;
use utilkit::identifier::{Identifier, IdentifierFormat};

fn generate(ctx: &ServiceContext, format: IdentifierFormat, count: u32) -> Vec<Identifier> {
    IdentifierGenerator::from_context(ctx).generate(format, count).unwrap()
}

fn utilkit(env: (&str, &Path), args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_utilkit"))
        .env_remove("UTILKIT_RECORD")
        .env_remove("UTILKIT_REPLAY")
        .env(env.0, env.1)
        .args(args)
        .output()
        .expect("failed to run utilkit binary")
}

#[test]
fn recorded_session_replays_identically() {
    let dir = std::env::temp_dir().join("utilkit_record_replay_lib");
    let _ = std::fs::remove_dir_all(&dir);

    let (ctx, session) = ServiceContext::recording_at(dir.clone()).unwrap();
    let mut recorded = generate(&ctx, IdentifierFormat::V4, 3);
    recorded.extend(generate(&ctx, IdentifierFormat::V1, 3));
    drop(ctx);
    session.finish().unwrap();

    for _ in 0..2 {
        let replay = ServiceContext::replaying_path(&dir).unwrap();
        let mut replayed = generate(&replay, IdentifierFormat::V4, 3);
        replayed.extend(generate(&replay, IdentifierFormat::V1, 3));
        assert_eq!(replayed, recorded);
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn hand_written_cassette_yields_exact_identifier() {
    let dir = std::env::temp_dir().join("utilkit_record_replay_manual");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("v1.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, "v1-exact", "0.1.0");
    recorder.record("clock", "now", json!(null), json!("2023-11-14T22:13:20.123Z"));
    recorder.record("entropy", "below", json!({"bound": 16384}), json!(0x0123));
    recorder.record("entropy", "below", json!({"bound": 1u64 << 48}), json!(0xabcd_ef01_2345_u64));
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&path).unwrap();
    let ids = generate(&ctx, IdentifierFormat::V1, 1);
    assert_eq!(ids[0].as_str(), "cfe5687b-018b-1000-8123-abcdef012345");

    let output = utilkit(("UTILKIT_REPLAY", &path), &["generate", "-f", "v1"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cfe5687b-018b-1000-8123-abcdef012345\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn binary_recording_replays_through_binary() {
    let dir = std::env::temp_dir().join("utilkit_record_replay_bin");
    let _ = std::fs::remove_dir_all(&dir);

    let recorded = utilkit(("UTILKIT_RECORD", &dir), &["generate", "-f", "v1", "-n", "5"]);
    assert!(recorded.status.success());
    assert!(String::from_utf8_lossy(&recorded.stderr).contains("Recording saved to"));

    let replayed = utilkit(("UTILKIT_REPLAY", &dir), &["generate", "-f", "v1", "-n", "5"]);
    assert!(replayed.status.success());
    assert_eq!(recorded.stdout, replayed.stdout);

    let _ = std::fs::remove_dir_all(&dir);
}
