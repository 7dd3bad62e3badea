use fixture_gen::DEFAULT_BUFFER_SIZE;

use crate::common::Workspace;
use crate::{KB, MB};

#[test]
fn small_file() {
    let ws = Workspace::new();

    let digest = ws.generate("small.bin", 100);

    ws.assert_file("small.bin", 100, &digest);
}

#[test]
fn file_spanning_several_buffers() {
    const SIZE: u64 = 5 * DEFAULT_BUFFER_SIZE as u64 + 42;

    let ws = Workspace::new();

    let digest = ws.generate("spanning.bin", SIZE);

    ws.assert_file("spanning.bin", SIZE, &digest);
}

#[test]
fn large_file() {
    let ws = Workspace::new();

    let digest = ws.generate("large.bin", 8 * MB);

    ws.assert_file("large.bin", 8 * MB, &digest);
}

#[test]
fn same_size_files_differ() {
    let ws = Workspace::new();

    let first = ws.generate("first.bin", 4 * KB);
    let second = ws.generate("second.bin", 4 * KB);

    assert_ne!(first, second);
    assert_ne!(
        std::fs::read(ws.path("first.bin")).unwrap(),
        std::fs::read(ws.path("second.bin")).unwrap()
    );
}

#[test]
fn digest_hex_round_trips() {
    let ws = Workspace::new();

    let digest = ws.generate("hex.bin", KB);
    let hex = digest.to_string();

    assert_eq!(hex.len(), 40);
    assert_eq!(hex.parse::<fixture_gen::Digest>().unwrap(), digest);
}
