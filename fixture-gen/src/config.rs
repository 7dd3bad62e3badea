//! Constants shared between fixture generation and bulk file transfer code.

/// Default buffer size for file I/O operations.
///
/// Bulk copy code and the fixture generator both move data in chunks of this
/// size, so generated fixtures are written at the same granularity the code
/// under test reads and writes them.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Length in bytes of a SHA-1 digest
pub const DIGEST_LEN: usize = 20;

/// SHA-1 digest of the empty byte sequence
pub const EMPTY_SHA1: [u8; DIGEST_LEN] = [
    0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60, 0x18, 0x90,
    0xaf, 0xd8, 0x07, 0x09,
];
