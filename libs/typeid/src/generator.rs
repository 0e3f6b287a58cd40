//! Monotonic UUIDv7 generation.
//!
//! Implements the "fixed-length dedicated counter" method of RFC 9562 §6.2.
//! The 12-bit `rand_a` field holds a counter that is randomly seeded whenever
//! the millisecond changes and incremented for ids within the same
//! millisecond. When the counter runs out, the timestamp is pushed forward by
//! one millisecond instead of waiting for the clock.
//!
//! If the system clock moves backward, the generator keeps using the last
//! timestamp and remembers the difference as an offset until real time
//! catches up, so ids from one generator never go backward.
//!
//! Layout (big-endian):
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! |                       unix_ts_ms (48)                         |
//! |       unix_ts_ms (cont.)      |  ver  |   counter (12)        |
//! |var|                        random (62)                        |
//! |                         random (cont.)                        |
//! ```

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::{debug, trace};
use uuid::Uuid;

/// Largest value the 12-bit counter can hold.
const MAX_SEQUENCE: u16 = 0x0FFF;

/// Mask for a freshly seeded counter. The top counter bit is left clear so at
/// least 2048 ids fit into one millisecond before the counter overflows.
const SEED_MASK: u16 = 0x07FF;

/// Largest timestamp that fits in 48 bits.
const MAX_TIMESTAMP_MS: u64 = (1 << 48) - 1;

#[derive(Debug, Default)]
struct State {
    last_timestamp_ms: u64,
    offset_ms: u64,
    sequence: u16,
}

impl State {
    /// Advances the counter for a clock reading and returns the
    /// `(timestamp, sequence)` pair to embed.
    fn advance(&mut self, now_ms: u64, mut seed: impl FnMut() -> u16) -> (u64, u16) {
        if self.offset_ms > 0 && now_ms > self.last_timestamp_ms {
            // Real time caught up with the drift, drop the offset.
            self.offset_ms = 0;
        }

        let mut timestamp = now_ms.saturating_add(self.offset_ms);
        if timestamp < self.last_timestamp_ms {
            self.offset_ms = self.last_timestamp_ms - now_ms;
            debug!(
                now_ms,
                last_timestamp_ms = self.last_timestamp_ms,
                offset_ms = self.offset_ms,
                "clock moved backward, holding timestamp"
            );
            timestamp = self.last_timestamp_ms;
        }

        if timestamp != self.last_timestamp_ms {
            self.last_timestamp_ms = timestamp;
            self.sequence = seed();
            return (timestamp, self.sequence);
        }

        if self.sequence < MAX_SEQUENCE {
            self.sequence += 1;
            return (timestamp, self.sequence);
        }

        // Counter exhausted: borrow the next millisecond.
        timestamp += 1;
        trace!(timestamp, "sequence overflow, advancing timestamp");
        self.offset_ms = timestamp.saturating_sub(now_ms);
        self.last_timestamp_ms = timestamp;
        self.sequence = seed();
        (timestamp, self.sequence)
    }
}

/// A UUIDv7 generator with its own monotonic counter.
///
/// Safe to share between threads. Most callers use [`UuidV7Generator::global`];
/// separate instances keep fully independent state.
#[derive(Debug, Default)]
pub struct UuidV7Generator {
    state: Mutex<State>,
}

static GLOBAL: UuidV7Generator = UuidV7Generator::new();

impl UuidV7Generator {
    /// Creates a generator with fresh state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State {
                last_timestamp_ms: 0,
                offset_ms: 0,
                sequence: 0,
            }),
        }
    }

    /// The process-wide generator.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Generates a new UUIDv7 from the current system time.
    #[must_use]
    pub fn generate(&self) -> Uuid {
        self.generate_at(current_unix_ms())
    }

    /// Generates a new UUIDv7 as if the clock read `now_ms`.
    pub(crate) fn generate_at(&self, now_ms: u64) -> Uuid {
        let (timestamp_ms, sequence) = {
            // The state is consistent after every critical section, so a
            // poisoned lock is still usable.
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.advance(now_ms, random_seed)
        };

        let mut bytes = [0u8; 16];
        rand::rng().fill(&mut bytes[8..]);
        bytes[..6].copy_from_slice(&(timestamp_ms & MAX_TIMESTAMP_MS).to_be_bytes()[2..]);
        bytes[6..8].copy_from_slice(&(0x7000 | sequence).to_be_bytes());
        bytes[8] = (bytes[8] & 0x3F) | 0x80;

        Uuid::from_bytes(bytes)
    }
}

fn random_seed() -> u16 {
    rand::rng().random::<u16>() & SEED_MASK
}

fn current_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(MAX_TIMESTAMP_MS))
        .unwrap_or_default()
}

/// Returns the Unix millisecond timestamp stored in the top 48 bits.
#[must_use]
pub fn timestamp_ms(uuid: &Uuid) -> u64 {
    let mut buf = [0u8; 8];
    buf[2..].copy_from_slice(&uuid.as_bytes()[..6]);
    u64::from_be_bytes(buf)
}

/// Returns the 12-bit counter stored after the version nibble.
#[must_use]
pub fn sequence(uuid: &Uuid) -> u16 {
    let bytes = uuid.as_bytes();
    u16::from_be_bytes([bytes[6] & 0x0F, bytes[7]])
}
