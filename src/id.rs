//! Lexicographically time-ordered unique identifiers.
//!
//! An id is built from an 8 character encoding of the current millisecond
//! clock followed by a 12 character random block, both drawn from a 64
//! character alphabet ordered by ASCII. Ids therefore sort by generation
//! time. When two ids are requested within the same millisecond the random
//! block is incremented as a base-64 counter instead of re-randomized, so
//! ids stay strictly increasing even inside one clock tick.

use std::sync::Mutex;

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;

// Modeled after base64 web-safe chars, but ordered by ASCII.
const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

struct GeneratorState {
    /// Timestamp of the last id, used to detect two calls in one millisecond.
    last_push_time: i64,
    /// Digits (0..64) of the last random block, kept so a same-millisecond
    /// call can increment them instead of rolling new ones.
    last_rand: [u8; 12],
}

static STATE: Lazy<Mutex<GeneratorState>> = Lazy::new(|| {
    Mutex::new(GeneratorState {
        last_push_time: 0,
        last_rand: [0; 12],
    })
});

/// Generates a unique, lexicographically time-ordered id.
///
/// The leading timestamp digit is dropped before returning, so callers
/// always get 19 characters.
pub fn generate() -> String {
    let now = Utc::now().timestamp_millis();

    let mut state = STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let duplicate_time = now == state.last_push_time;
    state.last_push_time = now;

    let mut remaining = now as u64;
    let mut stamp = [0u8; 8];
    for slot in stamp.iter_mut().rev() {
        *slot = PUSH_CHARS[(remaining % 64) as usize];
        remaining /= 64;
    }
    debug_assert_eq!(remaining, 0, "timestamp exceeds 8 base-64 digits");

    if duplicate_time {
        // Same millisecond as the previous id: bump the previous random
        // block by one instead of rolling a new one.
        for digit in state.last_rand.iter_mut().rev() {
            if *digit == 63 {
                *digit = 0;
            } else {
                *digit += 1;
                break;
            }
        }
    } else {
        let mut rng = rand::rng();
        for digit in state.last_rand.iter_mut() {
            *digit = rng.random_range(0..64);
        }
    }

    let mut id = String::with_capacity(20);
    for &byte in stamp.iter() {
        id.push(byte as char);
    }
    for &digit in state.last_rand.iter() {
        id.push(PUSH_CHARS[digit as usize] as char);
    }

    debug_assert_eq!(id.len(), 20);
    id.split_off(1)
}

#[cfg(test)]
mod tests {
    use super::{PUSH_CHARS, generate};

    #[test]
    fn ids_are_19_characters_from_the_alphabet() {
        let id = generate();
        assert_eq!(id.len(), 19);
        assert!(id.bytes().all(|b| PUSH_CHARS.contains(&b)));
    }

    #[test]
    fn ids_increase_even_within_one_millisecond() {
        let mut previous = generate();
        for _ in 0..1_000 {
            let next = generate();
            assert!(next > previous, "{next} should sort after {previous}");
            previous = next;
        }
    }

    #[test]
    fn alphabet_is_ascii_ordered() {
        let mut sorted = *PUSH_CHARS;
        sorted.sort_unstable();
        assert_eq!(&sorted, PUSH_CHARS);
    }
}
