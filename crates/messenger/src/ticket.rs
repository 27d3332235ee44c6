use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

const PREFIX: &str = "CM-";
const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 4;
const DATE_LEN: usize = 8;

/// Human-readable reference handed to the resident after a send.
///
/// Format: `CM-<YYYYMMDD>-<4 base-36 uppercase chars>`. The suffix is random,
/// so two tickets on the same day can collide; the office treats it as a
/// reference, not a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket(String);

impl Ticket {
    /// Generate a ticket for an attempt made at `now`.
    pub fn generate<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        Self(format!("{PREFIX}{}-{suffix}", now.format("%Y%m%d")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `s` has the shape of a ticket.
    pub fn is_well_formed(s: &str) -> bool {
        let Some(rest) = s.strip_prefix(PREFIX) else {
            return false;
        };
        let Some((date, suffix)) = rest.split_once('-') else {
            return false;
        };
        date.len() == DATE_LEN
            && date.bytes().all(|b| b.is_ascii_digit())
            && suffix.len() == SUFFIX_LEN
            && suffix.bytes().all(|b| SUFFIX_ALPHABET.contains(&b))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Ticket> for String {
    fn from(ticket: Ticket) -> Self {
        ticket.0
    }
}
