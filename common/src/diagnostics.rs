//! Diagnostic log for the badge.
//!
//! A small ring buffer of recent messages: orientation-service failures,
//! rejected viewport updates and state changes. The simulator shows it as an
//! overlay; firmware targets can mirror lines to RTT.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Badge activated");
//! log.push_fmt(format_args!("Unlock failed: {err}"));
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for diagnostic messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages. Old messages are dropped when
/// the buffer is full; long messages are truncated, never rejected.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    /// Lines ever pushed, including dropped ones (wrapping).
    pushed: u32,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            pushed: 0,
        }
    }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LineWriter::default();
        line.write_str(msg).ok();
        self.push_line(line.0);
    }

    /// Push a formatted message, truncated to the line length.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = LineWriter::default();
        line.write_fmt(args).ok();
        self.push_line(line.0);
    }

    fn push_line(
        &mut self,
        line: String<LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
        self.pushed = self.pushed.wrapping_add(1);
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Messages pushed after a sequence number returned earlier by
    /// [`DebugLog::sequence`], oldest first. Dropped lines are skipped.
    pub fn since(
        &self,
        sequence: u32,
    ) -> impl Iterator<Item = &str> {
        let fresh = (self.pushed.wrapping_sub(sequence) as usize).min(self.buffer.len());
        self.iter().skip(self.buffer.len() - fresh)
    }

    /// Total number of messages pushed so far (wrapping).
    #[inline]
    pub const fn sequence(&self) -> u32 { self.pushed }

    /// Most recent message.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Get number of log entries.
    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// `fmt::Write` sink that keeps the first `LOG_LINE_LENGTH - 1` chars and drops the rest.
#[derive(Default)]
struct LineWriter(String<LOG_LINE_LENGTH>);

impl Write for LineWriter {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.chars().count() >= LOG_LINE_LENGTH - 1 {
                break;
            }
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Badge activated");
        assert_eq!(log.len(), 1);

        log.push("Badge color 1");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("Badge color 1"));
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();

        for i in 0..LOG_BUFFER_SIZE {
            let mut msg: String<16> = String::new();
            push_u32(&mut msg, i as u32);
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        // One more drops the oldest
        log.push("New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        let long_msg = "This is a very long message that exceeds the maximum line length limit";
        log.push(long_msg);

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.chars().count(), LOG_LINE_LENGTH - 1);
        assert!(long_msg.starts_with(stored));
    }

    #[test]
    fn test_push_fmt_truncates_instead_of_dropping() {
        let mut log = DebugLog::new();
        let cause = "orientation control unsupported on this very old platform build";
        log.push_fmt(format_args!("Unlock failed: {cause}"));

        let stored = log.last().unwrap();
        assert!(stored.starts_with("Unlock failed: orientation"));
        assert!(stored.len() < LOG_LINE_LENGTH);
    }

    #[test]
    fn test_since_skips_seen_and_dropped_lines() {
        let mut log = DebugLog::new();
        log.push("a");
        let seen = log.sequence();
        log.push("b");
        log.push("c");
        assert!(log.since(seen).eq(["b", "c"]));
        assert_eq!(log.since(log.sequence()).count(), 0);

        for _ in 0..LOG_BUFFER_SIZE * 2 {
            log.push("x");
        }
        assert_eq!(log.since(seen).count(), LOG_BUFFER_SIZE);
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 123);
        assert_eq!(s.as_str(), "123");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 9999);
        assert_eq!(s.as_str(), "9999");
    }
}
