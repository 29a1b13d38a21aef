/// Upper bound on an unterminated line before it is thrown away.
const MAX_PENDING: usize = 4096;

/// Splits a byte stream into trimmed text lines, carrying partial lines
/// over between reads.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for &byte in bytes {
            if byte == b'\n' {
                let line = decode_valid(&self.pending);
                self.pending.clear();
                if !line.is_empty() {
                    lines.push(line);
                }
                continue;
            }
            self.pending.push(byte);
            if self.pending.len() > MAX_PENDING {
                tracing::warn!(bytes = self.pending.len(), "discarding unterminated serial line");
                self.pending.clear();
            }
        }
        lines
    }
}

/// Decode the valid UTF-8 runs of `bytes`, dropping invalid sequences.
fn decode_valid(bytes: &[u8]) -> String {
    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    text.trim().to_string()
}
