//! Universal newline input
//!
//! Rewrites `\r\n` and lone `\r` to `\n` and guarantees non-empty input
//! ends with `\n`, so every record the CSV reader returns has consumed
//! exactly one terminating newline.

use std::io::{self, Read};

pub struct UniversalNewlines<R> {
    inner: R,
    after_cr: bool,
    last: Option<u8>,
    done: bool,
}

impl<R: Read> UniversalNewlines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            after_cr: false,
            last: None,
            done: false,
        }
    }
}

impl<R: Read> Read for UniversalNewlines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || self.done {
            return Ok(0);
        }

        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                self.done = true;
                // Terminate a final unterminated line
                if matches!(self.last, Some(b) if b != b'\n') {
                    self.last = Some(b'\n');
                    buf[0] = b'\n';
                    return Ok(1);
                }
                return Ok(0);
            }

            let mut out = 0;
            for i in 0..n {
                let b = buf[i];
                if self.after_cr {
                    self.after_cr = false;
                    if b == b'\n' {
                        continue;
                    }
                }
                if b == b'\r' {
                    self.after_cr = true;
                    buf[out] = b'\n';
                } else {
                    buf[out] = b;
                }
                out += 1;
            }

            // A chunk holding only the `\n` of a split `\r\n` yields nothing
            if out > 0 {
                self.last = Some(buf[out - 1]);
                return Ok(out);
            }
        }
    }
}
