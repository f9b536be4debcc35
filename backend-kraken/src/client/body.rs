use std::io::Read;

use livescope_core::{Error, Next, Progress, Result};

const CHUNK_SIZE: usize = 8 * 1024;

/// Read a response body chunk by chunk, giving `progress` a chance to abort
/// before every read.
pub(crate) fn read_body<R: Read>(
    mut reader: R,
    content_length: Option<u64>,
    progress: &dyn Fn(&Progress) -> Next,
) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(content_length.unwrap_or(0).min(1 << 20) as usize);
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let tick = Progress {
            bytes_received: body.len() as u64,
            content_length,
        };
        if progress(&tick) == Next::Abort {
            log::debug!("aborting transfer after {} bytes", tick.bytes_received);
            return Err(Error::Cancelled);
        }

        let read = reader
            .read(&mut chunk)
            .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..read]);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;

    /// Reader handing out at most `step` bytes per call
    struct Trickle {
        data: Cursor<Vec<u8>>,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(self.step);
            self.data.read(&mut buf[..len])
        }
    }

    #[test]
    fn test_reads_whole_body() {
        let ticks = Cell::new(0);
        let body = read_body(Cursor::new(b"{\"a\":1}".to_vec()), Some(7), &|p| {
            assert_eq!(p.content_length, Some(7));
            ticks.set(ticks.get() + 1);
            Next::Continue
        })
        .unwrap();

        assert_eq!(body, b"{\"a\":1}");
        // one tick before the data chunk, one before the final empty read
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn test_abort_discards_partial_body() {
        let reader = Trickle {
            data: Cursor::new(vec![b'x'; 64]),
            step: 16,
        };
        let seen = Cell::new(0u64);

        let err = read_body(reader, None, &|p| {
            seen.set(p.bytes_received);
            if p.bytes_received >= 32 {
                Next::Abort
            } else {
                Next::Continue
            }
        })
        .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(seen.get(), 32);
    }

    #[test]
    fn test_binary_body_is_kept_as_is() {
        let body = read_body(Cursor::new(vec![0xff, 0xfe]), None, &|_| Next::Continue).unwrap();
        assert_eq!(body, [0xffu8, 0xfe]);
    }
}
