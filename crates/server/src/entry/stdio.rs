#![forbid(unsafe_code)]

use crate::server::Server;
use crate::support::error_response;
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};

/// Longest accepted request line.
const MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
enum RequestLine {
    Eof,
    Line,
    /// The line ran past the limit; its remainder was skipped unbuffered.
    Oversized,
}

/// Reads one line into `line`, buffering at most `max_bytes + 1` bytes of it.
fn read_request_line<R: BufRead>(
    reader: &mut R,
    line: &mut Vec<u8>,
    max_bytes: usize,
) -> std::io::Result<RequestLine> {
    line.clear();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let read = reader.by_ref().take(limit).read_until(b'\n', line)?;
    if read == 0 {
        return Ok(RequestLine::Eof);
    }
    if read > max_bytes && line.last() != Some(&b'\n') {
        line.clear();
        reader.skip_until(b'\n')?;
        return Ok(RequestLine::Oversized);
    }
    Ok(RequestLine::Line)
}

fn write_newline_json(
    stdout: &mut std::io::StdoutLock<'_>,
    resp: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(stdout, "{}", serde_json::to_string(resp)?)?;
    stdout.flush()?;
    Ok(())
}

pub(crate) fn run_stdio(server: &mut Server) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();

    let mut line = Vec::new();
    loop {
        let resp = match read_request_line(&mut reader, &mut line, MAX_LINE_BYTES)? {
            RequestLine::Eof => break,
            RequestLine::Oversized => {
                tracing::warn!(max_bytes = MAX_LINE_BYTES, "request line too long");
                error_response(Value::Null, 400, "request exceeds max allowed size")
            }
            RequestLine::Line => {
                let raw = line.trim_ascii();
                if raw.is_empty() {
                    continue;
                }
                respond_to_line(server, raw)
            }
        };
        write_newline_json(&mut stdout, &resp)?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

fn respond_to_line(server: &mut Server, raw: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(raw) {
        Ok(request) => server.handle(request),
        Err(err) => {
            tracing::debug!(error = %err, "unparseable request line");
            error_response(Value::Null, 400, &format!("parse error: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn oversized_lines_are_skipped_without_losing_the_next_request() {
        let input = format!("{{\"id\":1}}\n{}\n{{}}\n", "x".repeat(64));
        let mut reader = Cursor::new(input.into_bytes());
        let mut line = Vec::new();

        assert_eq!(
            read_request_line(&mut reader, &mut line, 16).expect("first"),
            RequestLine::Line
        );
        assert_eq!(line, b"{\"id\":1}\n");

        assert_eq!(
            read_request_line(&mut reader, &mut line, 16).expect("second"),
            RequestLine::Oversized
        );
        assert!(line.is_empty());

        assert_eq!(
            read_request_line(&mut reader, &mut line, 16).expect("third"),
            RequestLine::Line
        );
        assert_eq!(line, b"{}\n");
        assert_eq!(
            read_request_line(&mut reader, &mut line, 16).expect("end"),
            RequestLine::Eof
        );
    }

    #[test]
    fn a_line_at_the_limit_is_accepted() {
        let mut reader = Cursor::new(b"0123456789\n".to_vec());
        let mut line = Vec::new();
        assert_eq!(
            read_request_line(&mut reader, &mut line, 10).expect("read"),
            RequestLine::Line
        );
        assert_eq!(line.trim_ascii(), b"0123456789");
    }

    #[test]
    fn multibyte_text_cut_at_the_limit_is_still_oversized() {
        let input = format!("{}\n{{}}", "é".repeat(10));
        let mut reader = Cursor::new(input.into_bytes());
        let mut line = Vec::new();
        assert_eq!(
            read_request_line(&mut reader, &mut line, 7).expect("read"),
            RequestLine::Oversized
        );
        assert_eq!(
            read_request_line(&mut reader, &mut line, 7).expect("tail"),
            RequestLine::Line
        );
        assert_eq!(line, b"{}");
    }
}
