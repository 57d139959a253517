// src/core/net.rs

// HTTP/1.0 form POST over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HOST, PORT, TIMEOUT_SECS, USER_AGENT};
use crate::error::{CrawlError, CrawlResult};

/// POST `form` to `path` and return the raw response body bytes.
/// Any transport problem or non-200 status maps to `FetchUnavailable`.
pub fn http_post_form(path: &str, form: &[(String, String)]) -> CrawlResult<Vec<u8>> {
    let unavailable = |e: std::io::Error| CrawlError::FetchUnavailable(format!("{HOST}: {e}"));

    let mut s = TcpStream::connect((HOST, PORT)).map_err(unavailable)?;
    s.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS))).map_err(unavailable)?;
    s.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS))).map_err(unavailable)?;

    let body = encode_form(form);
    let req = format!(
        "POST {path} HTTP/1.0\r\nHost: {HOST}\r\nUser-Agent: {USER_AGENT}\r\n\
         Content-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\
         Connection: close\r\n\r\n",
        body.len()
    );
    s.write_all(req.as_bytes()).map_err(unavailable)?;
    s.write_all(body.as_bytes()).map_err(unavailable)?;
    s.flush().map_err(unavailable)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(unavailable)?;
    split_response(&buf, path)
}

/// Separate status line + headers from the body; only 200 is accepted.
/// The body stays as bytes since the page is not UTF-8.
pub fn split_response(buf: &[u8], path: &str) -> CrawlResult<Vec<u8>> {
    let head_end = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| CrawlError::FetchUnavailable(s!("malformed HTTP response")))?;

    let head = String::from_utf8_lossy(&buf[..head_end]);
    let status = head.split("\r\n").next().unwrap_or("");
    if status.split_whitespace().nth(1) != Some("200") {
        return Err(CrawlError::FetchUnavailable(format!("HTTP error: {status} {HOST}{path}")));
    }
    Ok(buf[head_end + 4..].to_vec())
}

/// application/x-www-form-urlencoded body.
pub fn encode_form(form: &[(String, String)]) -> String {
    form.iter()
        .map(|(k, v)| join!(&url_encode(k), "=", &url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
