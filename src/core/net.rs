// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::error::{Result, StatsError};
use crate::params::{API_PREFIX, HOST};

fn fetch_err(url: &str, reason: impl Into<String>) -> StatsError {
    StatsError::Fetch { url: url.to_string(), reason: reason.into() }
}

/// GET `API_PREFIX + path` from the wiki host and return the body.
pub fn http_get(path: &str) -> Result<String> {
    let full = format!("{}{}", API_PREFIX, path);
    let url = format!("http://{}{}", HOST, full);
    let io = |e: std::io::Error| fetch_err(&url, e.to_string());

    let mut s = TcpStream::connect((HOST, 80)).map_err(io)?;
    s.set_read_timeout(Some(Duration::from_secs(15))).map_err(io)?;
    s.set_write_timeout(Some(Duration::from_secs(15))).map_err(io)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: lol_stats/1.1\r\nConnection: close\r\n\r\n",
        full, HOST
    );
    s.write_all(req.as_bytes()).map_err(io)?;
    s.flush().map_err(io)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(io)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        loge!("net: {} for {}", status, url);
        return Err(fetch_err(&url, format!("HTTP error: {status}")));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| fetch_err(&url, "malformed HTTP response"))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
