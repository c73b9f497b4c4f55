//! Minimal preview server for the generated site.
//!
//! Serves files straight out of the output directory over plain HTTP on
//! loopback. One request at a time; this exists so the site can be eyeballed
//! before deploying, nothing more.

use std::fs;
use std::io::{self, BufRead, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Bind on loopback and serve `out_dir` until the process is killed.
///
/// `port` 0 picks an ephemeral port. The bound URL is printed before the
/// accept loop starts so the caller knows where to point the browser.
pub fn serve(out_dir: &Path, port: u16) -> Result<()> {
    let bind_addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&bind_addr)
        .with_context(|| format!("binding preview server on {bind_addr}"))?;
    let port = listener
        .local_addr()
        .context("reading bound address")?
        .port();
    println!("Previewing {} at http://127.0.0.1:{port}", out_dir.display());
    println!("Ctrl-C to stop.");

    for stream in listener.incoming().flatten() {
        handle_connection(stream, out_dir);
    }
    Ok(())
}

fn handle_connection(mut stream: TcpStream, out_dir: &Path) {
    let mut request_line = String::new();
    let mut reader = io::BufReader::new(&stream);
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let Some(path) = parse_request_path(request_line.trim()) else {
        let _ = respond(&mut stream, 400, "text/plain", b"bad request");
        return;
    };
    debug!("GET {path}");

    match resolve(out_dir, &path) {
        Some(file) => {
            let content_type = content_type_for(&file);
            match fs::read(&file) {
                Ok(body) => {
                    let _ = respond(&mut stream, 200, content_type, &body);
                }
                Err(_) => {
                    let _ = respond(&mut stream, 404, "text/plain", b"not found");
                }
            }
        }
        None => {
            let _ = respond(&mut stream, 404, "text/plain", b"not found");
        }
    }
}

/// Extract the path from a `GET /path HTTP/1.1` request line.
fn parse_request_path(request_line: &str) -> Option<String> {
    let mut parts = request_line.split_whitespace();
    if parts.next() != Some("GET") {
        return None;
    }
    let raw = parts.next()?;
    let without_query = raw.split('?').next().unwrap_or(raw);
    Some(without_query.to_string())
}

/// Map a request path onto a file under the output directory. Directory
/// requests fall back to `index.html`; traversal segments are rejected.
fn resolve(out_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.split('/').any(|segment| segment == "..") {
        return None;
    }
    let candidate = if trimmed.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(trimmed)
    };
    if candidate.is_dir() {
        return Some(candidate.join("index.html"));
    }
    Some(candidate)
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn respond(
    stream: &mut TcpStream,
    status: u16,
    content_type: &str,
    body: &[u8],
) -> io::Result<()> {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        _ => "Not Found",
    };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )?;
    stream.write_all(body)?;
    stream.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_line_parsing() {
        assert_eq!(
            parse_request_path("GET /users.html HTTP/1.1"),
            Some("/users.html".to_string())
        );
        assert_eq!(
            parse_request_path("GET /img/a.svg?v=2 HTTP/1.1"),
            Some("/img/a.svg".to_string())
        );
        assert_eq!(parse_request_path("POST / HTTP/1.1"), None);
        assert_eq!(parse_request_path(""), None);
    }

    #[test]
    fn root_resolves_to_index() {
        let resolved = resolve(Path::new("site"), "/").unwrap();
        assert_eq!(resolved, Path::new("site").join("index.html"));
    }

    #[test]
    fn traversal_is_rejected() {
        assert!(resolve(Path::new("site"), "/../secret").is_none());
        assert!(resolve(Path::new("site"), "/img/../../secret").is_none());
    }

    #[test]
    fn content_types_cover_site_assets() {
        assert_eq!(
            content_type_for(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type_for(Path::new("img/logo.svg")), "image/svg+xml");
        assert_eq!(content_type_for(Path::new("img/me.jpg")), "image/jpeg");
        assert_eq!(
            content_type_for(Path::new("unknown.bin")),
            "application/octet-stream"
        );
    }
}
