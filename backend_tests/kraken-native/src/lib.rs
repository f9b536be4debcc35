//! In-process HTTP stub used by the integration tests.
//!
//! Every connection gets the same canned response. The stub records what it
//! received so tests can check the request line and headers.

use std::{
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    /// Send the body `chunk` bytes at a time, sleeping `delay` in between.
    pub trickle: Option<(usize, Duration)>,
}

impl StubResponse {
    pub fn json(body: &serde_json::Value) -> Self {
        Self::with_status(200, body.to_string())
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            trickle: None,
        }
    }

    pub fn trickled(mut self, chunk: usize, delay: Duration) -> Self {
        self.trickle = Some((chunk.max(1), delay));
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request target, e.g. `/kraken/search/streams?limit=10&q=rust`.
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct StubServer {
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn start(response: StubResponse) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("binding stub server")?;
        let addr = listener.local_addr()?;
        let connections = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let (conn_count, recorded) = (connections.clone(), requests.clone());
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                conn_count.fetch_add(1, Ordering::SeqCst);
                let (response, recorded) = (response.clone(), recorded.clone());
                thread::spawn(move || {
                    // the client hanging up mid-body is expected in cancel tests
                    let _ = serve(stream, &response, &recorded);
                });
            }
        });

        Ok(StubServer {
            addr,
            connections,
            requests,
        })
    }

    /// API root pointing at this stub, shaped like the real one.
    pub fn api_root(&self) -> String {
        format!("http://{}/kraken/", self.addr)
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

/// An address nothing listens on.
pub fn closed_api_root() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/kraken/"))
}

fn serve(
    mut stream: TcpStream,
    response: &StubResponse,
    requests: &Mutex<Vec<RecordedRequest>>,
) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" {
            break;
        }
        if let Some((key, value)) = line.trim_end().split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    if let Ok(mut recorded) = requests.lock() {
        recorded.push(RecordedRequest { target, headers });
    }

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    stream.write_all(head.as_bytes())?;
    stream.flush()?;

    match response.trickle {
        None => stream.write_all(response.body.as_bytes())?,
        Some((chunk, delay)) => {
            for part in response.body.as_bytes().chunks(chunk) {
                thread::sleep(delay);
                stream.write_all(part)?;
                stream.flush()?;
            }
        }
    }
    stream.flush()?;
    Ok(())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
