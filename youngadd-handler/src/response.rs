//! HTTP-style response assembly for the CGI output stream.

use std::fmt::Display;
use std::io::{self, Write};

/// Statuses the adder can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
}

impl Status {
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
        }
    }

    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
        }
    }
}

/// One complete response: headers plus body, ready for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    /// A `200` response carrying an HTML document.
    #[must_use]
    pub fn html(body: String) -> Self {
        Self {
            status: Status::Ok,
            content_type: "text/html",
            body,
        }
    }

    /// A `400` response with a one-line plaintext explanation.
    #[must_use]
    pub fn bad_request(reason: impl Display) -> Self {
        Self {
            status: Status::BadRequest,
            content_type: "text/plain",
            body: format!("Bad request: {reason}\n"),
        }
    }

    /// Exact byte length of the body, as reported in `Content-length`.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    // Non-200 statuses are conveyed to the gateway through the CGI `Status`
    // header; 200 is the CGI default and stays implicit.
    fn head(&self) -> String {
        let mut head = String::new();
        if self.status != Status::Ok {
            head.push_str(&format!(
                "Status: {} {}\r\n",
                self.status.code(),
                self.status.reason()
            ));
        }
        head.push_str("Connection: close\r\n");
        head.push_str(&format!("Content-length: {}\r\n", self.content_length()));
        head.push_str(&format!("Content-type: {}\r\n", self.content_type));
        head.push_str("\r\n");
        head
    }

    /// Writes the headers, the blank separator line, and the body to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.head().as_bytes())?;
        out.write_all(self.body.as_bytes())
    }

    /// The full response as it goes over the wire.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = self.head();
        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_head_matches_the_cgi_contract() {
        let response = Response::html("<html></html>\n".to_string());
        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert_eq!(
            text,
            "Connection: close\r\nContent-length: 14\r\nContent-type: text/html\r\n\r\n<html></html>\n"
        );
    }

    #[test]
    fn bad_request_carries_a_status_header() {
        let response = Response::bad_request("nope");
        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.starts_with("Status: 400 Bad Request\r\nConnection: close\r\n"));
        assert!(text.ends_with("\r\n\r\nBad request: nope\n"));
        assert_eq!(response.content_type, "text/plain");
    }

    #[test]
    fn content_length_counts_body_bytes() {
        let response = Response::bad_request("nope");
        assert_eq!(response.content_length(), "Bad request: nope\n".len());
        let rendered = String::from_utf8(response.to_bytes()).unwrap();
        assert!(rendered.contains("Content-length: 18\r\n"));
    }

    #[test]
    fn write_to_and_to_bytes_agree() {
        let response = Response::html("x".to_string());
        let mut sink = Vec::new();
        response.write_to(&mut sink).unwrap();
        assert_eq!(sink, response.to_bytes());
    }

    #[test]
    fn status_codes_and_reasons() {
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::Ok.reason(), "OK");
        assert_eq!(Status::BadRequest.code(), 400);
        assert_eq!(Status::BadRequest.reason(), "Bad Request");
    }
}
