use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};

use anyhow::{Context, Result};
use youngadd_handler::{Response, serve_query};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw = env::var_os("QUERY_STRING");
    let response = match raw.as_deref().map(OsStr::to_str) {
        None => serve_query(None),
        Some(Some(query)) => {
            log::info!("handling query string {query:?}");
            serve_query(Some(query))
        }
        Some(None) => {
            log::warn!("rejecting query string: not valid UTF-8");
            Response::bad_request("query string is not valid UTF-8")
        }
    };

    // stdout is the response channel; diagnostics stay on stderr.
    let mut stdout = io::stdout().lock();
    response
        .write_to(&mut stdout)
        .context("failed to write response to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
