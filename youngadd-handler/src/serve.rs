use crate::query::Operands;
use crate::render;
use crate::response::Response;

/// Serves one add request: parse the query string, sum, render.
///
/// `None` means the hosting server supplied no query string at all; the
/// operands then default to zero. A present-but-malformed query string
/// produces a deterministic plaintext `400` response instead of an abort.
#[must_use]
pub fn serve_query(query: Option<&str>) -> Response {
    let operands = match query {
        None => Operands::default(),
        Some(raw) => match Operands::parse(raw) {
            Ok(operands) => operands,
            Err(err) => {
                log::warn!("rejecting query string {raw:?}: {err}");
                return Response::bad_request(err);
            }
        },
    };
    log::info!(
        "answering {} + {} = {}",
        operands.a,
        operands.b,
        operands.sum()
    );
    Response::html(render::answer_page(operands))
}
