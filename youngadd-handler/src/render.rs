//! Rendering of the fixed HTML page served by the adder.

use crate::query::Operands;

const PAGE_TITLE: &str = "Young Web Server";
const PAGE_HEADING: &str = "Welcom to Young add application: "; // sic

/// Renders the answer page for one operand pair.
///
/// The output is deterministic and byte-stable: the template below is a
/// compatibility surface, down to its spelling and spacing.
#[must_use]
pub fn answer_page(operands: Operands) -> String {
    let Operands { a, b } = operands;
    let c = operands.sum();
    format!(
        "\
<html>
<head><title>{PAGE_TITLE}</title></head>
<body>
<h1>{PAGE_HEADING}</h1>
<p>The answer is : {a} + {b} = {c}</p>
<p>Thanks for visiting!</p>
</body>
</html>
"
    )
}
