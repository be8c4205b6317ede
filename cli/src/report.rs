//! Writing the rendered showcase to an output stream.

use std::io::Write;

use anyhow::{Context, Result};

use scalars_types::Showcase;

/// Write the full showcase block to `out` and flush it.
pub fn write_showcase<W: Write>(out: &mut W, showcase: &Showcase) -> Result<()> {
    let rendered = showcase.render();

    out.write_all(rendered.as_bytes())
        .context("failed to write showcase to stdout")?;
    out.flush().context("failed to flush stdout")?;

    tracing::debug!(bytes = rendered.len(), "Showcase written");
    Ok(())
}
