use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::icon::{encode_png, render_icon};

/// Render every configured size and write it below `root`, printing
/// `Created <dir>/<file>` to `out` after each successful write.
///
/// The output directory must already exist; it is never created here. The
/// first failure aborts the batch, so files for earlier sizes stay on disk
/// and later ones are not written. Returns the written paths in order.
pub fn generate_icons<W: Write>(root: &Path, config: &GeneratorConfig, out: &mut W) -> Result<Vec<PathBuf>> {
    log::info!("generating {} icons into {}", config.sizes.len(), root.join(&config.output_dir).display());
    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let img = render_icon(size);
        let bytes = encode_png(&img)?;
        let path = config.output_path(root, size);
        fs::write(&path, &bytes)?;
        log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        writeln!(out, "Created {}", config.relative_path(size))?;
        written.push(path);
    }
    log::info!("done, {} files written", written.len());
    Ok(written)
}
