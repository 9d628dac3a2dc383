//! `ribbonboard variants` — Write every visually distinct device variant.

use super::{Context, write_file};
use ribbonboard_render::variants;
use std::path::{Path, PathBuf};

pub async fn run(
    code: String,
    max: Option<u32>,
    dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let ribbon = ctx.ribbon(&code)?;
    let max = max.unwrap_or(ctx.config.variants.max_count);
    let dir = dir.unwrap_or_else(|| ctx.config.output_dir.clone());

    let rendered = variants(ribbon, max, &ctx.opts);
    for (count, svg) in &rendered {
        write_file(&variant_path(&dir, ribbon.code(), *count), svg).await?;
    }
    println!(
        "Wrote {} variant(s) of {} to {}",
        rendered.len(),
        ribbon.code(),
        dir.display()
    );
    Ok(())
}

/// File for the `count`-award variant, e.g. `SSD-3.svg`.
fn variant_path(dir: &Path, code: &str, count: u32) -> PathBuf {
    dir.join(format!("{code}-{count}.svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_file_names() {
        assert_eq!(
            variant_path(Path::new("out"), "SSD", 15),
            PathBuf::from("out/SSD-15.svg")
        );
    }
}
