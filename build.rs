use anyhow::Result;
use vergen::EmitBuilder;

// Git metadata shown by `telemetry_csv --version`.
fn main() -> Result<()> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_dirty(false)
        .emit()?;
    Ok(())
}
