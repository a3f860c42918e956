use anyhow::Result;

fn main() -> Result<()> {
    memtempdir::cli::run()
}
