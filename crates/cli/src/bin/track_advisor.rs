use anyhow::Result;

fn main() -> Result<()> {
    advisor_cli::main_entry()
}
