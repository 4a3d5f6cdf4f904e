use anyhow::Result;

fn main() -> Result<()> {
    package_info_gen::run_cli()
}
