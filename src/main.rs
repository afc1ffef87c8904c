fn main() -> anyhow::Result<()> {
    on_this_day::cli::run()
}
