fn main() -> anyhow::Result<()> {
    env_logger::init();
    airsched::cli::run()
}
