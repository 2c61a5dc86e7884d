//! Check command: confirms the configuration loaded.

use anyhow::Result;
use contract_build_config::BuildConfiguration;
use std::io::Write;

pub fn run(config: &BuildConfiguration, out: &mut impl Write) -> Result<()> {
    for (name, network) in config.networks() {
        writeln!(
            out,
            "configuration OK (profile: {}, network: {}, accounts: {})",
            config.profile(),
            name,
            network.accounts().len()
        )?;
    }
    Ok(())
}
