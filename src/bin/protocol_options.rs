use std::{error::Error, sync::Arc};

use clap::Parser;
use log::info;
use protocol_options::{Cli, Manager};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let options = Arc::new(cli.options()?);
    info!("resolved {options:?}");

    let manager = Manager::new(cli.contact_points.clone(), options);

    for host in manager.contact_points() {
        let settings = manager.connection_settings(*host);
        let startup = settings.startup();
        println!(
            "{} ssl={} compression={:?} startup={:?}",
            settings.address,
            settings.ssl.is_some(),
            settings.compression,
            startup.options()
        );
    }

    Ok(())
}
