use clap::{error::ErrorKind, Parser};
use transcost::app::TransCostApp;

fn main() {
    env_logger::init();
    let args = match TransCostApp::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
