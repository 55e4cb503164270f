use std::process::ExitCode;

use log::error;
use sprite_pack::{logging, sprite_sheet};

fn main() -> ExitCode {
    logging::init();

    match sprite_sheet::pack(&sprite_sheet::PackerConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
