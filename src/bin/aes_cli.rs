use std::process::ExitCode;

use filecipher::app::symmetric::App;

fn main() -> ExitCode {
    match App::init() {
        Ok(app) => filecipher::app::finish(app.execute()),
        Err(code) => code,
    }
}
