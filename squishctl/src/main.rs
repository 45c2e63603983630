mod application;
mod logging;
mod notifiers;
mod presentation;

use squish_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
