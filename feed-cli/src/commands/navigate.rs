use feed_core::{navigate, Navigation};

use crate::util::State;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "navigate", about = "Resolve a page path")]
pub struct Navigate {
    #[clap(help = "Path such as / or /profile")]
    path: String,
}

impl Navigate {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        match navigate(&self.path, state.is_authenticated()) {
            Navigation::Render(route) => println!("render {}", route),
            Navigation::Redirect(route) => println!("redirect {}", route),
        }
        Ok(())
    }
}
