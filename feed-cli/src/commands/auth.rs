use feed_core::{navigate, Navigation, Route};

use crate::render::format_user;
use crate::util::State;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "login", about = "Sign in")]
pub struct Login {
    #[clap(help = "Email address")]
    email: String,
    #[clap(help = "Password, any non-empty value is accepted")]
    password: String,
}

impl Login {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        if already_signed_in(state, Route::Login) {
            return Ok(());
        }

        let user = state.login(&self.email, &self.password)?;
        println!("Signed in as {}", user.name);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "signup", about = "Create an account")]
pub struct Signup {
    #[clap(help = "Full name")]
    name: String,
    #[clap(help = "Email address")]
    email: String,
    #[clap(help = "Password, any non-empty value is accepted")]
    password: String,
    #[clap(long, default_value = "", help = "Title or position")]
    title: String,
}

impl Signup {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        if already_signed_in(state, Route::Signup) {
            return Ok(());
        }

        let user =
            state.signup(&self.name, &self.email, &self.password, &self.title)?;
        println!("Welcome, {}!", user.name);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "logout", about = "Sign out")]
pub struct Logout {}

impl Logout {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        state.logout()?;
        println!("You have been successfully logged out");
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "whoami", about = "Show the current user")]
pub struct Whoami {}

impl Whoami {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        match state.user() {
            Some(user) => println!("{}", format_user(user)),
            None => println!("Not signed in"),
        }
        Ok(())
    }
}

fn already_signed_in(state: &State, page: Route) -> bool {
    match (navigate(page.path(), state.is_authenticated()), state.user()) {
        (Navigation::Redirect(_), Some(user)) => {
            println!("Already signed in as {}", user.name);
            true
        }
        _ => false,
    }
}
