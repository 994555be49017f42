use clap::Subcommand;
use feed_core::{navigate, Navigation, Route, User};

use crate::render::format_user;
use crate::util::State;
use crate::AppError;

#[derive(Subcommand, Debug)]
pub enum Profile {
    Show(Show),
    Edit(Edit),
}

impl Profile {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        match self {
            Profile::Show(show) => show.run(state),
            Profile::Edit(edit) => edit.run(state),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show your profile")]
pub struct Show {}

impl Show {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        let user = profile_user(state)?;
        println!("{}", format_user(user));
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "edit", about = "Edit your profile")]
pub struct Edit {
    #[clap(long, help = "Full name")]
    name: Option<String>,
    #[clap(long, help = "Title or position")]
    title: Option<String>,
    #[clap(long, help = "Profile picture URL, empty to remove")]
    avatar: Option<String>,
}

impl Edit {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        let current = profile_user(state)?.clone();
        let name = self.name.as_deref().unwrap_or(&current.name);
        let title = self.title.as_deref().unwrap_or(&current.title);
        let avatar = self.avatar.as_deref().or(current.avatar.as_deref());

        let user = state.update_profile(name, title, avatar)?;
        println!("Profile updated\n{}", format_user(&user));
        Ok(())
    }
}

fn profile_user(state: &State) -> Result<&User, AppError> {
    match navigate(Route::Profile.path(), state.is_authenticated()) {
        Navigation::Render(_) => state.user().ok_or(AppError::SignInRequired),
        Navigation::Redirect(_) => Err(AppError::SignInRequired),
    }
}
