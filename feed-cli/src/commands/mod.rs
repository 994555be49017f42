use clap::Subcommand;

pub mod auth;
mod feed;
mod navigate;
pub mod post;
pub mod profile;
mod reset;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Sign in with any email and password")]
    Login(auth::Login),
    #[command(about = "Create an account and sign in")]
    Signup(auth::Signup),
    #[command(about = "Sign out and forget the stored user")]
    Logout(auth::Logout),
    #[command(about = "Show who is signed in")]
    Whoami(auth::Whoami),
    #[command(about = "Show or edit your profile")]
    Profile {
        #[clap(subcommand)]
        subcommand: profile::Profile,
    },
    #[command(about = "Show the feed")]
    Feed(feed::Feed),
    #[command(about = "Write, edit, delete and like posts")]
    Post {
        #[clap(subcommand)]
        subcommand: post::Post,
    },
    #[command(about = "Resolve a page path the way the app would")]
    Navigate(navigate::Navigate),
    #[command(about = "Erase all stored data")]
    Reset(reset::Reset),
}
