use crate::render::format_post;
use crate::util::State;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "feed", about = "Show the feed, newest first")]
pub struct Feed {}

impl Feed {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        if !state.is_authenticated() {
            println!("Sign in to create posts and interact with your network\n");
        }

        let now = state.now();
        let posts: Vec<String> = state
            .posts()
            .iter()
            .map(|post| format_post(post, state.user(), now))
            .collect();
        if posts.is_empty() {
            println!("No posts yet");
        } else {
            println!("{}", posts.join("\n\n"));
        }
        Ok(())
    }
}
