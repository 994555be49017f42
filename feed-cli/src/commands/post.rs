use clap::Subcommand;

use crate::render::format_post;
use crate::util::State;
use crate::AppError;

#[derive(Subcommand, Debug)]
pub enum Post {
    Add(Add),
    Edit(Edit),
    Delete(Delete),
    Like(Like),
}

impl Post {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        match self {
            Post::Add(add) => add.run(state),
            Post::Edit(edit) => edit.run(state),
            Post::Delete(delete) => delete.run(state),
            Post::Like(like) => like.run(state),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Publish a post")]
pub struct Add {
    #[clap(help = "What do you want to talk about?")]
    content: String,
    #[clap(long, help = "Image URL")]
    image: Option<String>,
}

impl Add {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        if self.content.trim().is_empty() {
            return Err(AppError::EmptyPost);
        }

        let post = state
            .add_post(&self.content, self.image.as_deref())?
            .ok_or(AppError::SignInRequired)?;
        println!("Your post has been published!\n");
        println!("{}", format_post(&post, state.user(), state.now()));
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "edit", about = "Edit one of your posts")]
pub struct Edit {
    #[clap(help = "Post id")]
    id: String,
    #[clap(help = "New content")]
    content: String,
    #[clap(long, help = "New image URL, the current one is kept otherwise")]
    image: Option<String>,
}

impl Edit {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        authorize(state, &self.id)?;
        state.update_post(&self.id, &self.content, self.image.as_deref())?;
        println!("Your post has been updated successfully");
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "delete", about = "Delete one of your posts")]
pub struct Delete {
    #[clap(help = "Post id")]
    id: String,
}

impl Delete {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        authorize(state, &self.id)?;
        state.delete_post(&self.id)?;
        println!("Your post has been removed");
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "like", about = "Like or unlike a post")]
pub struct Like {
    #[clap(help = "Post id")]
    id: String,
}

impl Like {
    pub fn run(&self, state: &mut State) -> Result<(), AppError> {
        if !state.is_authenticated() {
            return Err(AppError::SignInRequired);
        }

        let liked = state
            .like_post(&self.id)?
            .ok_or_else(|| AppError::PostNotFound(self.id.clone()))?;
        let likes = state.post(&self.id).map_or(0, |post| post.likes);
        if liked {
            println!("Liked post {} ({} likes)", self.id, likes);
        } else {
            println!("Unliked post {} ({} likes)", self.id, likes);
        }
        Ok(())
    }
}

/// Edit and delete are only offered on posts the current user wrote.
fn authorize(state: &State, id: &str) -> Result<(), AppError> {
    let user = state.user().ok_or(AppError::SignInRequired)?;
    let post = state
        .post(id)
        .ok_or_else(|| AppError::PostNotFound(id.to_owned()))?;
    if !post.is_authored_by(Some(user)) {
        return Err(AppError::NotAuthor(id.to_owned()));
    }
    Ok(())
}
