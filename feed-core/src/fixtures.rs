use std::collections::BTreeSet;

use crate::post::Post;
use crate::user::AuthorSnapshot;

fn author(id: &str, name: &str, title: &str, initials: &str) -> AuthorSnapshot {
    AuthorSnapshot {
        id: id.to_owned(),
        name: name.to_owned(),
        title: title.to_owned(),
        avatar: None,
        initials: initials.to_owned(),
    }
}

/// Posts shown on first run, before anything was persisted.
pub fn seeded_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_owned(),
            author: author(
                "user-1",
                "Jane Smith",
                "Product Manager at Tech Innovations Inc.",
                "JS",
            ),
            content: "Excited to announce that we just launched our new product feature! After months of hard work, our team has delivered something truly revolutionary. #ProductLaunch #Innovation".to_owned(),
            timestamp: "1d".to_owned(),
            image: Some("https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800&auto=format&fit=crop&q=60".to_owned()),
            likes: 324,
            comments: 52,
            liked_by: BTreeSet::new(),
            created_at: None,
        },
        Post {
            id: "2".to_owned(),
            author: author(
                "user-2",
                "Alex Johnson",
                "Software Engineer at StartupXYZ",
                "AJ",
            ),
            content: "Just fixed that pesky bug that's been bothering users for weeks. Small changes can make a big difference in user experience! #DeveloperLife #Coding".to_owned(),
            timestamp: "3d".to_owned(),
            image: None,
            likes: 87,
            comments: 12,
            liked_by: BTreeSet::new(),
            created_at: None,
        },
        Post {
            id: "3".to_owned(),
            author: author(
                "user-3",
                "Michael Brown",
                "Marketing Director at Global Brands",
                "MB",
            ),
            content: "Our latest marketing campaign has exceeded all expectations. Proud of the team for their creativity and hard work! Looking forward to the next challenge.".to_owned(),
            timestamp: "5d".to_owned(),
            image: Some("https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&auto=format&fit=crop&q=60".to_owned()),
            likes: 211,
            comments: 34,
            liked_by: BTreeSet::new(),
            created_at: None,
        },
    ]
}
