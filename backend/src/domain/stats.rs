//! Aggregate statistics over a collection of blog entries.
//!
//! Pure, deterministic functions decoupled from persistence and transport;
//! they operate on any materialized slice of entries. Ties are always broken
//! in favour of the earliest occurrence in the input, so results are stable
//! for a given input order.

use serde::Serialize;

use crate::domain::blog::Blog;

/// Projection of the entry holding the greatest like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: u64,
}

/// The author with the most entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: usize,
}

/// The author with the greatest summed like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// Sum of all like counters; zero for an empty collection.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes().value()).sum()
}

/// The entry with the strictly greatest like count.
///
/// Returns `None` for an empty collection. On a tie the entry occurring
/// earliest in the input wins.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let mut favorite: Option<&Blog> = None;
    for blog in blogs {
        let replace = match favorite {
            Some(current) => blog.likes() > current.likes(),
            None => true,
        };
        if replace {
            favorite = Some(blog);
        }
    }
    favorite.map(|blog| FavoriteBlog {
        title: blog.title().as_ref().to_owned(),
        author: blog.author().map(str::to_owned),
        likes: blog.likes().value(),
    })
}

/// The author with the most entries.
///
/// Entries without an author attribution cannot be grouped and are skipped.
/// Returns `None` when no entry carries an author. On a tie the author whose
/// first entry occurs earliest in the input wins.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    let tallies = tally_by_author(blogs, |_| 1);
    pick_max(tallies).map(|(author, count)| AuthorBlogCount {
        author,
        blogs: count as usize,
    })
}

/// The author with the greatest summed like count.
///
/// Same grouping and tie-break rules as [`most_blogs`].
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let tallies = tally_by_author(blogs, |blog| blog.likes().value());
    pick_max(tallies).map(|(author, likes)| AuthorLikes { author, likes })
}

/// Accumulate a per-author total, preserving first-occurrence order.
fn tally_by_author(blogs: &[Blog], weight: impl Fn(&Blog) -> u64) -> Vec<(String, u64)> {
    let mut tallies: Vec<(String, u64)> = Vec::new();
    for blog in blogs {
        let Some(author) = blog.author() else {
            continue;
        };
        match tallies.iter_mut().find(|(name, _)| name == author) {
            Some((_, total)) => *total += weight(blog),
            None => tallies.push((author.to_owned(), weight(blog))),
        }
    }
    tallies
}

/// Select the entry with the strictly greatest total; earliest entry wins ties.
fn pick_max(tallies: Vec<(String, u64)>) -> Option<(String, u64)> {
    let mut best: Option<(String, u64)> = None;
    for (author, total) in tallies {
        let replace = match &best {
            Some((_, current)) => total > *current,
            None => true,
        };
        if replace {
            best = Some((author, total));
        }
    }
    best
}
