//! Validate all content files and report what would be dropped

use anyhow::Result;

use crate::content::{PostRepository, RejectReason};
use crate::Blog;

/// Scan the content directory and print every rejected file with the rules
/// it violated. Fails when any file is rejected, so this can gate CI.
pub fn run(blog: &Blog) -> Result<()> {
    let repo = PostRepository::new(blog);
    let scan = repo.scan();

    println!("Valid posts: {}", scan.posts.len());

    if scan.rejections.is_empty() {
        println!("All content files are valid.");
        return Ok(());
    }

    println!("Rejected files: {}", scan.rejections.len());
    for rejection in &scan.rejections {
        println!("  {}", rejection.filename);
        match &rejection.reason {
            RejectReason::Read(e) => println!("    unreadable: {}", e),
            RejectReason::Malformed(e) => println!("    {}", e),
            RejectReason::Invalid(report) => {
                for error in &report.errors {
                    println!("    {}", error);
                }
            }
        }
    }

    anyhow::bail!("{} content file(s) failed validation", scan.rejections.len());
}
