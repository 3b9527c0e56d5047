//! Generate payloads for the rendering boundary

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

pub fn run(blog: &Blog) -> Result<()> {
    let count = Generator::new(blog).generate()?;
    println!(
        "Exported {} post(s) to {}",
        count,
        blog.public_dir.display()
    );
    Ok(())
}
